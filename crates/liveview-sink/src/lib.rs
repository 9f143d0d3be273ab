#![forbid(unsafe_code)]

//! Display sinks: where rendered representations go.
//!
//! A [`DisplaySink`] is the host environment's output surface, reduced to
//! the two operations the view layer needs:
//!
//! - [`create`](DisplaySink::create): show a representation in a **new**
//!   display slot and hand back an opaque [`DisplayHandle`] for it.
//! - [`update`](DisplaySink::update): replace a slot's content **in place**.
//!
//! Two sinks ship with the crate: [`MemorySink`](memory::MemorySink) for
//! tests and CI, and [`AnsiSink`](ansi::AnsiSink) for inline terminal
//! repaint. A notebook adapter is one impl of the same trait away.
//!
//! # Invariants
//!
//! 1. `create` never reuses a handle; each call yields a distinct slot.
//! 2. `update` only ever touches the slot named by its handle.
//! 3. Errors propagate to the caller untouched; sinks do not retry.

use std::fmt;
use std::io;

use liveview_render::Representation;

pub mod ansi;
pub mod memory;

pub use ansi::AnsiSink;
pub use memory::{MemorySink, UnavailableSink};

/// Opaque reference to one mutable display slot.
///
/// Handles are issued by a sink's `create` and are only meaningful to the
/// sink that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(u64);

impl DisplayHandle {
    /// Construct a handle from a raw slot id. For sink implementations.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw slot id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Errors from a display sink.
#[derive(Debug)]
pub enum SinkError {
    /// The host has no usable display capability.
    Unavailable(String),
    /// The handle does not name a slot this sink can still address.
    StaleHandle(DisplayHandle),
    /// The underlying writer failed.
    Io(io::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "display capability unavailable: {reason}"),
            Self::StaleHandle(handle) => write!(f, "{handle} is no longer addressable"),
            Self::Io(err) => write!(f, "display write failed: {err}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// An output surface that can show representations and replace them in place.
pub trait DisplaySink {
    /// Show `representation` in a new display slot.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unavailable`] if the host cannot display at all, or
    /// [`SinkError::Io`] if the underlying writer fails.
    fn create(&mut self, representation: &Representation) -> Result<DisplayHandle, SinkError>;

    /// Replace the content of the slot named by `handle`, in place.
    ///
    /// # Errors
    ///
    /// [`SinkError::StaleHandle`] if the handle no longer names an
    /// addressable slot, plus the failure modes of [`create`](Self::create).
    fn update(
        &mut self,
        handle: DisplayHandle,
        representation: &Representation,
    ) -> Result<(), SinkError>;
}
