#![forbid(unsafe_code)]

//! `ViewModel`: a view bound to one display slot.
//!
//! # Lifecycle
//!
//! Each instance has exactly two states: **no handle** (initial) and
//! **has handle** (after the first successful `display()`), with a single
//! one-way transition between them. There is no teardown beyond drop.
//!
//! # Slot policy
//!
//! Repeated `display()` calls **reuse** the slot: the first call creates
//! it, every later call re-renders into it in place. At most one handle
//! ever exists per instance, so updates always target that handle and
//! never create a new slot implicitly.
//!
//! The sink is shared via `Rc<RefCell<_>>` so several view models can
//! write to one surface; everything is single-threaded and synchronous.

use std::cell::RefCell;
use std::rc::Rc;

use liveview_sink::{DisplayHandle, DisplaySink};

use crate::error::ViewError;
use crate::view::View;

/// A view paired with a display sink and (at most) one slot handle.
pub struct ViewModel<V: View, S: DisplaySink> {
    view: V,
    sink: Rc<RefCell<S>>,
    handle: Option<DisplayHandle>,
}

impl<V: View, S: DisplaySink> ViewModel<V, S> {
    /// Bind a view to a shared sink.
    pub fn new(view: V, sink: Rc<RefCell<S>>) -> Self {
        Self {
            view,
            sink,
            handle: None,
        }
    }

    /// Bind a view to a sink this model will own exclusively.
    pub fn with_sink(view: V, sink: S) -> Self {
        Self::new(view, Rc::new(RefCell::new(sink)))
    }

    /// The wrapped view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the wrapped view.
    ///
    /// Mutating through this accessor does **not** re-render; that is the
    /// contract of [`AutoView`](crate::AutoView).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the model and return the wrapped view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// A handle to the shared sink.
    pub fn sink(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.sink)
    }

    /// The display slot handle, if `display()` has succeeded.
    #[must_use]
    pub fn handle(&self) -> Option<DisplayHandle> {
        self.handle
    }

    /// Whether this model currently owns a display slot.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.handle.is_some()
    }

    /// Render and show the view.
    ///
    /// The first successful call creates the display slot and stores its
    /// handle; later calls re-render into that same slot.
    ///
    /// # Errors
    ///
    /// Propagates [`SinkError`](liveview_sink::SinkError) from the host
    /// surface; on error the handle state is unchanged.
    pub fn display(&mut self) -> Result<DisplayHandle, ViewError> {
        let representation = self.view.render();
        match self.handle {
            Some(handle) => {
                self.sink.borrow_mut().update(handle, &representation)?;
                tracing::debug!(slot = handle.id(), "redisplayed into existing slot");
                Ok(handle)
            }
            None => {
                let handle = self.sink.borrow_mut().create(&representation)?;
                self.handle = Some(handle);
                tracing::debug!(
                    slot = handle.id(),
                    mime = representation.mime_type(),
                    "created display slot"
                );
                Ok(handle)
            }
        }
    }

    /// Re-render into the existing slot, in place.
    ///
    /// A no-op when no slot exists yet; `render()` is not even called.
    ///
    /// # Errors
    ///
    /// Propagates [`SinkError`](liveview_sink::SinkError) from the host
    /// surface.
    pub fn update_display(&mut self) -> Result<(), ViewError> {
        let Some(handle) = self.handle else {
            return Ok(());
        };
        let representation = self.view.render();
        self.sink.borrow_mut().update(handle, &representation)?;
        tracing::trace!(slot = handle.id(), "updated display slot");
        Ok(())
    }
}
