#![forbid(unsafe_code)]

//! In-memory display sink for tests and CI.
//!
//! `MemorySink` keeps every slot in a `Vec` and counts create/update events,
//! so tests can assert things like "exactly one slot exists and it was
//! updated in place" without a real host environment. It is the headless
//! stand-in for a notebook or terminal surface.
//!
//! # Example
//!
//! ```
//! use liveview_render::Representation;
//! use liveview_sink::{DisplaySink, MemorySink};
//!
//! let mut sink = MemorySink::new();
//! let handle = sink.create(&Representation::Text("v1".into())).unwrap();
//! sink.update(handle, &Representation::Text("v2".into())).unwrap();
//!
//! assert_eq!(sink.slot_count(), 1);
//! assert_eq!(sink.content(handle).unwrap().as_str(), "v2");
//! ```

use liveview_render::Representation;

use crate::{DisplayHandle, DisplaySink, SinkError};

#[derive(Debug, Clone)]
struct Slot {
    handle: DisplayHandle,
    content: Representation,
    updates: u64,
}

/// A sink that records slots in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    slots: Vec<Slot>,
    next_id: u64,
    created: u64,
    updated: u64,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots ever created.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Total `create` calls observed.
    #[must_use]
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Total `update` calls observed (across all slots).
    #[must_use]
    pub fn updated(&self) -> u64 {
        self.updated
    }

    /// Current content of a slot, if the handle is known.
    #[must_use]
    pub fn content(&self, handle: DisplayHandle) -> Option<&Representation> {
        self.slot(handle).map(|s| &s.content)
    }

    /// Number of updates applied to one slot.
    #[must_use]
    pub fn updates_for(&self, handle: DisplayHandle) -> Option<u64> {
        self.slot(handle).map(|s| s.updates)
    }

    /// Handle of the most recently created slot.
    #[must_use]
    pub fn last_handle(&self) -> Option<DisplayHandle> {
        self.slots.last().map(|s| s.handle)
    }

    /// Assert a slot's current payload, with a readable failure message.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or the payload differs.
    #[track_caller]
    pub fn assert_slot(&self, handle: DisplayHandle, expected: &str) {
        match self.content(handle) {
            Some(content) => assert_eq!(
                content.as_str(),
                expected,
                "{handle} content mismatch\n  expected: {expected:?}\n  actual:   {:?}",
                content.as_str(),
            ),
            None => panic!("{handle} does not exist in this sink"),
        }
    }

    fn slot(&self, handle: DisplayHandle) -> Option<&Slot> {
        self.slots.iter().find(|s| s.handle == handle)
    }
}

impl DisplaySink for MemorySink {
    fn create(&mut self, representation: &Representation) -> Result<DisplayHandle, SinkError> {
        let handle = DisplayHandle::new(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.slots.push(Slot {
            handle,
            content: representation.clone(),
            updates: 0,
        });
        tracing::debug!(slot = handle.id(), mime = representation.mime_type(), "created memory slot");
        Ok(handle)
    }

    fn update(
        &mut self,
        handle: DisplayHandle,
        representation: &Representation,
    ) -> Result<(), SinkError> {
        let Some(slot) = self.slots.iter_mut().find(|s| s.handle == handle) else {
            return Err(SinkError::StaleHandle(handle));
        };
        slot.content = representation.clone();
        slot.updates += 1;
        self.updated += 1;
        tracing::trace!(slot = handle.id(), "updated memory slot");
        Ok(())
    }
}

/// A sink standing in for a host with no display capability.
///
/// Every operation fails with [`SinkError::Unavailable`]; tests use it to
/// check that display failures propagate instead of being swallowed.
#[derive(Debug, Clone)]
pub struct UnavailableSink {
    reason: String,
}

impl UnavailableSink {
    /// Create a sink that rejects everything with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DisplaySink for UnavailableSink {
    fn create(&mut self, _representation: &Representation) -> Result<DisplayHandle, SinkError> {
        Err(SinkError::Unavailable(self.reason.clone()))
    }

    fn update(
        &mut self,
        _handle: DisplayHandle,
        _representation: &Representation,
    ) -> Result<(), SinkError> {
        Err(SinkError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Representation {
        Representation::Text(s.into())
    }

    #[test]
    fn create_issues_distinct_handles() {
        let mut sink = MemorySink::new();
        let a = sink.create(&text("a")).unwrap();
        let b = sink.create(&text("b")).unwrap();
        assert_ne!(a, b);
        assert_eq!(sink.slot_count(), 2);
        assert_eq!(sink.created(), 2);
        assert_eq!(sink.last_handle(), Some(b));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut sink = MemorySink::new();
        let h = sink.create(&text("v1")).unwrap();
        sink.update(h, &text("v2")).unwrap();

        assert_eq!(sink.slot_count(), 1);
        assert_eq!(sink.updates_for(h), Some(1));
        sink.assert_slot(h, "v2");
    }

    #[test]
    fn update_unknown_handle_is_stale() {
        let mut sink = MemorySink::new();
        let err = sink.update(DisplayHandle::new(99), &text("x")).unwrap_err();
        assert!(matches!(err, SinkError::StaleHandle(h) if h.id() == 99));
    }

    #[test]
    fn update_targets_only_named_slot() {
        let mut sink = MemorySink::new();
        let a = sink.create(&text("a")).unwrap();
        let b = sink.create(&text("b")).unwrap();

        sink.update(a, &text("a2")).unwrap();
        sink.assert_slot(a, "a2");
        sink.assert_slot(b, "b");
        assert_eq!(sink.updates_for(b), Some(0));
    }

    #[test]
    #[should_panic(expected = "content mismatch")]
    fn assert_slot_reports_mismatch() {
        let mut sink = MemorySink::new();
        let h = sink.create(&text("actual")).unwrap();
        sink.assert_slot(h, "expected");
    }

    #[test]
    fn unavailable_sink_rejects_everything() {
        let mut sink = UnavailableSink::new("not a capable host");
        let err = sink.create(&text("x")).unwrap_err();
        assert!(matches!(err, SinkError::Unavailable(ref r) if r == "not a capable host"));

        let err = sink.update(DisplayHandle::new(0), &text("x")).unwrap_err();
        assert!(matches!(err, SinkError::Unavailable(_)));
    }
}
