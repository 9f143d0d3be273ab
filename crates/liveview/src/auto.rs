#![forbid(unsafe_code)]

//! `AutoView`: re-render on every successful field write.
//!
//! The wrapper routes writes through the view's own validated setter and
//! runs the post-write hook — [`ViewModel::update_display`] — only after
//! the write lands. One write, one render; there is no batching. A failed
//! validation propagates unchanged and no render happens. Before the first
//! `display()` the hook is a no-op, so early writes are cheap.

use std::cell::RefCell;
use std::rc::Rc;

use liveview_record::{FieldValue, Fields, ValidationError};
use liveview_sink::{DisplayHandle, DisplaySink};

use crate::error::ViewError;
use crate::model::ViewModel;
use crate::view::View;

/// A view model whose display follows its field writes automatically.
pub struct AutoView<V: View, S: DisplaySink> {
    inner: ViewModel<V, S>,
}

impl<V: View, S: DisplaySink> AutoView<V, S> {
    /// Bind a view to a shared sink.
    pub fn new(view: V, sink: Rc<RefCell<S>>) -> Self {
        Self {
            inner: ViewModel::new(view, sink),
        }
    }

    /// Bind a view to a sink this model will own exclusively.
    pub fn with_sink(view: V, sink: S) -> Self {
        Self {
            inner: ViewModel::with_sink(view, sink),
        }
    }

    /// The wrapped view.
    pub fn view(&self) -> &V {
        self.inner.view()
    }

    /// The display slot handle, if `display()` has succeeded.
    #[must_use]
    pub fn handle(&self) -> Option<DisplayHandle> {
        self.inner.handle()
    }

    /// Whether this model currently owns a display slot.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.inner.is_displayed()
    }

    /// Render and show the view (slot-reuse policy, see [`ViewModel::display`]).
    ///
    /// # Errors
    ///
    /// Propagates sink failures as [`ViewError::Sink`].
    pub fn display(&mut self) -> Result<DisplayHandle, ViewError> {
        self.inner.display()
    }

    /// Mutate the view in place, then run the post-write hook once.
    ///
    /// This is the escape hatch for mutations that are not single field
    /// writes (appending to a buffer, swapping several fields as one step).
    /// The hook runs exactly once however much `f` changes.
    ///
    /// # Errors
    ///
    /// Propagates sink failures as [`ViewError::Sink`].
    pub fn apply(&mut self, f: impl FnOnce(&mut V)) -> Result<(), ViewError> {
        f(self.inner.view_mut());
        self.inner.update_display()
    }

    /// Unwrap into the plain (non-reactive) view model.
    pub fn into_inner(self) -> ViewModel<V, S> {
        self.inner
    }
}

impl<V: View + Fields, S: DisplaySink> AutoView<V, S> {
    /// Read a field by name.
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError::UnknownField`] from the view.
    pub fn get(&self, name: &str) -> Result<FieldValue, ValidationError> {
        self.inner.view().get_field(name)
    }

    /// Write a field, then re-render into the existing slot.
    ///
    /// The write is validated by the view's own `set_field` first. On
    /// success the post-write hook re-renders in place — exactly one render
    /// per write. On failure the error propagates and `render()` is never
    /// called, so the visible output keeps its previous content.
    ///
    /// # Errors
    ///
    /// [`ViewError::Validation`] when the write is rejected,
    /// [`ViewError::Sink`] when the re-render cannot be delivered.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), ViewError> {
        let value = value.into();
        if let Err(err) = self.inner.view_mut().set_field(name, value) {
            tracing::debug!(field = name, error = %err, "field write rejected");
            return Err(err.into());
        }
        self.inner.update_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveview_record::{FieldType, Record, Schema};
    use liveview_render::Representation;
    use liveview_sink::MemorySink;

    struct Status {
        record: Record,
    }

    impl Status {
        fn new(state: &str) -> Self {
            let schema = Schema::builder()
                .field("state", FieldType::Str)
                .field_with_default("code", 0i64)
                .build()
                .unwrap();
            Self {
                record: Record::new(schema, [("state", FieldValue::from(state))]).unwrap(),
            }
        }
    }

    impl View for Status {
        fn render(&self) -> Representation {
            let state = self.record.get("state").map(ToString::to_string).unwrap_or_default();
            let code = self.record.get("code").map(ToString::to_string).unwrap_or_default();
            Representation::Text(format!("{state} ({code})"))
        }
    }

    impl Fields for Status {
        fn get_field(&self, name: &str) -> Result<FieldValue, ValidationError> {
            self.record.get_field(name)
        }

        fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
            self.record.set_field(name, value)
        }
    }

    #[test]
    fn set_before_display_is_silent() {
        let mut view = AutoView::with_sink(Status::new("idle"), MemorySink::new());
        view.set("state", "running").unwrap();

        assert!(!view.is_displayed());
        let sink = view.into_inner().sink();
        assert_eq!(sink.borrow().slot_count(), 0);
        assert_eq!(sink.borrow().updated(), 0);
    }

    #[test]
    fn set_after_display_rerenders_in_place() {
        let mut view = AutoView::with_sink(Status::new("idle"), MemorySink::new());
        let handle = view.display().unwrap();

        view.set("state", "running").unwrap();
        view.set("code", 2i64).unwrap();

        let sink = view.into_inner().sink();
        assert_eq!(sink.borrow().slot_count(), 1);
        assert_eq!(sink.borrow().updates_for(handle), Some(2));
        sink.borrow().assert_slot(handle, "running (2)");
    }

    #[test]
    fn rejected_write_renders_nothing() {
        let mut view = AutoView::with_sink(Status::new("idle"), MemorySink::new());
        let handle = view.display().unwrap();

        let err = view.set("code", "not a number").unwrap_err();
        assert!(matches!(err, ViewError::Validation(_)));
        assert_eq!(view.get("code").unwrap(), FieldValue::Int(0));

        let sink = view.into_inner().sink();
        assert_eq!(sink.borrow().updated(), 0);
        sink.borrow().assert_slot(handle, "idle (0)");
    }

    #[test]
    fn apply_runs_hook_once() {
        let mut view = AutoView::with_sink(Status::new("idle"), MemorySink::new());
        let handle = view.display().unwrap();

        view.apply(|status| {
            status.record.set("state", FieldValue::from("done")).unwrap();
            status.record.set("code", FieldValue::Int(7)).unwrap();
        })
        .unwrap();

        let sink = view.into_inner().sink();
        assert_eq!(sink.borrow().updates_for(handle), Some(1));
        sink.borrow().assert_slot(handle, "done (7)");
    }

    #[test]
    fn get_reads_through() {
        let view = AutoView::with_sink(Status::new("idle"), MemorySink::new());
        assert_eq!(view.get("state").unwrap(), FieldValue::from("idle"));
        assert!(view.get("nope").is_err());
    }
}
