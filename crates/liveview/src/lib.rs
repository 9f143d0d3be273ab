#![forbid(unsafe_code)]

//! Live-updating view models.
//!
//! # Role in LiveView
//!
//! This is the top of the stack: it ties a data object (anything
//! implementing [`View`], usually backed by a validated record) to a
//! display slot in a host environment, and keeps the two in sync.
//!
//! - [`View`]: the render contract. Implementations turn current state
//!   into a [`Representation`].
//! - [`ViewModel`]: pairs a view with a [`DisplaySink`]. `display()` shows
//!   the rendered output and keeps the slot's handle; `update_display()`
//!   re-renders into the same slot in place.
//! - [`AutoView`]: the reactive variant. Every field write routed through
//!   [`set`](AutoView::set) (or any mutation through
//!   [`apply`](AutoView::apply)) triggers exactly one re-render once the
//!   write has validated.
//! - [`Markdown`]: a bundled streaming view for emitting Markdown one
//!   chunk at a time, re-rendering on each append.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::RefCell;
//! use liveview::{AutoView, FieldType, FieldValue, Fields, MemorySink, Record,
//!                Representation, Schema, ValidationError, View};
//!
//! struct PersonView {
//!     record: Record,
//! }
//!
//! impl View for PersonView {
//!     fn render(&self) -> Representation {
//!         let name = self.record.get("name").map(ToString::to_string).unwrap_or_default();
//!         let age = self.record.get("age").map(ToString::to_string).unwrap_or_default();
//!         Representation::Html(format!("<b>{name}</b> is {age} years old."))
//!     }
//! }
//!
//! impl Fields for PersonView {
//!     fn get_field(&self, name: &str) -> Result<FieldValue, ValidationError> {
//!         self.record.get_field(name)
//!     }
//!     fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
//!         self.record.set_field(name, value)
//!     }
//! }
//!
//! let schema = Schema::builder()
//!     .field("name", FieldType::Str)
//!     .field("age", FieldType::Int)
//!     .build()
//!     .unwrap();
//! let record = Record::new(schema, [
//!     ("name", FieldValue::from("Kyle")),
//!     ("age", FieldValue::from(35i64)),
//! ]).unwrap();
//!
//! let sink = Rc::new(RefCell::new(MemorySink::new()));
//! let mut view = AutoView::new(PersonView { record }, Rc::clone(&sink));
//!
//! let handle = view.display().unwrap();
//! sink.borrow().assert_slot(handle, "<b>Kyle</b> is 35 years old.");
//!
//! view.set("age", 101i64).unwrap();
//! sink.borrow().assert_slot(handle, "<b>Kyle</b> is 101 years old.");
//! ```

pub mod auto;
pub mod error;
pub mod markdown;
pub mod model;
pub mod view;

pub use auto::AutoView;
pub use error::ViewError;
pub use markdown::Markdown;
pub use model::ViewModel;
pub use view::View;

pub use liveview_record::{
    FieldSpec, FieldType, FieldValue, Fields, Record, Schema, SchemaBuilder, ValidationError,
};
pub use liveview_render::{Representation, ToHtml, ToMarkdown, escape_html, markdown_to_html};
pub use liveview_sink::{
    AnsiSink, DisplayHandle, DisplaySink, MemorySink, SinkError, UnavailableSink,
};
