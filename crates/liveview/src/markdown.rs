#![forbid(unsafe_code)]

//! A bundled streaming Markdown view.
//!
//! `Markdown` holds a single `content` string and renders it as a
//! [`Representation::Markdown`]. Wrapped in an [`AutoView`] it becomes a
//! live Markdown element that repaints on every append, which is the shape
//! wanted for emitting model or log output as it is generated:
//!
//! ```
//! use liveview::{AutoView, Markdown, MemorySink};
//!
//! let mut md = AutoView::with_sink(Markdown::new(), MemorySink::new());
//! md.display().unwrap();
//! for chunk in ["This will come out", " one chunk", " at a time"] {
//!     md.append(chunk).unwrap();
//! }
//! assert_eq!(md.view().content(), "This will come out one chunk at a time");
//! ```

use liveview_record::{FieldType, FieldValue, Fields, ValidationError};
use liveview_render::Representation;
use liveview_sink::DisplaySink;

use crate::auto::AutoView;
use crate::error::ViewError;
use crate::view::View;

/// A view over a growing Markdown string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markdown {
    content: String,
}

impl Markdown {
    /// An empty Markdown view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A Markdown view with initial content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The accumulated Markdown source.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl View for Markdown {
    fn render(&self) -> Representation {
        Representation::Markdown(self.content.clone())
    }
}

impl Fields for Markdown {
    fn get_field(&self, name: &str) -> Result<FieldValue, ValidationError> {
        match name {
            "content" => Ok(FieldValue::Str(self.content.clone())),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        match (name, value) {
            ("content", FieldValue::Str(s)) => {
                self.content = s;
                Ok(())
            }
            ("content", other) => Err(ValidationError::TypeMismatch {
                field: "content".to_string(),
                expected: FieldType::Str,
                actual: other.kind(),
            }),
            (other, _) => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl<S: DisplaySink> AutoView<Markdown, S> {
    /// Append a chunk of Markdown and re-render in place.
    ///
    /// # Errors
    ///
    /// Propagates sink failures as [`ViewError::Sink`].
    pub fn append(&mut self, chunk: &str) -> Result<(), ViewError> {
        self.apply(|md| md.content.push_str(chunk))
    }
}
