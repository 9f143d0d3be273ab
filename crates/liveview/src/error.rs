#![forbid(unsafe_code)]

//! Errors surfaced by the view-model layer.
//!
//! There are exactly two sources, both propagated to the caller untouched:
//! field validation failures from the record layer (surfaced before any
//! render happens) and display failures from the sink layer.

use std::fmt;

use liveview_record::ValidationError;
use liveview_sink::SinkError;

/// An error from displaying or mutating a view model.
#[derive(Debug)]
pub enum ViewError {
    /// A field write failed validation; no render was attempted.
    Validation(ValidationError),
    /// The host display surface failed or is unavailable.
    Sink(SinkError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Sink(err) => write!(f, "display failed: {err}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ViewError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<SinkError> for ViewError {
    fn from(err: SinkError) -> Self {
        Self::Sink(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveview_record::FieldType;

    #[test]
    fn wraps_validation_error() {
        let err = ViewError::from(ValidationError::TypeMismatch {
            field: "age".into(),
            expected: FieldType::Int,
            actual: FieldType::Str,
        });
        assert!(matches!(err, ViewError::Validation(_)));
        assert!(err.to_string().starts_with("validation failed:"));
    }

    #[test]
    fn wraps_sink_error() {
        let err = ViewError::from(SinkError::Unavailable("no host".into()));
        assert!(matches!(err, ViewError::Sink(_)));
        assert_eq!(
            err.to_string(),
            "display failed: display capability unavailable: no host"
        );
    }

    #[test]
    fn source_chain() {
        use std::error::Error as _;
        let err = ViewError::from(ValidationError::UnknownField("x".into()));
        assert!(err.source().is_some());
    }
}
