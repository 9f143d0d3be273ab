#![forbid(unsafe_code)]

//! The `Representation` type and the representable protocols.
//!
//! # Invariants
//!
//! 1. A representation's mimetype is determined solely by its variant.
//! 2. `into_html` never emits raw text unescaped: the `Text` variant is
//!    entity-escaped, the `Markdown` variant is converted, `Html` passes
//!    through as-is (the author of HTML markup owns its safety).

use std::fmt;

use crate::escape::escape_html;
use crate::markdown::markdown_to_html;

/// A displayable rendering of a view's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// Plain text, shown verbatim.
    Text(String),
    /// An HTML fragment.
    Html(String),
    /// Markdown source.
    Markdown(String),
}

impl Representation {
    /// The mimetype a host adapter should publish this under.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Text(_) => "text/plain",
            Self::Html(_) => "text/html",
            Self::Markdown(_) => "text/markdown",
        }
    }

    /// Borrow the raw payload, whatever the variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Html(s) | Self::Markdown(s) => s,
        }
    }

    /// Consume into the raw payload.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) | Self::Html(s) | Self::Markdown(s) => s,
        }
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Convert to an HTML fragment: text is entity-escaped, Markdown is
    /// converted, HTML passes through unchanged.
    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Text(s) => escape_html(&s).into_owned(),
            Self::Html(s) => s,
            Self::Markdown(s) => markdown_to_html(&s),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that can produce their own HTML markup.
pub trait ToHtml {
    /// Produce an HTML fragment for this value.
    fn to_html(&self) -> String;

    /// Package the markup as a [`Representation::Html`].
    fn representation(&self) -> Representation {
        Representation::Html(self.to_html())
    }
}

/// Values that can produce their own Markdown source.
pub trait ToMarkdown {
    /// Produce Markdown source for this value.
    fn to_markdown(&self) -> String;

    /// Package the source as a [`Representation::Markdown`].
    fn representation(&self) -> Representation {
        Representation::Markdown(self.to_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types() {
        assert_eq!(Representation::Text("x".into()).mime_type(), "text/plain");
        assert_eq!(Representation::Html("x".into()).mime_type(), "text/html");
        assert_eq!(
            Representation::Markdown("x".into()).mime_type(),
            "text/markdown"
        );
    }

    #[test]
    fn as_str_borrows_payload() {
        let rep = Representation::Html("<b>hi</b>".into());
        assert_eq!(rep.as_str(), "<b>hi</b>");
        assert!(!rep.is_empty());
        assert_eq!(rep.into_string(), "<b>hi</b>");
    }

    #[test]
    fn into_html_escapes_text() {
        let rep = Representation::Text("1 < 2 & 3".into());
        assert_eq!(rep.into_html(), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn into_html_passes_html_through() {
        let rep = Representation::Html("<b>hi</b>".into());
        assert_eq!(rep.into_html(), "<b>hi</b>");
    }

    #[test]
    fn into_html_converts_markdown() {
        let html = Representation::Markdown("**bold**".into()).into_html();
        assert!(html.contains("<strong>bold</strong>"), "got: {html}");
    }

    #[test]
    fn protocols_package_markup() {
        struct Badge(&'static str);
        impl ToHtml for Badge {
            fn to_html(&self) -> String {
                format!("<span class=\"badge\">{}</span>", self.0)
            }
        }
        impl ToMarkdown for Badge {
            fn to_markdown(&self) -> String {
                format!("**{}**", self.0)
            }
        }

        let badge = Badge("ok");
        assert_eq!(
            ToHtml::representation(&badge),
            Representation::Html("<span class=\"badge\">ok</span>".into())
        );
        assert_eq!(
            ToMarkdown::representation(&badge),
            Representation::Markdown("**ok**".into())
        );
    }
}
