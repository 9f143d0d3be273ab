#![forbid(unsafe_code)]

//! Displayable representations for LiveView.
//!
//! A view's `render()` produces a [`Representation`]: plain text, HTML, or
//! Markdown, each tagged with its mimetype so a host adapter can pick the
//! right output channel. This crate also carries the conversion helpers the
//! sinks lean on:
//!
//! - [`escape_html`]: entity-escape untrusted text, borrowed fast path.
//! - [`markdown_to_html`]: CommonMark conversion via pulldown-cmark.
//! - [`ToHtml`] / [`ToMarkdown`]: protocols for values that know how to
//!   produce their own markup.

pub mod escape;
pub mod markdown;
pub mod representation;

pub use escape::escape_html;
pub use markdown::markdown_to_html;
pub use representation::{Representation, ToHtml, ToMarkdown};
