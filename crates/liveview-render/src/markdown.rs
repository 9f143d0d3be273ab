#![forbid(unsafe_code)]

//! Markdown to HTML conversion.
//!
//! Used when a Markdown representation has to be delivered over an
//! HTML-only output channel. Parsing is CommonMark plus the GFM extensions
//! streaming views actually emit (tables, strikethrough, task lists).

use pulldown_cmark::{Options, Parser, html};

/// Convert Markdown source to an HTML fragment.
///
/// # Example
///
/// ```
/// use liveview_render::markdown_to_html;
///
/// let html = markdown_to_html("# Title\n\nSome *emphasis*.");
/// assert!(html.contains("<h1>Title</h1>"));
/// ```
#[must_use]
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    // CommonMark output is roughly the source length plus tag overhead.
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_and_strong() {
        let out = markdown_to_html("*em* and **strong**");
        assert!(out.contains("<em>em</em>"), "got: {out}");
        assert!(out.contains("<strong>strong</strong>"), "got: {out}");
    }

    #[test]
    fn heading() {
        assert!(markdown_to_html("# Hello").contains("<h1>Hello</h1>"));
    }

    #[test]
    fn strikethrough_extension_enabled() {
        let out = markdown_to_html("~~gone~~");
        assert!(out.contains("<del>gone</del>"), "got: {out}");
    }

    #[test]
    fn table_extension_enabled() {
        let out = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<table>"), "got: {out}");
    }

    #[test]
    fn raw_text_in_markdown_is_escaped() {
        let out = markdown_to_html("1 < 2");
        assert!(out.contains("&lt;"), "got: {out}");
    }

    #[test]
    fn empty_source() {
        assert_eq!(markdown_to_html(""), "");
    }
}
