#![forbid(unsafe_code)]

//! HTML entity escaping for untrusted text.
//!
//! Text interpolated into an HTML output channel must be treated as
//! **data**, not markup. This module escapes the five characters that can
//! change parsing context (`& < > " '`).
//!
//! # Performance
//!
//! - **Fast path**: scan for escapable bytes with memchr. If none are
//!   present, return the input borrowed; zero allocation.
//! - **Slow path**: allocate an output buffer sized with headroom and
//!   copy-with-substitution. Linear in input size.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Replacement for a single escapable byte.
fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape `& < > " '` for safe interpolation into HTML.
///
/// Returns `Cow::Borrowed` when the input contains no escapable character.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use liveview_render::escape_html;
///
/// assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let first = match memchr3(b'&', b'<', b'>', bytes) {
        Some(i) => match memchr2(b'"', b'\'', &bytes[..i]) {
            Some(j) => j,
            None => i,
        },
        None => match memchr2(b'"', b'\'', bytes) {
            Some(j) => j,
            None => return Cow::Borrowed(input),
        },
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match u8::try_from(ch).ok().and_then(entity) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}
