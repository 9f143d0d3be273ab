#![forbid(unsafe_code)]

//! Inline terminal sink: repaint the last display slot in place.
//!
//! `AnsiSink` paints a representation's raw text to a terminal-like writer
//! and remembers how many rows the paint occupied. Updating that slot moves
//! the cursor back up over the previous paint, erases to the end of the
//! screen, and repaints, so the visible output changes in place instead of
//! appending.
//!
//! Only the **most recently created** slot stays addressable: anything
//! painted earlier has scrolled out of the region the cursor can reliably
//! reach, so updating an older handle returns
//! [`SinkError::StaleHandle`].
//!
//! Row accounting measures each line's display width (East Asian wide
//! characters count as 2 columns) against the configured terminal width to
//! count wrapped rows.

use std::io::Write;

use liveview_render::Representation;
use unicode_width::UnicodeWidthStr;

use crate::{DisplayHandle, DisplaySink, SinkError};

/// Default terminal width when none is configured.
const DEFAULT_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy)]
struct Active {
    handle: DisplayHandle,
    rows: u16,
}

/// A display sink that repaints inline over its previous output.
#[derive(Debug)]
pub struct AnsiSink<W: Write> {
    writer: W,
    width: u16,
    next_id: u64,
    active: Option<Active>,
}

impl<W: Write> AnsiSink<W> {
    /// Create a sink assuming an 80-column terminal.
    pub fn new(writer: W) -> Self {
        Self::with_width(writer, DEFAULT_WIDTH)
    }

    /// Create a sink for a terminal of the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0.
    pub fn with_width(writer: W, width: u16) -> Self {
        assert!(width > 0, "width must be > 0");
        Self {
            writer,
            width,
            next_id: 0,
            active: None,
        }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Rows the representation occupies at the configured width, counting
    /// wrapped lines.
    fn rows_for(&self, representation: &Representation) -> u16 {
        representation
            .as_str()
            .split('\n')
            .map(|line| {
                let cols = line.width() as u64;
                let rows = cols.div_ceil(u64::from(self.width)).max(1);
                u16::try_from(rows).unwrap_or(u16::MAX)
            })
            .fold(0u16, u16::saturating_add)
    }

    fn paint(&mut self, representation: &Representation) -> Result<(), SinkError> {
        for line in representation.as_str().split('\n') {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for AnsiSink<W> {
    fn create(&mut self, representation: &Representation) -> Result<DisplayHandle, SinkError> {
        let handle = DisplayHandle::new(self.next_id);
        self.next_id += 1;
        let rows = self.rows_for(representation);
        self.paint(representation)?;
        self.active = Some(Active { handle, rows });
        tracing::debug!(slot = handle.id(), rows, "painted inline slot");
        Ok(handle)
    }

    fn update(
        &mut self,
        handle: DisplayHandle,
        representation: &Representation,
    ) -> Result<(), SinkError> {
        let Some(active) = self.active else {
            return Err(SinkError::StaleHandle(handle));
        };
        if active.handle != handle {
            return Err(SinkError::StaleHandle(handle));
        }

        // Cursor sits just below the previous paint: climb back over it,
        // erase to end of screen, repaint.
        write!(self.writer, "\x1b[{}A\r\x1b[0J", active.rows)?;
        let rows = self.rows_for(representation);
        self.paint(representation)?;
        self.active = Some(Active { handle, rows });
        tracing::trace!(slot = handle.id(), rows, "repainted inline slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Representation {
        Representation::Text(s.into())
    }

    fn output(sink: &AnsiSink<Vec<u8>>) -> String {
        String::from_utf8(sink.get_ref().clone()).unwrap()
    }

    #[test]
    fn create_paints_lines() {
        let mut sink = AnsiSink::new(Vec::new());
        sink.create(&text("hello")).unwrap();
        assert_eq!(output(&sink), "hello\n");
    }

    #[test]
    fn update_climbs_erases_and_repaints() {
        let mut sink = AnsiSink::new(Vec::new());
        let h = sink.create(&text("hello")).unwrap();
        sink.update(h, &text("world")).unwrap();
        assert_eq!(output(&sink), "hello\n\x1b[1A\r\x1b[0Jworld\n");
    }

    #[test]
    fn multiline_paint_climbs_all_rows() {
        let mut sink = AnsiSink::new(Vec::new());
        let h = sink.create(&text("one\ntwo")).unwrap();
        sink.update(h, &text("three")).unwrap();
        assert_eq!(output(&sink), "one\ntwo\n\x1b[2A\r\x1b[0Jthree\n");
    }

    #[test]
    fn wrapped_lines_count_extra_rows() {
        let mut sink = AnsiSink::with_width(Vec::new(), 4);
        // "abcdef" wraps onto 2 rows at width 4.
        let h = sink.create(&text("abcdef")).unwrap();
        sink.update(h, &text("x")).unwrap();
        assert_eq!(output(&sink), "abcdef\n\x1b[2A\r\x1b[0Jx\n");
    }

    #[test]
    fn wide_characters_count_two_columns() {
        let mut sink = AnsiSink::with_width(Vec::new(), 4);
        // Three CJK characters are 6 columns, so 2 rows at width 4.
        let h = sink.create(&text("日本語")).unwrap();
        sink.update(h, &text("x")).unwrap();
        assert_eq!(output(&sink), "日本語\n\x1b[2A\r\x1b[0Jx\n");
    }

    #[test]
    fn update_grows_tracked_region() {
        let mut sink = AnsiSink::new(Vec::new());
        let h = sink.create(&text("a")).unwrap();
        sink.update(h, &text("a\nb\nc")).unwrap();
        sink.update(h, &text("done")).unwrap();
        assert_eq!(
            output(&sink),
            "a\n\x1b[1A\r\x1b[0Ja\nb\nc\n\x1b[3A\r\x1b[0Jdone\n"
        );
    }

    #[test]
    fn only_latest_slot_is_addressable() {
        let mut sink = AnsiSink::new(Vec::new());
        let old = sink.create(&text("old")).unwrap();
        let new = sink.create(&text("new")).unwrap();

        let err = sink.update(old, &text("x")).unwrap_err();
        assert!(matches!(err, SinkError::StaleHandle(h) if h == old));

        sink.update(new, &text("newer")).unwrap();
        assert!(output(&sink).ends_with("newer\n"));
    }

    #[test]
    fn update_with_no_paint_is_stale() {
        let mut sink = AnsiSink::new(Vec::new());
        let err = sink
            .update(DisplayHandle::new(0), &text("x"))
            .unwrap_err();
        assert!(matches!(err, SinkError::StaleHandle(_)));
    }

    #[test]
    fn empty_representation_occupies_one_row() {
        let mut sink = AnsiSink::new(Vec::new());
        let h = sink.create(&text("")).unwrap();
        sink.update(h, &text("filled")).unwrap();
        assert_eq!(output(&sink), "\n\x1b[1A\r\x1b[0Jfilled\n");
    }
}
