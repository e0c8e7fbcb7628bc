use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use super::redraw::count_rows;
use super::terminal::current_width;

/// A block of output that is erased and reprinted on every update
///
/// Rows are counted against the width at erase time, so a resize between
/// two frames can leave stale rows behind.
#[derive(Debug, Default)]
pub struct LiveRegion {
    last: String,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.update(out, "")
    }

    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        self.update_at(out, content, current_width())
    }

    pub(crate) fn update_at(
        &mut self,
        out: &mut impl Write,
        content: &str,
        width: u16,
    ) -> io::Result<()> {
        let mut content = content.replace("\r\n", "\n");
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }

        let rows = count_rows(&self.last, width).min(u16::MAX as usize) as u16;
        if rows > 0 {
            out.queue(cursor::MoveUp(rows))?;
        }
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        // raw mode does not translate bare line feeds
        out.write_all(content.replace('\n', "\r\n").as_bytes())?;
        out.flush()?;

        self.last = content;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_does_not_move_up() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update_at(&mut out, "one\ntwo", 80).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("one\r\ntwo\r\n"));
        assert!(!text.contains("\x1b[2A"));
    }

    #[test]
    fn next_frame_erases_wrapped_rows() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update_at(&mut out, &"x".repeat(25), 10).unwrap();

        let mut out = Vec::new();
        region.update_at(&mut out, "short", 10).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[3A"));
    }

    #[test]
    fn clear_erases_last_frame() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update_at(&mut out, "a\nb", 80).unwrap();

        let mut out = Vec::new();
        region.update_at(&mut out, "", 80).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[2A"));
        assert!(!text.contains('a'));
    }
}
