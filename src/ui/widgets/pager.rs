use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::line_prompt::LinePrompt;
use super::tree_prompt::CancelReason;
use crate::ui::primitives::text::{Painter, Tone};

/// Read-only pages flipped with Up/Down (or w/s)
pub struct Pager {
    title: String,
    pages: Vec<String>,
    current: usize,
    painter: Painter,
}

impl Pager {
    pub fn new(title: impl Into<String>, pages: Vec<String>, painter: Painter) -> Self {
        Self {
            title: title.into(),
            pages,
            current: 0,
            painter,
        }
    }
}

impl LinePrompt for Pager {
    type Output = CancelReason;

    fn render(&self) -> String {
        let mut header = format!(
            "{} {}",
            self.painter.paint("?", Tone::Success),
            self.painter.bold(&self.title)
        );
        if self.pages.len() > 1 {
            header.push_str(&format!(" ({}/{})", self.current + 1, self.pages.len()));
        }

        let body = self
            .pages
            .get(self.current)
            .map(String::as_str)
            .unwrap_or("(empty)");
        let hint = if self.pages.len() > 1 {
            "Up/Down to change page, Esc to go back"
        } else {
            "Esc to go back"
        };
        format!("{}\n{}\n{}", header, body, self.painter.paint(hint, Tone::Dim))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<CancelReason> {
        let last = self.pages.len().saturating_sub(1);
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => Some(CancelReason::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up | KeyCode::PageUp | KeyCode::Char('w') => {
                self.current = self.current.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::PageDown | KeyCode::Char('s') => {
                self.current = (self.current + 1).min(last);
                None
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(CancelReason::Back),
            _ => None,
        }
    }

    fn close(&mut self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn pager() -> Pager {
        Pager::new(
            "Info",
            vec!["Path = a".to_string(), "Path = b".to_string()],
            Painter::plain(),
        )
    }

    #[test]
    fn pages_stop_at_both_ends() {
        let mut p = pager();
        p.handle_key(key(KeyCode::Up));
        assert!(p.render().contains("(1/2)"));

        p.handle_key(key(KeyCode::Down));
        p.handle_key(key(KeyCode::Char('s')));
        assert_eq!(p.render(), "? Info (2/2)\nPath = b\nUp/Down to change page, Esc to go back");
    }

    #[test]
    fn escape_goes_back_and_ctrl_q_quits() {
        let mut p = pager();
        assert_eq!(p.handle_key(key(KeyCode::Esc)), Some(CancelReason::Back));
        assert_eq!(
            p.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(CancelReason::Quit)
        );
    }

    #[test]
    fn single_page_has_no_counter() {
        let p = Pager::new("Help", vec!["d  Delete".to_string()], Painter::plain());
        assert_eq!(p.render(), "? Help\nd  Delete\nEsc to go back");
    }
}
