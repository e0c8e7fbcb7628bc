//! Key bindings for tree prompts.
//!
//! Navigation keys are shared by every tree prompt. The browse tree adds the
//! command shortcuts on top.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arctree::application::Command;

/// What a key press asks the prompt to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Expand,
    Collapse,
    Toggle,
    Submit,
    Search,
    Back,
    Quit,
    Shortcut(Command),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub const fn alt(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::ALT,
        }
    }

    /// Shifted letter; bound as the uppercase character
    pub const fn shift(c: char) -> Self {
        Self {
            code: KeyCode::Char(c.to_ascii_uppercase()),
            modifiers: KeyModifiers::SHIFT,
        }
    }

    /// Terminals disagree on whether a shifted letter carries SHIFT, so
    /// SHIFT is ignored for characters and the case decides.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        match key.code {
            KeyCode::Char(_) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                key.modifiers & relevant == self.modifiers & relevant
            }
            _ => key.modifiers == self.modifiers,
        }
    }

    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::SHIFT) => {
                c.to_string()
            }
            KeyCode::Char(c) if self.modifiers.is_empty() => c.to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            other => format!("{:?}", other),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            label.push_str("Shift+");
        }
        label.push_str(&key);
        label
    }
}

/// Command shortcuts of the browse tree
pub const SHORTCUTS: &[(KeyBinding, Command)] = &[
    (KeyBinding::char('d'), Command::Delete),
    (KeyBinding::char('c'), Command::Move),
    (KeyBinding::char('a'), Command::Add),
    (KeyBinding::ctrl('a'), Command::AddFromFilesystem),
    (KeyBinding::alt('a'), Command::AddNewFile),
    (KeyBinding::shift('a'), Command::AddNewFolder),
    (KeyBinding::char('r'), Command::Rename),
    (KeyBinding::char('e'), Command::Extract),
    (KeyBinding::ctrl('e'), Command::ExtractHere),
    (KeyBinding::shift('e'), Command::ExtractElsewhere),
    (KeyBinding::char('n'), Command::ChangeArchive),
    (KeyBinding::shift('n'), Command::CreateArchive),
    (KeyBinding::char('i'), Command::Info),
    (KeyBinding::shift('i'), Command::ArchiveInfo),
    (KeyBinding::char('o'), Command::Open),
    (KeyBinding::char('h'), Command::Help),
];

const NAVIGATION: &[(KeyBinding, Action)] = &[
    (KeyBinding::plain(KeyCode::Up), Action::Up),
    (KeyBinding::plain(KeyCode::Down), Action::Down),
    (KeyBinding::plain(KeyCode::Right), Action::Expand),
    (KeyBinding::plain(KeyCode::Left), Action::Collapse),
    (KeyBinding::char(' '), Action::Toggle),
    (KeyBinding::plain(KeyCode::Enter), Action::Submit),
    (KeyBinding::ctrl('f'), Action::Search),
    (KeyBinding::plain(KeyCode::Esc), Action::Back),
    (KeyBinding::ctrl('q'), Action::Quit),
    (KeyBinding::ctrl('c'), Action::Quit),
];

/// Ordered binding table; the first matching binding wins
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl KeyMap {
    pub fn navigation() -> Self {
        Self {
            bindings: NAVIGATION.to_vec(),
        }
    }

    /// Navigation plus every command shortcut
    pub fn browse() -> Self {
        let mut map = Self::navigation();
        map.bindings.extend(
            SHORTCUTS
                .iter()
                .map(|(binding, command)| (*binding, Action::Shortcut(*command))),
        );
        map
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    pub fn has_shortcuts(&self) -> bool {
        self.bindings
            .iter()
            .any(|(_, action)| matches!(action, Action::Shortcut(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn shifted_letters_match_with_or_without_shift_flag() {
        let map = KeyMap::browse();
        let with_flag = key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        let without = key(KeyCode::Char('A'), KeyModifiers::NONE);
        assert_eq!(
            map.lookup(&with_flag),
            Some(Action::Shortcut(Command::AddNewFolder))
        );
        assert_eq!(
            map.lookup(&without),
            Some(Action::Shortcut(Command::AddNewFolder))
        );
    }

    #[test]
    fn modifiers_select_different_commands() {
        let map = KeyMap::browse();
        assert_eq!(
            map.lookup(&key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Shortcut(Command::Add))
        );
        assert_eq!(
            map.lookup(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(Action::Shortcut(Command::AddFromFilesystem))
        );
        assert_eq!(
            map.lookup(&key(KeyCode::Char('a'), KeyModifiers::ALT)),
            Some(Action::Shortcut(Command::AddNewFile))
        );
    }

    #[test]
    fn navigation_map_has_no_shortcuts() {
        let map = KeyMap::navigation();
        assert!(!map.has_shortcuts());
        assert_eq!(map.lookup(&key(KeyCode::Char('d'), KeyModifiers::NONE)), None);
        assert_eq!(
            map.lookup(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn labels_name_the_modifiers() {
        assert_eq!(KeyBinding::ctrl('a').label(), "Ctrl+A");
        assert_eq!(KeyBinding::shift('e').label(), "Shift+E");
        assert_eq!(KeyBinding::alt('a').label(), "Alt+A");
        assert_eq!(KeyBinding::char('d').label(), "d");
        assert_eq!(KeyBinding::char(' ').label(), "Space");
    }

    #[test]
    fn every_shortcut_is_unique() {
        for (i, (a, _)) in SHORTCUTS.iter().enumerate() {
            for (b, _) in &SHORTCUTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
