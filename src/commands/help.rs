//! Keyboard reference for the browse tree

use crate::ui::context::UiContext;
use crate::ui::primitives::text::Painter;
use crate::ui::widgets::tree_prompt::SHORTCUTS;

const NAVIGATION_HELP: &[(&str, &str)] = &[
    ("Up/Down", "Move"),
    ("Right", "Open folder"),
    ("Left", "Close folder, or jump to its parent"),
    ("Space", "Select or unselect"),
    ("Enter", "Main menu"),
    ("Ctrl+F", "Search, Enter applies, empty search clears"),
    ("Esc", "Clear search, or leave"),
    ("Ctrl+Q", "Quit"),
];

/// The shortcut table, one key per line
pub fn shortcut_text(painter: Painter) -> String {
    let mut lines = vec![painter.bold("Navigation")];
    lines.extend(
        NAVIGATION_HELP
            .iter()
            .map(|(key, what)| format!("  {:<10} {}", key, what)),
    );
    lines.push(String::new());
    lines.push(painter.bold("Commands"));
    lines.extend(
        SHORTCUTS
            .iter()
            .map(|(binding, command)| format!("  {:<10} {}", binding.label(), command.label())),
    );
    lines.join("\n")
}

pub fn cmd_help_shortcuts(ui: &UiContext) {
    println!("{}", shortcut_text(ui.painter()));
}
