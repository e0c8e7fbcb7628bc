use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

/// Design tokens for the arctree terminal UI.
///
/// Only 5 semantic colors; every glyph the prompts draw comes from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    /// Active line, valid
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "❯";

    pub const SELECTED: &str = "◉";
    pub const UNSELECTED: &str = "◯";

    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SEARCH: &str = "⭞";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const EXPAND: &str = "-";
    pub const COLLAPSE: &str = "+";

    pub const SEARCH: &str = "/";
}

/// Line drawn between the last and first entry of a looping list
pub const LOOP_SEPARATOR: &str = "----------------";

// ----------------------------------------------------------------------------
// ArctreeTheme - dialoguer theme sharing the tree prompt's glyphs
// ----------------------------------------------------------------------------

/// Theme for the dialoguer prompts (menus, confirmations, name inputs).
///
/// Wraps `ColorfulTheme`, or `SimpleTheme` when color is off, and only
/// changes how select items are pointed at.
pub struct ArctreeTheme {
    unicode: bool,
    color: bool,
    colorful: ColorfulTheme,
    plain: SimpleTheme,
}

impl ArctreeTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            unicode,
            color,
            colorful: ColorfulTheme::default(),
            plain: SimpleTheme,
        }
    }

    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }

    fn base(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &self.plain
        }
    }
}

impl Theme for ArctreeTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.base().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.base().format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.base().format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.base()
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.base().format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.base().format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.base().format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.base().format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.pointer(), text)
        } else {
            write!(f, "{:width$} {}", "", text, width = self.pointer().chars().count())
        }
    }
}
