use crate::ui::primitives::text::{Painter, Tone};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pointer,
    Expanded,
    Collapsed,
    Selected,
    Unselected,
    Search,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Pointer) => icons::POINTER,
            (true, Icon::Expanded) => icons::EXPAND,
            (true, Icon::Collapsed) => icons::COLLAPSE,
            (true, Icon::Selected) => icons::SELECTED,
            (true, Icon::Unselected) => icons::UNSELECTED,
            (true, Icon::Search) => icons::SEARCH,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Pointer) => icons_ascii::POINTER,
            (false, Icon::Expanded) => icons_ascii::EXPAND,
            (false, Icon::Collapsed) => icons_ascii::COLLAPSE,
            (false, Icon::Selected) => icons_ascii::SELECTED,
            (false, Icon::Unselected) => icons_ascii::UNSELECTED,
            (false, Icon::Search) => icons_ascii::SEARCH,
        }
    }

    fn tone(&self) -> Option<Tone> {
        match self {
            Icon::Success | Icon::Selected => Some(Tone::Success),
            Icon::Error => Some(Tone::Error),
            Icon::Warning => Some(Tone::Warning),
            Icon::Pointer | Icon::Search => Some(Tone::Info),
            Icon::Expanded | Icon::Collapsed | Icon::Unselected => None,
        }
    }

    pub fn colored(&self, painter: Painter, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        match self.tone() {
            Some(tone) => painter.paint(s, tone),
            None => s.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Selected.render(false), "[x]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Collapsed.render(true), theme::icons::COLLAPSE);
    }

    #[test]
    fn uncolored_icons_stay_plain() {
        assert_eq!(Icon::Expanded.colored(Painter::new(true), true), "▼");
    }
}
