use arctree::config::{ColorMode, Config};

use crate::ui::primitives::text::Painter;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::ArctreeTheme;

/// Rendering decisions shared by every prompt of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(config: &Config) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, caps: TerminalCapabilities) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color,
        };
        Self {
            caps,
            color,
            unicode,
        }
    }

    pub fn painter(&self) -> Painter {
        Painter::new(self.color)
    }

    pub fn theme(&self) -> ArctreeTheme {
        ArctreeTheme::new(self.color, self.unicode)
    }
}
