//! Terminal UI: capabilities, theme, redraw accounting and prompts

pub mod context;
pub mod live_region;
pub mod primitives;
pub mod prompts;
pub mod redraw;
pub mod terminal;
pub mod theme;
pub mod widgets;
