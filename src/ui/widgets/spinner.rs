use std::io::{self, Write};

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::text::{Painter, Tone};

const FRAME_BRAILLE: &str = "⠋";
const FRAME_ASCII: &str = "-";

/// "Please wait" line drawn while the archive program runs
///
/// The program blocks the event loop, so only one frame is ever drawn
/// before the line is erased.
#[derive(Debug, Clone)]
pub struct Spinner {
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(&self, painter: Painter, supports_unicode: bool) -> String {
        let frame = if supports_unicode {
            FRAME_BRAILLE
        } else {
            FRAME_ASCII
        };
        format!(
            "{} {}",
            painter.paint(frame, Tone::Info),
            painter.paint(&self.message, Tone::Dim)
        )
    }
}

/// Show a spinner while `work` runs, then erase it
pub fn while_busy<T>(ui: &UiContext, message: &str, work: impl FnOnce() -> T) -> T {
    let line = Spinner::new(message).render(ui.painter(), ui.unicode);
    busy_on(&mut io::stdout(), &line, work)
}

/// Drawing failures only lose the indicator; `work` runs regardless
fn busy_on<W: Write, T>(out: &mut W, line: &str, work: impl FnOnce() -> T) -> T {
    let mut region = LiveRegion::new();
    if let Err(err) = region.update(out, line) {
        log::debug!("cannot draw busy indicator: {}", err);
    }
    let result = work();
    if let Err(err) = region.clear(out).and_then(|_| out.flush()) {
        log::debug!("cannot erase busy indicator: {}", err);
    }
    result
}
