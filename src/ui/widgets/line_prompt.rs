//! In-place prompts driven one key at a time, and the raw-mode loop that
//! drives them.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::ui::live_region::LiveRegion;
use crate::ui::terminal::RawModeGuard;

/// A prompt drawn in place and driven one key at a time
pub trait LinePrompt {
    type Output;

    /// Current frame
    fn render(&self) -> String;

    /// Feed one key press; `Some` closes the prompt
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output>;

    /// Frame left on screen after closing
    fn close(&mut self) -> String;
}

/// Redraw `prompt` after every key until it produces an output
pub fn run<P: LinePrompt + ?Sized>(prompt: &mut P) -> io::Result<P::Output> {
    let mut out = io::stdout();
    run_on(prompt, &mut out)
}

fn run_on<P: LinePrompt + ?Sized>(prompt: &mut P, out: &mut impl Write) -> io::Result<P::Output> {
    let guard = RawModeGuard::enter(out)?;
    let mut region = LiveRegion::new();
    region.update(out, &prompt.render())?;

    let output = loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(output) = prompt.handle_key(key) {
                    break output;
                }
                region.update(out, &prompt.render())?;
            }
            Event::Resize(_, _) => region.update(out, &prompt.render())?,
            _ => {}
        }
    };

    region.update(out, &prompt.close())?;
    drop(guard);
    Ok(output)
}
