//! dialoguer prompts and one-line notices used between tree prompts

use anyhow::Result;
use dialoguer::{Confirm, Editor, Input, Select};

use arctree::domain::services::NameError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Tone;
use crate::ui::widgets::line_prompt;
use crate::ui::widgets::pager::Pager;
use crate::ui::widgets::tree_prompt::CancelReason;

/// Yes/no question; Escape answers no
pub fn confirm(ui: &UiContext, message: &str) -> Result<bool> {
    let answer = Confirm::with_theme(&ui.theme())
        .with_prompt(message)
        .default(false)
        .interact_opt()?;
    Ok(answer.unwrap_or(false))
}

/// Pick one of `items`; `None` when the user backs out
pub fn choose(ui: &UiContext, message: &str, items: &[&str]) -> Result<Option<usize>> {
    let picked = Select::with_theme(&ui.theme())
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(picked)
}

/// Ask for a name until `validate` accepts it; an empty answer backs out
pub fn ask_name(
    ui: &UiContext,
    message: &str,
    validate: impl Fn(&str) -> Result<(), NameError>,
) -> Result<Option<String>> {
    let name: String = Input::with_theme(&ui.theme())
        .with_prompt(format!("{} (empty to go back)", message))
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() {
                return Ok(());
            }
            validate(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(if name.is_empty() { None } else { Some(name) })
}

/// Content for a new file, written in `$EDITOR`
pub fn edit_content(extension: &str) -> Result<Option<String>> {
    let extension = if extension.is_empty() {
        ".txt".to_string()
    } else {
        format!(".{}", extension)
    };
    let content = Editor::new()
        .extension(&extension)
        .require_save(true)
        .edit("")?;
    Ok(content)
}

pub fn show_pages(ui: &UiContext, title: &str, pages: Vec<String>) -> Result<CancelReason> {
    let mut pager = Pager::new(title, pages, ui.painter());
    Ok(line_prompt::run(&mut pager)?)
}

pub fn success(ui: &UiContext, message: &str) {
    notice(ui, Icon::Success, Tone::Success, message);
}

pub fn failure(ui: &UiContext, message: &str) {
    notice(ui, Icon::Error, Tone::Error, message);
}

pub fn warning(ui: &UiContext, message: &str) {
    notice(ui, Icon::Warning, Tone::Warning, message);
}

fn notice(ui: &UiContext, icon: Icon, tone: Tone, message: &str) {
    let painter = ui.painter();
    println!(
        "{} {}",
        icon.colored(painter, ui.unicode),
        painter.paint(message, tone)
    );
}
