//! Command handlers for the arctree binary

pub mod browse;
pub mod create;
pub mod help;

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use anyhow::Result;

use arctree::config::Config;
use arctree::ArchiveFormat;

use crate::ui::context::UiContext;
use crate::ui::widgets::tree_prompt::{
    CancelReason, FsTreeSource, PromptOutcome, SearchPolicy, TreePrompt, TreeSource,
};

/// Result of a picker prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Chosen(Vec<String>),
    Back,
    Quit,
}

impl From<PromptOutcome> for Pick {
    fn from(outcome: PromptOutcome) -> Self {
        match outcome {
            PromptOutcome::Answered(values) => Pick::Chosen(values),
            PromptOutcome::Cancelled(CancelReason::Quit) => Pick::Quit,
            PromptOutcome::Cancelled(CancelReason::Back) | PromptOutcome::Shortcut { .. } => {
                Pick::Back
            }
        }
    }
}

/// Tree prompt configured from `[browser]` and the terminal
pub fn tree_prompt<'s>(
    config: &Config,
    ui: &UiContext,
    message: impl Into<String>,
    source: impl TreeSource + 's,
) -> TreePrompt<'s> {
    TreePrompt::new(message, source)
        .page_size(config.browser.page_size)
        .looping(config.browser.loop_navigation)
        .search_policy(SearchPolicy::from_flag(config.browser.recursive_search))
        .styled(ui)
}

/// Let the user choose an archive below `root`
pub fn pick_archive(config: &Config, ui: &UiContext, root: &Path) -> Result<Pick> {
    let source = FsTreeSource::new(root).climbable();
    let outcome = tree_prompt(config, ui, "Choose an archive", source)
        .validator(archive_file)
        .interact()?;
    Ok(outcome.into())
}

/// Local path for a filesystem picker value
pub fn fs_path(value: &str) -> PathBuf {
    let trimmed = value.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() {
        PathBuf::from(value)
    } else {
        PathBuf::from(trimmed)
    }
}

fn archive_file(value: &str) -> Result<(), String> {
    if value.ends_with(MAIN_SEPARATOR) {
        return Err("That is a folder, press Right to open it".to_string());
    }
    if !ArchiveFormat::from_path(Path::new(value)).is_supported() {
        return Err("7z cannot open this kind of file".to_string());
    }
    Ok(())
}
