//! Create a new archive from files on disk

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use arctree::application::create_archive;
use arctree::config::{Config, CreateConfig};
use arctree::domain::ports::Archiver;
use arctree::domain::services::NamePolicy;

use super::{fs_path, tree_prompt, Pick};
use crate::ui::context::UiContext;
use crate::ui::prompts;
use crate::ui::widgets::spinner::while_busy;
use crate::ui::widgets::tree_prompt::FsTreeSource;

/// Where to go once the archive exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterCreate {
    Browse(PathBuf),
    Back,
    Quit,
}

/// Ask for a name (unless given), the sources, then run the archiver
///
/// A `name` passed on the command line that fails validation is an error;
/// a typed one is asked again.
pub fn cmd_create<A: Archiver>(
    archiver: &A,
    config: &Config,
    ui: &UiContext,
    cwd: &Path,
    name: Option<&str>,
) -> Result<AfterCreate> {
    let policy = NamePolicy::native();

    let name = match name {
        Some(name) => {
            if let Err(err) = policy.validate_archive_name(name) {
                bail!("cannot create '{}': {}", name, err);
            }
            name.to_string()
        }
        None => match prompts::ask_name(ui, "Name of the new archive", |n| {
            policy.validate_archive_name(n)
        })? {
            Some(name) => name,
            None => return Ok(AfterCreate::Back),
        },
    };

    let target = cwd.join(&name);
    if target.exists() {
        prompts::warning(ui, &format!("{} already exists", target.display()));
        return Ok(AfterCreate::Back);
    }

    let message = format!("Choose what goes into {}", name);
    let outcome = tree_prompt(config, ui, message, FsTreeSource::new(cwd).climbable())
        .multiple()
        .interact()?;
    let sources = match Pick::from(outcome) {
        Pick::Chosen(values) => values.iter().map(|v| fs_path(v)).collect::<Vec<_>>(),
        Pick::Back => return Ok(AfterCreate::Back),
        Pick::Quit => return Ok(AfterCreate::Quit),
    };
    if sources.is_empty() {
        prompts::warning(ui, "Nothing was selected, cannot create an empty archive");
        return Ok(AfterCreate::Back);
    }

    while_busy(ui, "Creating archive", || {
        create_archive(archiver, &target, &sources)
    })
    .with_context(|| format!("failed to create {}", target.display()))?;
    prompts::success(ui, &format!("Created {}", name));

    match follow_up(&config.create) {
        Some(true) => Ok(AfterCreate::Browse(target)),
        Some(false) => Ok(AfterCreate::Back),
        None => {
            if prompts::confirm(ui, &format!("Browse {} now?", name))? {
                Ok(AfterCreate::Browse(target))
            } else {
                Ok(AfterCreate::Back)
            }
        }
    }
}

/// `Some(true)` to switch, `Some(false)` to go back, `None` to ask
fn follow_up(create: &CreateConfig) -> Option<bool> {
    if create.skip_to_new_archive {
        Some(true)
    } else if create.back_to_menu {
        Some(false)
    } else {
        None
    }
}
