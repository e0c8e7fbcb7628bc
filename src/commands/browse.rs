//! Browse command - the archive tree and every command run from it

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use arctree::application::operations::TOP_LEVEL;
use arctree::config::Config;
use arctree::domain::ports::Archiver;
use arctree::domain::services::{split_extension, NamePolicy};
use arctree::infrastructure::open_with_default_app;
use arctree::{
    ArchiveCatalog, ArchiveFormat, ArctreeError, Command, PathSeparator, SevenZipArchiver, Session,
};

use super::create::{cmd_create, AfterCreate};
use super::help::shortcut_text;
use super::{fs_path, pick_archive, tree_prompt, Pick};
use crate::ui::context::UiContext;
use crate::ui::prompts;
use crate::ui::widgets::spinner::while_busy;
use crate::ui::widgets::tree_prompt::{
    ArchiveTreeSource, CancelReason, FsTreeSource, KeyMap, PromptOutcome,
};

const ADD_CHOICES: &[Command] = &[
    Command::AddFromFilesystem,
    Command::AddNewFile,
    Command::AddNewFolder,
];

const EXTRACT_CHOICES: &[Command] = &[Command::ExtractHere, Command::ExtractElsewhere];

/// Whether the browse loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct BrowseOptions {
    pub archive: Option<PathBuf>,
    /// Skip the delete confirmation
    pub yes: bool,
}

pub fn cmd_browse(config: &Config, ui: &UiContext, options: BrowseOptions) -> Result<()> {
    if !ui.caps.is_tty {
        bail!("arctree needs an interactive terminal");
    }
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let archiver = SevenZipArchiver::new(&config.archiver.program);
    if !archiver.check_available() {
        bail!(
            "'{}' was not found; install 7-Zip or set [archiver] program in the config",
            archiver.program()
        );
    }

    let archive = match options.archive {
        Some(path) => path,
        None => match pick_archive(config, ui, &cwd)? {
            Pick::Chosen(values) => match values.first() {
                Some(value) => fs_path(value),
                None => return Ok(()),
            },
            Pick::Back | Pick::Quit => return Ok(()),
        },
    };
    if !ArchiveFormat::from_path(&archive).is_supported() {
        bail!("7z cannot open {}", archive.display());
    }

    let catalog = ArchiveCatalog::new(archiver, PathSeparator::native());
    let session = while_busy(ui, "Reading archive", || Session::open(catalog, &archive))
        .with_context(|| format!("cannot open {}", archive.display()))?;

    let mut browser = Browser {
        session,
        config,
        ui,
        cwd,
        yes: options.yes,
    };
    browser.limited_notice();
    browser.run()
}

struct Browser<'a, A: Archiver> {
    session: Session<A>,
    config: &'a Config,
    ui: &'a UiContext,
    cwd: PathBuf,
    yes: bool,
}

impl<A: Archiver> Browser<'_, A> {
    fn run(&mut self) -> Result<()> {
        loop {
            let outcome = self.browse_tree()?;
            let (command, selection) = match outcome {
                PromptOutcome::Answered(selection) => match self.main_menu()? {
                    Some(command) => (command, selection),
                    None => continue,
                },
                PromptOutcome::Shortcut { command, selection } => (command, selection),
                PromptOutcome::Cancelled(_) => return Ok(()),
            };

            log::debug!("{:?} on {} selected entries", command, selection.len());
            match self.dispatch(command, &selection) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(err) if is_fatal(&err) => return Err(err),
                Err(err) => {
                    log::warn!("{:?} failed: {:#}", command, err);
                    prompts::failure(self.ui, &format!("{:#}", err));
                }
            }
        }
    }

    fn browse_tree(&self) -> Result<PromptOutcome> {
        let archive = self.session.archive();
        let message = format!("{} ({} entries)", archive.display_name(), archive.entries);
        let outcome = tree_prompt(
            self.config,
            self.ui,
            message,
            ArchiveTreeSource::new(self.session.index()),
        )
        .multiple()
        .keymap(KeyMap::browse())
        .interact()?;
        Ok(outcome)
    }

    fn main_menu(&self) -> Result<Option<Command>> {
        let labels: Vec<&str> = Command::MENU.iter().map(Command::label).collect();
        let picked = prompts::choose(self.ui, "What do you want to do?", &labels)?;
        Ok(picked.map(|idx| Command::MENU[idx]))
    }

    fn dispatch(&mut self, command: Command, selection: &[String]) -> Result<Flow> {
        if let Err(refusal) = self.session.check(command, selection) {
            prompts::warning(self.ui, &refusal.to_string());
            return Ok(Flow::Continue);
        }

        match command {
            Command::Help => {
                let pages = vec![shortcut_text(self.ui.painter())];
                self.paged("Keyboard shortcuts", pages)
            }
            Command::ChangeArchive => self.change_archive(),
            Command::CreateArchive => self.create(),
            Command::Open => self.open(selection),
            Command::Add => match self.submenu("Add what?", ADD_CHOICES)? {
                Some(choice) => self.dispatch(choice, selection),
                None => Ok(Flow::Continue),
            },
            Command::AddFromFilesystem => self.add_from_filesystem(),
            Command::AddNewFile => self.add_new_file(),
            Command::AddNewFolder => self.add_new_folder(),
            Command::Move => self.move_selection(selection),
            Command::Rename => self.rename(selection),
            Command::Delete => self.delete(selection),
            Command::Extract => match self.submenu("Extract where?", EXTRACT_CHOICES)? {
                Some(choice) => self.dispatch(choice, selection),
                None => Ok(Flow::Continue),
            },
            Command::ExtractHere => {
                let parent = self.archive_dir();
                self.extract(selection, &parent)
            }
            Command::ExtractElsewhere => self.extract_elsewhere(selection),
            Command::Info => {
                let pages = self.busy(|s| s.item_info(selection))?;
                self.paged("Info", pages)
            }
            Command::ArchiveInfo => {
                let info = self.busy(|s| s.archive_info())?;
                let title = format!("Info about {}", self.session.archive().display_name());
                self.paged(&title, vec![info])
            }
        }
    }

    fn submenu(&self, message: &str, choices: &[Command]) -> Result<Option<Command>> {
        let labels: Vec<&str> = choices.iter().map(Command::label).collect();
        let picked = prompts::choose(self.ui, message, &labels)?;
        Ok(picked.map(|idx| choices[idx]))
    }

    fn paged(&self, title: &str, pages: Vec<String>) -> Result<Flow> {
        match prompts::show_pages(self.ui, title, pages)? {
            CancelReason::Back => Ok(Flow::Continue),
            CancelReason::Quit => Ok(Flow::Quit),
        }
    }

    /// Run an archiver call behind the busy indicator
    fn busy<T>(
        &mut self,
        work: impl FnOnce(&mut Session<A>) -> arctree::ArctreeResult<T>,
    ) -> Result<T> {
        let session = &mut self.session;
        Ok(while_busy(self.ui, "Please wait", || work(session))?)
    }

    fn limited_notice(&self) {
        let archive = self.session.archive();
        if archive.is_limited() {
            prompts::warning(
                self.ui,
                &format!(
                    "7z has limited support for {}: it can be browsed and extracted, not modified",
                    archive.display_name()
                ),
            );
        }
    }

    fn change_archive(&mut self) -> Result<Flow> {
        let path = match pick_archive(self.config, self.ui, &self.cwd)? {
            Pick::Chosen(values) => match values.first() {
                Some(value) => fs_path(value),
                None => return Ok(Flow::Continue),
            },
            Pick::Back => return Ok(Flow::Continue),
            Pick::Quit => return Ok(Flow::Quit),
        };
        self.switch_to(&path)
    }

    fn switch_to(&mut self, path: &Path) -> Result<Flow> {
        self.busy(|s| s.switch_to(path))
            .with_context(|| format!("cannot open {}", path.display()))?;
        self.limited_notice();
        Ok(Flow::Continue)
    }

    fn create(&mut self) -> Result<Flow> {
        let after = cmd_create(
            self.session.archiver(),
            self.config,
            self.ui,
            &self.cwd,
            None,
        )?;
        match after {
            AfterCreate::Browse(path) => self.switch_to(&path),
            AfterCreate::Back => Ok(Flow::Continue),
            AfterCreate::Quit => Ok(Flow::Quit),
        }
    }

    fn open(&mut self, selection: &[String]) -> Result<Flow> {
        let files = self.busy(|s| s.extract_for_opening(selection))?;
        for file in &files {
            open_with_default_app(file)
                .with_context(|| format!("cannot open {}", file.display()))?;
        }
        prompts::success(self.ui, &format!("Opened {}", count(files.len(), "file")));
        Ok(Flow::Continue)
    }

    fn add_from_filesystem(&mut self) -> Result<Flow> {
        let outcome = tree_prompt(
            self.config,
            self.ui,
            "Choose what to add",
            FsTreeSource::new(&self.cwd).climbable(),
        )
        .multiple()
        .interact()?;
        let sources: Vec<PathBuf> = match Pick::from(outcome) {
            Pick::Chosen(values) => values.iter().map(|v| fs_path(v)).collect(),
            Pick::Back => return Ok(Flow::Continue),
            Pick::Quit => return Ok(Flow::Quit),
        };
        if sources.is_empty() {
            prompts::warning(self.ui, "Nothing was selected, cannot add anything");
            return Ok(Flow::Continue);
        }

        self.busy(|s| s.add(&sources, None))?;
        prompts::success(self.ui, &format!("Added {}", count(sources.len(), "entry")));
        Ok(Flow::Continue)
    }

    fn add_new_file(&mut self) -> Result<Flow> {
        let policy = self.name_policy();
        let Some(name) = prompts::ask_name(self.ui, "Name of the new file", |n| {
            policy.validate_new_file(n)
        })?
        else {
            return Ok(Flow::Continue);
        };

        let (_, ext) = split_extension(policy.separator().leaf(&name));
        let Some(content) = prompts::edit_content(ext.trim_start_matches('.'))? else {
            prompts::warning(self.ui, "The file was not saved, nothing was added");
            return Ok(Flow::Continue);
        };

        let staging = tempfile::tempdir().context("cannot create a staging directory")?;
        let operand = arctree::application::operations::stage_new_file(
            staging.path(),
            &name,
            &content,
            policy.separator(),
        )?;
        self.busy(|s| s.add(&[operand], Some(staging.path())))?;
        prompts::success(self.ui, &format!("Added {}", name));
        Ok(Flow::Continue)
    }

    fn add_new_folder(&mut self) -> Result<Flow> {
        let policy = self.name_policy();
        let message = format!("Name of the new folder, ending with {}", policy.separator());
        let Some(name) = prompts::ask_name(self.ui, &message, |n| policy.validate_new_folder(n))?
        else {
            return Ok(Flow::Continue);
        };

        let staging = tempfile::tempdir().context("cannot create a staging directory")?;
        let operand = arctree::application::operations::stage_new_folders(
            staging.path(),
            &name,
            policy.separator(),
        )?;
        self.busy(|s| s.add(&[operand], Some(staging.path())))?;
        prompts::success(self.ui, &format!("Added {}", name));
        Ok(Flow::Continue)
    }

    fn move_selection(&mut self, selection: &[String]) -> Result<Flow> {
        let message = format!("Move {} to", count(selection.len(), "entry"));
        let outcome = tree_prompt(
            self.config,
            self.ui,
            message,
            ArchiveTreeSource::new(self.session.index())
                .directories_only()
                .with_top_level(),
        )
        .interact()?;
        let destination = match Pick::from(outcome) {
            Pick::Chosen(values) => match values.into_iter().next() {
                Some(value) => value,
                None => return Ok(Flow::Continue),
            },
            Pick::Back => return Ok(Flow::Continue),
            Pick::Quit => return Ok(Flow::Quit),
        };

        let moved = self.busy(|s| s.move_to(selection, &destination))?;
        let target = if destination == TOP_LEVEL {
            "the top level".to_string()
        } else {
            destination
        };
        if moved == 0 {
            prompts::warning(self.ui, &format!("Nothing to move into {}", target));
        } else {
            prompts::success(
                self.ui,
                &format!("Moved {} into {}", count(moved, "entry"), target),
            );
        }
        Ok(Flow::Continue)
    }

    fn rename(&mut self, selection: &[String]) -> Result<Flow> {
        let policy = self.name_policy();
        let message = format!("New name for {}", count(selection.len(), "entry"));
        let Some(name) = prompts::ask_name(self.ui, &message, |n| policy.validate_rename(n))?
        else {
            return Ok(Flow::Continue);
        };

        let renamed = self.busy(|s| s.rename(selection, &name))?;
        if renamed == 0 {
            prompts::warning(self.ui, "Every selected entry already has that name");
        } else {
            prompts::success(self.ui, &format!("Renamed {}", count(renamed, "entry")));
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self, selection: &[String]) -> Result<Flow> {
        if !self.yes {
            let question = format!("Delete {}?", count(selection.len(), "entry"));
            if !prompts::confirm(self.ui, &question)? {
                return Ok(Flow::Continue);
            }
        }
        self.busy(|s| s.delete(selection))?;
        prompts::success(self.ui, &format!("Deleted {}", count(selection.len(), "entry")));
        Ok(Flow::Continue)
    }

    fn extract(&mut self, selection: &[String], parent: &Path) -> Result<Flow> {
        let out_dir = self.busy(|s| s.extract(selection, parent))?;
        prompts::success(self.ui, &format!("Extracted to {}", out_dir.display()));
        Ok(Flow::Continue)
    }

    fn extract_elsewhere(&mut self, selection: &[String]) -> Result<Flow> {
        let outcome = tree_prompt(
            self.config,
            self.ui,
            "Extract into",
            FsTreeSource::new(&self.cwd).directories_only().climbable(),
        )
        .interact()?;
        match Pick::from(outcome) {
            Pick::Chosen(values) => match values.first() {
                Some(value) => self.extract(selection, &fs_path(value)),
                None => Ok(Flow::Continue),
            },
            Pick::Back => Ok(Flow::Continue),
            Pick::Quit => Ok(Flow::Quit),
        }
    }

    fn archive_dir(&self) -> PathBuf {
        self.session
            .archive()
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    fn name_policy(&self) -> NamePolicy {
        NamePolicy::new(self.session.separator(), cfg!(windows))
    }
}

/// Listing errors leave no usable tree behind
fn is_fatal(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ArctreeError>(),
        Some(ArctreeError::UnresolvedParent { .. })
    )
}

fn count(n: usize, noun: &str) -> String {
    match (n, noun) {
        (1, _) => format!("1 {}", noun),
        (_, "entry") => format!("{} entries", n),
        _ => format!("{} {}s", n, noun),
    }
}
