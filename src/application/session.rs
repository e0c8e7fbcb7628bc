//! Browse session - typed command routing for one open archive
//!
//! The session owns the loaded tree. Commands coming from the browse
//! prompt are checked here before any process runs, and every successful
//! mutation is followed by a full reload of the listing.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::catalog::{ArchiveCatalog, LoadedArchive};
use super::operations;
use crate::domain::entities::NodeIndex;
use crate::domain::ports::Archiver;
use crate::domain::services::plan_renames;
use crate::domain::value_objects::PathSeparator;
use crate::error::{ArctreeError, ArctreeResult};

/// Everything the browse prompt can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    ChangeArchive,
    CreateArchive,
    Open,
    /// Ask where new entries come from
    Add,
    AddFromFilesystem,
    AddNewFile,
    AddNewFolder,
    Move,
    Rename,
    Delete,
    /// Ask where to extract
    Extract,
    ExtractHere,
    ExtractElsewhere,
    Info,
    ArchiveInfo,
}

impl Command {
    /// Entries of the main menu, in display order
    pub const MENU: &'static [Command] = &[
        Command::Help,
        Command::ChangeArchive,
        Command::CreateArchive,
        Command::Open,
        Command::Add,
        Command::Move,
        Command::Rename,
        Command::Delete,
        Command::Extract,
        Command::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::Help => "Help",
            Command::ChangeArchive => "Change archive",
            Command::CreateArchive => "Create archive",
            Command::Open => "Open",
            Command::Add => "Add",
            Command::AddFromFilesystem => "Add from filesystem",
            Command::AddNewFile => "New file",
            Command::AddNewFolder => "New folder",
            Command::Move => "Move",
            Command::Rename => "Rename",
            Command::Delete => "Delete",
            Command::Extract => "Extract",
            Command::ExtractHere => "Extract here",
            Command::ExtractElsewhere => "Extract elsewhere",
            Command::Info => "Info",
            Command::ArchiveInfo => "Archive info",
        }
    }

    /// Verb used in notices ("cannot <verb> anything")
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Help => "show help for",
            Command::ChangeArchive => "change",
            Command::CreateArchive => "create",
            Command::Open => "open",
            Command::Add | Command::AddFromFilesystem | Command::AddNewFile | Command::AddNewFolder => {
                "add"
            }
            Command::Move => "move",
            Command::Rename => "rename",
            Command::Delete => "delete",
            Command::Extract | Command::ExtractHere | Command::ExtractElsewhere => "extract",
            Command::Info | Command::ArchiveInfo => "show info about",
        }
    }

    pub fn requires_selection(&self) -> bool {
        matches!(
            self,
            Command::Open | Command::Move | Command::Rename | Command::Delete | Command::Info
        )
    }

    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add
                | Command::AddFromFilesystem
                | Command::AddNewFile
                | Command::AddNewFolder
                | Command::Move
                | Command::Rename
                | Command::Delete
        )
    }
}

/// Why a command was turned down before running anything
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("Nothing was selected, cannot {0} anything")]
    NothingSelected(&'static str),
    #[error("Cannot {0} because of limited 7zip support for this archive format")]
    LimitedSupport(&'static str),
    #[error("Only files can be opened, no file was selected")]
    NoFiles,
}

/// One open archive and the archiver that serves it
pub struct Session<A: Archiver> {
    catalog: ArchiveCatalog<A>,
    current: LoadedArchive,
}

impl<A: Archiver> Session<A> {
    /// Load `archive` and start a session on it
    pub fn open(catalog: ArchiveCatalog<A>, archive: &Path) -> ArctreeResult<Self> {
        let current = catalog.load(archive)?;
        Ok(Self { catalog, current })
    }

    pub fn archive(&self) -> &LoadedArchive {
        &self.current
    }

    pub fn index(&self) -> &NodeIndex {
        &self.current.index
    }

    pub fn separator(&self) -> PathSeparator {
        self.catalog.separator()
    }

    pub fn archiver(&self) -> &A {
        self.catalog.archiver()
    }

    /// Load another archive; the current one stays open on failure
    pub fn switch_to(&mut self, archive: &Path) -> ArctreeResult<()> {
        self.current = self.catalog.load(archive)?;
        Ok(())
    }

    /// Guard a command before any prompt or process runs
    pub fn check(&self, command: Command, selection: &[String]) -> Result<(), Refusal> {
        if command.mutates() && self.current.is_limited() {
            return Err(Refusal::LimitedSupport(command.verb()));
        }
        if command.requires_selection() && selection.is_empty() {
            return Err(Refusal::NothingSelected(command.verb()));
        }
        if command == Command::Open && !selection.iter().any(|s| !self.is_dir_identifier(s)) {
            return Err(Refusal::NoFiles);
        }
        Ok(())
    }

    pub fn delete(&mut self, selection: &[String]) -> ArctreeResult<()> {
        self.ensure_mutable("delete")?;
        let items = operations::selection_items(selection, self.separator());
        self.catalog.archiver().delete(&self.current.path, &items)?;
        self.refresh()
    }

    /// Move the selection into `destination` (a directory identifier or
    /// [`operations::TOP_LEVEL`]). Returns how many entries moved.
    pub fn move_to(&mut self, selection: &[String], destination: &str) -> ArctreeResult<usize> {
        self.ensure_mutable("move")?;
        let pairs = operations::plan_moves(selection, destination, self.separator());

        let mut moved = 0;
        let mut failure = None;
        for pair in &pairs {
            match self
                .catalog
                .archiver()
                .rename(&self.current.path, std::slice::from_ref(pair))
            {
                Ok(()) => moved += 1,
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }

        if moved > 0 {
            self.refresh()?;
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(moved),
        }
    }

    /// Rename every selected entry to `new_name`, made unique per directory.
    /// Returns how many entries were renamed.
    pub fn rename(&mut self, selection: &[String], new_name: &str) -> ArctreeResult<usize> {
        self.ensure_mutable("rename")?;
        let pairs = plan_renames(&self.current.index, selection, new_name);
        if pairs.is_empty() {
            return Ok(0);
        }
        self.catalog.archiver().rename(&self.current.path, &pairs)?;
        self.refresh()?;
        Ok(pairs.len())
    }

    pub fn add(&mut self, sources: &[PathBuf], cwd: Option<&Path>) -> ArctreeResult<()> {
        self.ensure_mutable("add")?;
        self.catalog
            .archiver()
            .add(&self.current.path, sources, cwd)?;
        self.refresh()
    }

    /// Extract the selection (everything when empty) into a fresh
    /// `extracted_<stem>_<n>` directory under `parent`
    pub fn extract(&self, selection: &[String], parent: &Path) -> ArctreeResult<PathBuf> {
        let out_dir = operations::extraction_dir(
            parent,
            &self.current.path,
            operations::extraction_seed(),
        );
        let items = operations::selection_items(selection, self.separator());
        self.catalog
            .archiver()
            .extract(&self.current.path, &items, &out_dir)?;
        Ok(out_dir)
    }

    /// Extract the selected files into the open cache and return their paths
    ///
    /// Files already present in the cache are not extracted again.
    pub fn extract_for_opening(&self, selection: &[String]) -> ArctreeResult<Vec<PathBuf>> {
        let cache = operations::open_cache_dir(&self.current.path);
        fs::create_dir_all(&cache)?;

        let mut opened = Vec::new();
        for selected in selection.iter().filter(|s| !self.is_dir_identifier(s)) {
            let target = cache.join(selected);
            if !target.exists() {
                self.catalog.archiver().extract(
                    &self.current.path,
                    std::slice::from_ref(selected),
                    &cache,
                )?;
            }
            opened.push(target);
        }
        Ok(opened)
    }

    /// One technical-info page per selected entry
    pub fn item_info(&self, selection: &[String]) -> ArctreeResult<Vec<String>> {
        let items = operations::selection_items(selection, self.separator());
        let text = self.catalog.archiver().list(&self.current.path, &items)?;
        Ok(operations::item_info_pages(&text))
    }

    pub fn archive_info(&self) -> ArctreeResult<String> {
        let text = self.catalog.archiver().list(&self.current.path, &[])?;
        Ok(operations::archive_info(&text))
    }

    fn is_dir_identifier(&self, selected: &str) -> bool {
        self.separator().is_dir_marker(selected)
    }

    fn ensure_mutable(&self, action: &str) -> ArctreeResult<()> {
        if self.current.is_limited() {
            return Err(ArctreeError::LimitedSupport {
                action: action.to_string(),
                archive: self.current.path.clone(),
            });
        }
        Ok(())
    }

    fn refresh(&mut self) -> ArctreeResult<()> {
        log::debug!("rebuilding tree for {}", self.current.path.display());
        self.current = self.catalog.load(&self.current.path)?;
        Ok(())
    }
}

/// Create `target` from `sources` with a one-off `add`
pub fn create_archive<A: Archiver>(
    archiver: &A,
    target: &Path,
    sources: &[PathBuf],
) -> ArctreeResult<()> {
    log::info!("creating {} from {} sources", target.display(), sources.len());
    archiver.add(target, sources, None)
}
