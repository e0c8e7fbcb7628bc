//! Archive catalog - listing → parse → build
//!
//! Every load produces a fresh [`LoadedArchive`]. Nothing is patched in
//! place: after a mutation the caller loads again.

use std::path::{Path, PathBuf};

use crate::domain::entities::NodeIndex;
use crate::domain::ports::Archiver;
use crate::domain::services::{build_index, parse_listing};
use crate::domain::value_objects::{ArchiveFormat, PathSeparator};
use crate::error::ArctreeResult;

/// An archive whose listing has been turned into a tree
#[derive(Debug, Clone)]
pub struct LoadedArchive {
    pub path: PathBuf,
    pub format: ArchiveFormat,
    pub index: NodeIndex,
    /// Entries reported by the listing
    pub entries: usize,
}

impl LoadedArchive {
    pub fn is_limited(&self) -> bool {
        self.format.is_limited()
    }

    /// File name of the archive, for headers
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Loads archives through an [`Archiver`]
pub struct ArchiveCatalog<A: Archiver> {
    archiver: A,
    sep: PathSeparator,
}

impl<A: Archiver> ArchiveCatalog<A> {
    pub fn new(archiver: A, sep: PathSeparator) -> Self {
        Self { archiver, sep }
    }

    pub fn archiver(&self) -> &A {
        &self.archiver
    }

    pub fn separator(&self) -> PathSeparator {
        self.sep
    }

    /// List the archive and build its tree
    pub fn load(&self, archive: &Path) -> ArctreeResult<LoadedArchive> {
        let text = self.archiver.list(archive, &[])?;
        let listing = parse_listing(&text, self.sep);
        let index = build_index(&listing, self.sep)?;

        log::info!(
            "loaded {}: {} entries, {} directories",
            archive.display(),
            listing.len(),
            index.len()
        );

        Ok(LoadedArchive {
            path: archive.to_path_buf(),
            format: ArchiveFormat::from_path(archive),
            index,
            entries: listing.len(),
        })
    }
}
