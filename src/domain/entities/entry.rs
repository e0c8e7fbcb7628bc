//! ArchiveEntry entity - one path reported by the archive listing

/// Whether a listed path is a directory or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One reported path, tagged with its kind
///
/// The path is separator-delimited with the platform's native separator and
/// never carries a trailing separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl ArchiveEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }
}

/// The two flat sequences a listing is split into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn new(directories: Vec<String>, files: Vec<String>) -> Self {
        Self { directories, files }
    }

    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// All entries, directories first
    pub fn entries(&self) -> impl Iterator<Item = ArchiveEntry> + '_ {
        self.directories
            .iter()
            .map(|d| ArchiveEntry::directory(d.as_str()))
            .chain(self.files.iter().map(|f| ArchiveEntry::file(f.as_str())))
    }
}
