//! Where tree prompt entries come from.
//!
//! Values are identifiers: full paths, directories suffixed with the
//! separator. The prompt only ever asks for one directory level at a time.

use std::cmp::Ordering;
use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};

use arctree::application::operations::TOP_LEVEL;
use arctree::domain::entities::NodeIndex;

/// One entry offered by a [`TreeSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Leaf name shown on screen and matched by search
    pub name: String,
    /// Identifier returned when the entry is chosen
    pub value: String,
    pub is_dir: bool,
    /// Opening it moves the root one directory up
    pub climbs: bool,
}

impl SourceEntry {
    pub fn file(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_dir: false,
            climbs: false,
        }
    }

    pub fn directory(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_dir: true,
            climbs: false,
        }
    }

    /// The `..` entry leading to `value`; drawn as a leaf so searches
    /// never walk up the tree
    pub fn parent_dir(value: impl Into<String>) -> Self {
        Self {
            name: "..".to_string(),
            value: value.into(),
            is_dir: false,
            climbs: true,
        }
    }
}

/// Lazily lists one level of a tree
pub trait TreeSource {
    /// Entries directly under the directory `parent`; `None` lists the root
    fn children(&self, parent: Option<&str>) -> Vec<SourceEntry>;

    /// Move the root one level up; `false` when there is nothing above
    fn climb(&mut self) -> bool {
        false
    }
}

/// Serves the tree of a loaded archive
pub struct ArchiveTreeSource<'a> {
    index: &'a NodeIndex,
    dirs_only: bool,
    top_level: bool,
}

impl<'a> ArchiveTreeSource<'a> {
    pub fn new(index: &'a NodeIndex) -> Self {
        Self {
            index,
            dirs_only: false,
            top_level: false,
        }
    }

    pub fn directories_only(mut self) -> Self {
        self.dirs_only = true;
        self
    }

    /// Offer a `.` entry standing for the archive top level
    pub fn with_top_level(mut self) -> Self {
        self.top_level = true;
        self
    }
}

impl TreeSource for ArchiveTreeSource<'_> {
    fn children(&self, parent: Option<&str>) -> Vec<SourceEntry> {
        let sep = self.index.separator();
        let (dir, names) = match parent {
            None => (None, self.index.surface()),
            Some(value) => {
                let dir = sep.trim_trailing(value);
                match self.index.get(dir) {
                    Some(node) => (Some(dir), node.children.as_slice()),
                    None => return Vec::new(),
                }
            }
        };

        let mut entries = Vec::with_capacity(names.len() + 1);
        if parent.is_none() && self.top_level {
            entries.push(SourceEntry::file(TOP_LEVEL, TOP_LEVEL));
        }
        for name in names {
            let full = self.index.child_path(dir, name);
            if self.index.is_directory(&full) {
                entries.push(SourceEntry::directory(name.as_str(), sep.dir_identifier(&full)));
            } else if !self.dirs_only {
                entries.push(SourceEntry::file(name.as_str(), full));
            }
        }
        entries
    }
}

/// Serves a directory of the local filesystem
pub struct FsTreeSource {
    root: PathBuf,
    dirs_only: bool,
    climbable: bool,
}

impl FsTreeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dirs_only: false,
            climbable: false,
        }
    }

    pub fn directories_only(mut self) -> Self {
        self.dirs_only = true;
        self
    }

    /// Offer a `..` entry above the root
    pub fn climbable(mut self) -> Self {
        self.climbable = true;
        self
    }
}

impl TreeSource for FsTreeSource {
    fn children(&self, parent: Option<&str>) -> Vec<SourceEntry> {
        let dir = parent.map(PathBuf::from).unwrap_or_else(|| self.root.clone());
        let read = match fs::read_dir(&dir) {
            Ok(read) => read,
            Err(err) => {
                log::debug!("cannot list {}: {}", dir.display(), err);
                return Vec::new();
            }
        };

        let mut entries: Vec<SourceEntry> = read
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();
                let value = path.to_string_lossy().into_owned();
                if path.is_dir() {
                    Some(SourceEntry::directory(name, format!("{}{}", value, MAIN_SEPARATOR)))
                } else if self.dirs_only {
                    None
                } else {
                    Some(SourceEntry::file(name, value))
                }
            })
            .collect();

        entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });

        if parent.is_none() && self.climbable {
            if let Some(up) = self.root.parent() {
                let value = format!("{}{}", up.to_string_lossy(), MAIN_SEPARATOR);
                entries.insert(0, SourceEntry::parent_dir(value));
            }
        }
        entries
    }

    fn climb(&mut self) -> bool {
        if !self.climbable {
            return false;
        }
        match self.root.parent() {
            Some(up) => {
                self.root = up.to_path_buf();
                log::debug!("file picker moved up to {}", self.root.display());
                true
            }
            None => false,
        }
    }
}
