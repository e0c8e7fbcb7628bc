//! Name policy - validation of user-entered names and unique rename targets

use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;

use crate::domain::entities::NodeIndex;
use crate::domain::value_objects::{ArchiveFormat, PathSeparator};

const WINDOWS_FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Why a user-entered name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Write down something at least")]
    Empty,
    #[error("Can't use '{0}' in the name")]
    Separator(char),
    #[error("One of the characters is forbidden on Windows")]
    ForbiddenChar,
    #[error("Cannot use that name because on Windows it's reserved")]
    Reserved,
    #[error("Cannot end with a . or space on Windows")]
    TrailingDotOrSpace,
    #[error("A file name needs an extension, e.g. notes.txt")]
    MissingExtension,
    #[error("A folder name must end with '{0}'")]
    MissingTrailingSeparator(char),
    #[error("7z cannot create an archive with that extension")]
    NotCreatable,
}

/// Rules for names typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePolicy {
    sep: PathSeparator,
    windows: bool,
}

impl NamePolicy {
    pub fn new(sep: PathSeparator, windows: bool) -> Self {
        Self { sep, windows }
    }

    pub fn native() -> Self {
        Self::new(PathSeparator::native(), cfg!(windows))
    }

    pub fn separator(&self) -> PathSeparator {
        self.sep
    }

    /// New leaf name for entries being renamed in place
    pub fn validate_rename(&self, name: &str) -> Result<(), NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }
        if name.contains('/') {
            return Err(NameError::Separator('/'));
        }
        self.platform_rules(name)
    }

    /// Relative path of a new file, which must carry an extension
    pub fn validate_new_file(&self, name: &str) -> Result<(), NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }
        if name.starts_with(self.sep.as_char()) {
            return Err(NameError::Separator(self.sep.as_char()));
        }
        self.platform_rules(name)?;

        match split_extension(self.sep.leaf(name)) {
            (_, ext) if ext.len() > 1 => Ok(()),
            _ => Err(NameError::MissingExtension),
        }
    }

    /// Relative path of new folders, terminated by the separator
    ///
    /// On Windows a trailing `/` is accepted too.
    pub fn validate_new_folder(&self, name: &str) -> Result<(), NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }
        let ends_ok = name.ends_with(self.sep.as_char()) || (self.windows && name.ends_with('/'));
        if !ends_ok {
            return Err(NameError::MissingTrailingSeparator(self.sep.as_char()));
        }
        if self.windows {
            let segments = name.split(['/', '\\']).filter(|s| !s.is_empty());
            for segment in segments {
                self.platform_rules(segment)?;
            }
        }
        Ok(())
    }

    /// File name of an archive about to be created
    pub fn validate_archive_name(&self, name: &str) -> Result<(), NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }
        self.platform_rules(name)?;
        if !ArchiveFormat::is_creatable(Path::new(name)) {
            return Err(NameError::NotCreatable);
        }
        Ok(())
    }

    fn platform_rules(&self, name: &str) -> Result<(), NameError> {
        if !self.windows {
            return Ok(());
        }
        if name.contains(WINDOWS_FORBIDDEN) {
            return Err(NameError::ForbiddenChar);
        }
        let (stem, _) = split_extension(name);
        if WINDOWS_RESERVED
            .iter()
            .any(|reserved| stem.eq_ignore_ascii_case(reserved))
        {
            return Err(NameError::Reserved);
        }
        if name.ends_with('.') || name.ends_with(' ') {
            return Err(NameError::TrailingDotOrSpace);
        }
        Ok(())
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::native()
    }
}

/// Split a leaf name into stem and extension (`.ext`, possibly empty)
///
/// A leading dot is part of the stem: `.profile` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Plan the `old -> new` pairs for renaming every selected entry to `new_name`
///
/// Selection identifiers are full paths, directories suffixed with the
/// separator. Entries already called `new_name` are skipped. When the target
/// clashes with a sibling of the same kind, or with a target planned earlier
/// in the same directory, a counter is inserted: `name(1)` for directories,
/// `stem(1).ext` for files.
pub fn plan_renames(index: &NodeIndex, selection: &[String], new_name: &str) -> Vec<(String, String)> {
    let sep = index.separator();
    let mut planned: HashMap<String, HashSet<String>> = HashMap::new();
    let mut pairs = Vec::new();

    for selected in selection {
        let is_dir = sep.is_dir_marker(selected);
        let path = sep.trim_trailing(selected);
        if sep.leaf(path) == new_name {
            continue;
        }

        let parent = sep.parent(path);
        let names = match parent {
            None => index.surface(),
            Some(dir) => index.get(dir).map(|n| n.children.as_slice()).unwrap_or_default(),
        };
        let siblings: Vec<&str> = names
            .iter()
            .filter(|name| {
                let sibling = index.child_path(parent, name);
                index.is_directory(&sibling) == is_dir
            })
            .map(String::as_str)
            .collect();
        // the top level is keyed by the empty path, which no directory has
        let taken = planned.entry(parent.unwrap_or_default().to_string()).or_default();

        let mut candidate = new_name.to_string();
        let mut counter = 0;
        while siblings.contains(&candidate.as_str()) || taken.contains(&candidate) {
            counter += 1;
            candidate = numbered(new_name, counter, is_dir);
        }
        taken.insert(candidate.clone());

        let target = index.child_path(parent, &candidate);
        pairs.push((path.to_string(), target));
    }

    pairs
}

fn numbered(name: &str, counter: usize, is_dir: bool) -> String {
    if is_dir {
        return format!("{}({})", name, counter);
    }
    let (stem, ext) = split_extension(name);
    format!("{}({}){}", stem, counter, ext)
}
