//! Argument planning for archive mutations
//!
//! Selections arrive as entry identifiers: full archive paths, directories
//! suffixed with the separator. The archive program wants bare paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::value_objects::PathSeparator;

/// Selection identifier for the archive top level in destination pickers
pub const TOP_LEVEL: &str = ".";

const INFO_HEADER_MARKER: &str = "\n--\n";
const ENTRIES_MARKER: &str = "----------";

/// Archive paths for the selected identifiers
pub fn selection_items(selection: &[String], sep: PathSeparator) -> Vec<String> {
    selection
        .iter()
        .map(|s| sep.trim_trailing(s).to_string())
        .collect()
}

/// `(old, new)` pairs moving every selected entry into `destination`
///
/// `destination` is a directory identifier or [`TOP_LEVEL`]. Entries that
/// would not move, and directories that would move into themselves, are
/// skipped.
pub fn plan_moves(
    selection: &[String],
    destination: &str,
    sep: PathSeparator,
) -> Vec<(String, String)> {
    let dest = if destination == TOP_LEVEL {
        ""
    } else {
        sep.trim_trailing(destination)
    };

    selection
        .iter()
        .filter_map(|selected| {
            let old = sep.trim_trailing(selected);
            let new = sep.join(dest, sep.leaf(old));
            let into_itself = sep.is_dir_marker(selected)
                && (dest == old || dest.starts_with(&sep.dir_identifier(old)));
            if new == old || into_itself {
                log::debug!("move of '{}' into '{}' skipped", old, destination);
                None
            } else {
                Some((old.to_string(), new))
            }
        })
        .collect()
}

/// Starting number for the `extracted_<stem>_<n>` directory name
pub fn extraction_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() % 1_000_000)
        .unwrap_or(0)
}

/// First free `extracted_<stem>_<n>` directory under `parent`, counting from `seed`
pub fn extraction_dir(parent: &Path, archive: &Path, seed: u32) -> PathBuf {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());

    let mut n = seed;
    loop {
        let candidate = parent.join(format!("extracted_{}_{}", stem, n));
        if !candidate.exists() {
            return candidate;
        }
        n = n.wrapping_add(1);
    }
}

/// Temp directory where entries are extracted before being opened
pub fn open_cache_dir(archive: &Path) -> PathBuf {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = archive
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    std::env::temp_dir()
        .join("arctree")
        .join(format!("{}_{}", stem, ext))
}

/// Archive-level section of a technical listing
pub fn archive_info(listing: &str) -> String {
    let start = listing
        .find(INFO_HEADER_MARKER)
        .map(|idx| idx + INFO_HEADER_MARKER.len())
        .unwrap_or(0);
    let rest = &listing[start..];
    let end = rest.find(ENTRIES_MARKER).unwrap_or(rest.len());
    rest[..end].trim().to_string()
}

/// One page per entry stanza of a technical listing
pub fn item_info_pages(listing: &str) -> Vec<String> {
    let body = match listing.find(ENTRIES_MARKER) {
        Some(idx) => &listing[idx + ENTRIES_MARKER.len()..],
        None => return Vec::new(),
    };

    let mut pages = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in body.lines().map(|l| l.trim_end_matches('\r')) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                pages.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        pages.push(current.join("\n"));
    }
    pages
}

/// Write a new file under `staging`, creating intermediate folders
///
/// Returns the top-level operand to add from `staging`.
pub fn stage_new_file(
    staging: &Path,
    name: &str,
    content: &str,
    sep: PathSeparator,
) -> io::Result<PathBuf> {
    let target = staging.join(name);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, content)?;
    Ok(PathBuf::from(first_segment(name, sep)))
}

/// Create new folders under `staging`
///
/// Returns the top-level operand to add from `staging`.
pub fn stage_new_folders(staging: &Path, name: &str, sep: PathSeparator) -> io::Result<PathBuf> {
    fs::create_dir_all(staging.join(name))?;
    Ok(PathBuf::from(first_segment(name, sep)))
}

fn first_segment(name: &str, sep: PathSeparator) -> &str {
    name.split([sep.as_char(), '/'])
        .find(|s| !s.is_empty())
        .unwrap_or(name)
}
