//! Listing parser - `7z l -slt` technical output to flat path sequences
//!
//! Each entry stanza carries a `Path = <value>` line and, depending on the
//! backend, either `Attributes = <flags>` (directory flag `D`) or
//! `Folder = +|-`. When a stanza carries both, `Folder` wins.

use std::collections::HashSet;

use crate::domain::entities::Listing;
use crate::domain::value_objects::PathSeparator;

const ENTRIES_MARKER: &str = "----------";

#[derive(Debug, Default)]
struct Stanza {
    path: Option<String>,
    folder: Option<bool>,
    attributes: Option<bool>,
    describes_archive: bool,
}

impl Stanza {
    fn is_dir(&self) -> Option<bool> {
        self.folder.or(self.attributes)
    }
}

/// Split listing text into directory paths and file paths
///
/// The header stanza describing the archive itself is skipped. Stanzas whose
/// kind cannot be determined are dropped. Trailing separators are removed
/// from directory paths and duplicates are reported once.
pub fn parse_listing(text: &str, sep: PathSeparator) -> Listing {
    let body = match text.find(ENTRIES_MARKER) {
        Some(idx) => &text[idx + ENTRIES_MARKER.len()..],
        None => text,
    };

    let mut listing = Listing::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut current: Option<Stanza> = None;

    for raw in body.lines() {
        let line = raw.trim_end_matches('\r');

        if let Some(value) = field(line, "Path") {
            if let Some(stanza) = current.take() {
                push_stanza(stanza, sep, &mut listing, &mut seen);
            }
            current = Some(Stanza {
                path: Some(value.to_string()),
                ..Stanza::default()
            });
            continue;
        }

        let Some(stanza) = current.as_mut() else {
            continue;
        };

        if let Some(value) = field(line, "Folder") {
            stanza.folder = match value.trim() {
                "+" => Some(true),
                "-" => Some(false),
                _ => None,
            };
        } else if let Some(value) = field(line, "Attributes") {
            stanza.attributes = attribute_is_dir(value);
        } else if field(line, "Type").is_some() {
            stanza.describes_archive = true;
        }
    }

    if let Some(stanza) = current.take() {
        push_stanza(stanza, sep, &mut listing, &mut seen);
    }

    log::debug!(
        "parsed listing: {} directories, {} files",
        listing.directories.len(),
        listing.files.len()
    );
    listing
}

fn field<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?;
    let rest = rest.strip_prefix(" =")?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

fn attribute_is_dir(value: &str) -> Option<bool> {
    let mut tokens = value.split_whitespace();
    let flags = tokens.next()?;
    if flags.contains('D') {
        return Some(true);
    }
    // Unix mode string, e.g. "A_ drwxr-xr-x"
    if let Some(mode) = tokens.next() {
        return Some(mode.starts_with('d'));
    }
    Some(false)
}

fn push_stanza(stanza: Stanza, sep: PathSeparator, listing: &mut Listing, seen: &mut HashSet<String>) {
    if stanza.describes_archive {
        return;
    }
    let is_dir = stanza.is_dir();
    let Some(path) = stanza.path else { return };
    let Some(is_dir) = is_dir else {
        log::debug!("skipping listing entry without kind: {}", path);
        return;
    };

    let path = if is_dir {
        sep.trim_trailing(&path).to_string()
    } else {
        path
    };
    if path.is_empty() || !seen.insert(path.clone()) {
        return;
    }

    if is_dir {
        listing.directories.push(path);
    } else {
        listing.files.push(path);
    }
}
