//! Tree builder - flat listing to [`NodeIndex`]
//!
//! Three passes:
//!
//! 1. Surface partition: every path without a separator is depth-0.
//! 2. Breadth-first directory discovery from the surface directories.
//! 3. File attachment. A file whose containing directory has no node yet
//!    triggers self-healing: every missing ancestor implied by the file's
//!    path prefixes is materialized, then the append is retried.
//!
//! Listed directories that discovery never reached (their parent is not
//! listed) go through the same self-healing step.

use std::collections::{HashMap, VecDeque};

use crate::domain::entities::{Listing, NodeIndex};
use crate::domain::value_objects::PathSeparator;
use crate::error::{ArctreeError, ArctreeResult};

/// Build a fully populated index from a parsed listing
pub fn build_index(listing: &Listing, sep: PathSeparator) -> ArctreeResult<NodeIndex> {
    let mut index = NodeIndex::new(sep);

    // Pass 1: surface
    for dir in &listing.directories {
        if dir.is_empty() {
            return Err(unresolved(dir));
        }
        if sep.is_surface(dir) {
            index.push_surface(dir);
        }
    }
    for file in &listing.files {
        if file.is_empty() {
            return Err(unresolved(file));
        }
        if sep.is_surface(file) {
            index.push_surface(file);
        }
    }

    // Pass 2: breadth-first discovery
    let subdirs = group_by_parent(&listing.directories, sep);
    let mut queue: VecDeque<String> = listing
        .directories
        .iter()
        .filter(|d| sep.is_surface(d))
        .cloned()
        .collect();

    while let Some(dir) = queue.pop_front() {
        let children: Vec<String> = subdirs
            .get(dir.as_str())
            .map(|names| names.iter().map(|n| n.to_string()).collect())
            .unwrap_or_default();
        for child in &children {
            queue.push_back(sep.join(&dir, child));
        }
        index.register(&dir, children);
    }

    for dir in &listing.directories {
        if !index.is_directory(dir) {
            log::debug!("directory '{}' not reached from the surface", dir);
            materialize(&mut index, dir, sep)?;
        }
    }

    // Pass 3: file attachment
    for file in &listing.files {
        let Some(parent) = sep.parent(file) else {
            continue;
        };
        let name = sep.leaf(file);
        if name.is_empty() {
            return Err(unresolved(file));
        }
        if index.append_child(parent, name) {
            continue;
        }

        log::debug!("containing directory of '{}' missing, materializing", file);
        materialize(&mut index, parent, sep)?;
        if !index.append_child(parent, name) {
            return Err(unresolved(file));
        }
    }

    log::info!(
        "built tree: {} directories, {} surface entries",
        index.len(),
        index.surface().len()
    );
    Ok(index)
}

/// Listed directories grouped under their parent path, in input order
fn group_by_parent(directories: &[String], sep: PathSeparator) -> HashMap<&str, Vec<&str>> {
    let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
    for dir in directories {
        if let Some(parent) = sep.parent(dir) {
            groups.entry(parent).or_default().push(sep.leaf(dir));
        }
    }
    groups
}

/// Ensure `dir` and every ancestor prefix of it has a node and is linked
/// into its parent (or the surface)
fn materialize(index: &mut NodeIndex, dir: &str, sep: PathSeparator) -> ArctreeResult<()> {
    if dir.split(sep.as_char()).any(str::is_empty) {
        return Err(unresolved(dir));
    }

    let mut current = String::new();
    for segment in dir.split(sep.as_char()) {
        let parent = current;
        current = sep.join(&parent, segment);

        if index.register(&current, Vec::new()) {
            log::debug!("materialized directory '{}'", current);
        }
        if parent.is_empty() {
            index.push_surface(segment);
        } else if !index.append_child(&parent, segment) {
            return Err(unresolved(&current));
        }
    }
    Ok(())
}

fn unresolved(path: &str) -> ArctreeError {
    ArctreeError::UnresolvedParent {
        path: path.to_string(),
    }
}
