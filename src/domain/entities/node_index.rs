//! NodeIndex entity - canonical full path to directory node
//!
//! One NodeIndex lives for exactly one loaded archive. It is never patched
//! after a mutation; the catalog rebuilds it from a fresh listing.

use std::collections::BTreeMap;

use super::entry::ArchiveEntry;
use crate::domain::value_objects::PathSeparator;

/// A directory in the hierarchical model
///
/// Files are not nodes: they only appear as leaf names in `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Leaf segment
    pub name: String,
    /// Full canonical path from the archive root
    pub path: String,
    /// Immediate children (leaf names), in discovery order
    pub children: Vec<String>,
}

impl TreeNode {
    pub fn new(path: &str, sep: PathSeparator, children: Vec<String>) -> Self {
        Self {
            name: sep.leaf(path).to_string(),
            path: path.to_string(),
            children,
        }
    }
}

/// Lookup table from canonical full path to [`TreeNode`], plus the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIndex {
    sep: PathSeparator,
    nodes: BTreeMap<String, TreeNode>,
    surface: Vec<String>,
}

impl NodeIndex {
    /// Reserved key naming the depth-0 list
    pub const SURFACE_KEY: &'static str = "surface";

    pub fn new(sep: PathSeparator) -> Self {
        Self {
            sep,
            nodes: BTreeMap::new(),
            surface: Vec::new(),
        }
    }

    pub fn separator(&self) -> PathSeparator {
        self.sep
    }

    /// Depth-0 entries, directories and files mixed
    pub fn surface(&self) -> &[String] {
        &self.surface
    }

    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        self.nodes.get(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    /// Children of a directory, or of the root when `path` is the surface key
    pub fn children_of(&self, path: &str) -> Option<&[String]> {
        if path == Self::SURFACE_KEY {
            return Some(&self.surface);
        }
        self.nodes.get(path).map(|n| n.children.as_slice())
    }

    /// Full path of child `name` under `dir` (`None` = archive root)
    pub fn child_path(&self, dir: Option<&str>, name: &str) -> String {
        match dir {
            Some(dir) => self.sep.join(dir, name),
            None => name.to_string(),
        }
    }

    /// Number of directory nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.surface.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }

    /// Register `path` as a directory node; an existing node keeps its
    /// children and gains the new ones. Returns true when newly inserted.
    pub(crate) fn register(&mut self, path: &str, children: Vec<String>) -> bool {
        match self.nodes.get_mut(path) {
            Some(node) => {
                for child in children {
                    if !node.children.contains(&child) {
                        node.children.push(child);
                    }
                }
                false
            }
            None => {
                let mut unique: Vec<String> = Vec::with_capacity(children.len());
                for child in children {
                    if !unique.contains(&child) {
                        unique.push(child);
                    }
                }
                self.nodes
                    .insert(path.to_string(), TreeNode::new(path, self.sep, unique));
                true
            }
        }
    }

    /// Append a leaf name to an existing directory. Returns false when the
    /// directory has no node.
    pub(crate) fn append_child(&mut self, dir: &str, name: &str) -> bool {
        match self.nodes.get_mut(dir) {
            Some(node) => {
                if !node.children.iter().any(|c| c == name) {
                    node.children.push(name.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_surface(&mut self, name: &str) {
        if !self.surface.iter().any(|s| s == name) {
            self.surface.push(name.to_string());
        }
    }

    /// Flatten back into entries by walking from the surface
    pub fn flatten(&self) -> Vec<ArchiveEntry> {
        let mut out = Vec::new();
        let mut stack: Vec<String> = self.surface.iter().rev().cloned().collect();

        while let Some(path) = stack.pop() {
            match self.nodes.get(&path) {
                Some(node) => {
                    for child in node.children.iter().rev() {
                        stack.push(self.sep.join(&path, child));
                    }
                    out.push(ArchiveEntry::directory(path));
                }
                None => out.push(ArchiveEntry::file(path)),
            }
        }

        out
    }
}
