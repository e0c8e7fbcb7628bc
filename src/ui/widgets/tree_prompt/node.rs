//! Arena of materialized tree nodes.
//!
//! Children are fetched from the source the first time a directory is
//! opened or searched, then kept for the life of the prompt.

use super::source::{SourceEntry, TreeSource};

pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub name: String,
    pub value: String,
    pub is_dir: bool,
    pub climbs: bool,
    pub depth: usize,
    pub parent: Option<NodeId>,
    /// `None` until fetched from the source
    pub children: Option<Vec<NodeId>>,
    pub open: bool,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Arena {
    pub fn load(source: &dyn TreeSource) -> Self {
        let mut arena = Self::default();
        let roots: Vec<NodeId> = source
            .children(None)
            .into_iter()
            .map(|entry| arena.push(entry, None, 0))
            .collect();
        arena.roots = roots;
        arena
    }

    fn push(&mut self, entry: SourceEntry, parent: Option<NodeId>, depth: usize) -> NodeId {
        self.nodes.push(Node {
            name: entry.name,
            value: entry.value,
            is_dir: entry.is_dir,
            climbs: entry.climbs,
            depth,
            parent,
            children: None,
            open: false,
        });
        self.nodes.len() - 1
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Fetched children; empty for files and unfetched directories
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id].children.as_deref().unwrap_or(&[])
    }

    pub fn ensure_children(&mut self, id: NodeId, source: &dyn TreeSource) {
        let node = &self.nodes[id];
        if !node.is_dir || node.children.is_some() {
            return;
        }
        let depth = node.depth + 1;
        let entries = source.children(Some(&node.value));
        let ids = entries
            .into_iter()
            .map(|entry| self.push(entry, Some(id), depth))
            .collect();
        self.nodes[id].children = Some(ids);
    }
}
