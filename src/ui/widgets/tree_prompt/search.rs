//! Filtering the tree by a committed search pattern.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use super::node::{Arena, NodeId};
use super::source::TreeSource;

/// How far a search looks below non-matching directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Any depth, fetching unopened directories as needed
    Recursive,
    /// Only through directories that are already open
    NonRecursive,
}

impl SearchPolicy {
    pub fn from_flag(recursive: bool) -> Self {
        if recursive {
            SearchPolicy::Recursive
        } else {
            SearchPolicy::NonRecursive
        }
    }
}

/// Case-insensitive substring match over leaf names
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    /// `None` for an empty query
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Self {
            raw: query.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Subtree match results for one render pass
pub(crate) struct Matcher<'p> {
    pattern: &'p Pattern,
    policy: SearchPolicy,
    memo: HashMap<NodeId, bool>,
}

impl<'p> Matcher<'p> {
    pub fn new(pattern: &'p Pattern, policy: SearchPolicy) -> Self {
        Self {
            pattern,
            policy,
            memo: HashMap::new(),
        }
    }

    /// Whether `id` matches or leads to a match
    pub fn shows(&mut self, arena: &mut Arena, source: &dyn TreeSource, id: NodeId) -> bool {
        if let Some(&hit) = self.memo.get(&id) {
            return hit;
        }

        let node = arena.node(id);
        let hit = if self.pattern.is_match(&node.name) {
            true
        } else if node.is_dir && (self.policy == SearchPolicy::Recursive || node.open) {
            if self.policy == SearchPolicy::Recursive {
                arena.ensure_children(id, source);
            }
            let children = arena.children(id).to_vec();
            children
                .into_iter()
                .any(|child| self.shows(arena, source, child))
        } else {
            false
        };

        self.memo.insert(id, hit);
        hit
    }
}

/// Depth-first list of the nodes to draw, honoring open state and filter
pub(crate) fn linearize(
    arena: &mut Arena,
    source: &dyn TreeSource,
    filter: Option<&Pattern>,
    policy: SearchPolicy,
) -> Vec<NodeId> {
    let mut matcher = filter.map(|pattern| Matcher::new(pattern, policy));
    let mut visible = Vec::new();
    for root in arena.roots().to_vec() {
        push_visible(arena, source, &mut matcher, root, &mut visible);
    }
    visible
}

fn push_visible(
    arena: &mut Arena,
    source: &dyn TreeSource,
    matcher: &mut Option<Matcher<'_>>,
    id: NodeId,
    out: &mut Vec<NodeId>,
) {
    if let Some(matcher) = matcher.as_mut() {
        if !matcher.shows(arena, source, id) {
            return;
        }
    }
    out.push(id);

    let node = arena.node(id);
    if node.is_dir && node.open {
        for child in arena.children(id).to_vec() {
            push_visible(arena, source, matcher, child, out);
        }
    }
}
