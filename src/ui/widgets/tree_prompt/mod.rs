//! Tree Prompt Widget
//!
//! An interactive tree over a lazily listed hierarchy: the entries of an
//! archive or of a local directory. Supports single and multi-select,
//! collapsing, paginated scrolling and search.
//!
//! # Module Structure
//!
//! - `source` - where entries come from (`TreeSource`)
//! - `node` - arena of materialized nodes
//! - `search` - patterns, recursive/non-recursive filtering
//! - `keymap` - key bindings and command shortcuts
//! - `prompt` - state machine
//! - `render` - frame rendering

mod keymap;
mod node;
mod prompt;
mod render;
mod search;
mod source;

#[cfg(test)]
mod tests;

pub use keymap::{KeyMap, SHORTCUTS};
pub use prompt::{CancelReason, PromptOutcome, TreePrompt};
pub use search::SearchPolicy;
pub use source::{ArchiveTreeSource, FsTreeSource, TreeSource};
