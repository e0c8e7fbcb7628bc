//! Domain Entities
//!
//! - `ArchiveEntry` - one path reported by the archive listing
//! - `Listing` - the listing split into directory and file paths
//! - `NodeIndex` - canonical path to directory node, plus the surface

mod entry;
mod node_index;

pub use entry::{ArchiveEntry, EntryKind, Listing};
pub use node_index::{NodeIndex, TreeNode};
