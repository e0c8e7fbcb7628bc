//! Domain Services
//!
//! Pure functions over listing text and the node index. No I/O.

mod listing_parser;
mod naming;
mod tree_builder;

pub use listing_parser::parse_listing;
pub use naming::{plan_renames, split_extension, NameError, NamePolicy};
pub use tree_builder::build_index;
