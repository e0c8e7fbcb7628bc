//! Property tests for arctree.
//!
//! Properties use randomized listings to protect the tree invariants:
//! every entry reachable exactly once, flattening reproduces the input,
//! building is deterministic.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/tree_builder.rs"]
mod tree_builder;

#[path = "properties/listing_parser.rs"]
mod listing_parser;
