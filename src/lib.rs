//! arctree - browse and edit compressed archives as an interactive tree
//!
//! The archive program (`7z`) reports a flat listing; arctree parses it,
//! builds a directory tree from it and runs every edit back through the
//! archive program, reloading the tree afterwards.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{ArchiveCatalog, Command, LoadedArchive, Refusal, Session};
pub use config::Config;
pub use domain::entities::{ArchiveEntry, Listing, NodeIndex};
pub use domain::services::{build_index, parse_listing};
pub use domain::value_objects::{ArchiveFormat, PathSeparator};
pub use error::{ArctreeError, ArctreeResult};
pub use infrastructure::SevenZipArchiver;
