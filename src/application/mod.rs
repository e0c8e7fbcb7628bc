//! Application Layer
//!
//! Use cases that orchestrate the browse flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `ArchiveCatalog` - list, parse and build the tree for an archive
//! - `Session` - one open archive; guards and runs commands, reloads after mutations
//! - `operations` - argument planning for the archive program

pub mod catalog;
pub mod operations;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{ArchiveCatalog, LoadedArchive};
pub use session::{create_archive, Command, Refusal, Session};
