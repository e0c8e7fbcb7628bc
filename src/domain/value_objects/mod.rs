//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod archive_format;
mod separator;

pub use archive_format::ArchiveFormat;
pub use separator::PathSeparator;
