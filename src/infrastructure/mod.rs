//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process spawning and file system access.
//!
//! ## Structure
//!
//! - `archiver/` - `7z` process adapter
//! - `opener` - platform "open with default application"

pub mod archiver;
pub mod opener;

// Re-export for convenience
pub use archiver::SevenZipArchiver;
pub use opener::open_with_default_app;
