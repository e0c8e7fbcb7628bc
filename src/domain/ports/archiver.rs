//! Archiver Port
//!
//! Abstracts the external archive program. The core never decodes archives
//! itself: listings come back as raw technical text and mutations either
//! succeed or report the program's exit code.

use std::path::{Path, PathBuf};

use crate::error::ArctreeResult;

/// An external program that can list and mutate archives
///
/// Every call is synchronous and blocks until the program exits.
pub trait Archiver {
    /// Program name used in messages and logs
    fn program(&self) -> &str;

    /// Technical listing (`l -slt`) of the archive, or of `items` only
    fn list(&self, archive: &Path, items: &[String]) -> ArctreeResult<String>;

    /// Add `sources` to the archive; relative sources resolve against `cwd`
    fn add(&self, archive: &Path, sources: &[PathBuf], cwd: Option<&Path>) -> ArctreeResult<()>;

    /// Delete entries by their archive paths
    fn delete(&self, archive: &Path, items: &[String]) -> ArctreeResult<()>;

    /// Rename entries; each pair is `(old path, new path)`
    fn rename(&self, archive: &Path, pairs: &[(String, String)]) -> ArctreeResult<()>;

    /// Extract `items` (everything when empty) into `out_dir`, keeping paths
    fn extract(&self, archive: &Path, items: &[String], out_dir: &Path) -> ArctreeResult<()>;
}
