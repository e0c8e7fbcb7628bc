//! Error types for arctree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for arctree operations
pub type ArctreeResult<T> = Result<T, ArctreeError>;

/// Main error type for arctree operations
#[derive(Error, Debug)]
pub enum ArctreeError {
    /// A listed entry's containing directory could not be materialized
    #[error("malformed listing: cannot resolve the directory containing '{path}'")]
    UnresolvedParent { path: String },

    /// The archiver program could not be started
    #[error("failed to run '{program}': {source}")]
    ArchiverSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The archiver ran but reported failure
    #[error("{program} stopped with error code {code}{}", stderr_suffix(.stderr))]
    ArchiverFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    /// The archive cannot be modified by the archiver
    #[error("{action} is not possible: {archive} has limited support")]
    LimitedSupport { action: String, archive: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
