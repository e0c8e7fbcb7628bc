//! File logging
//!
//! The terminal belongs to the prompts, so log records go to
//! `<data_local_dir>/arctree/arctree.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::ArctreeResult;

/// Level for the number of `-v` flags: warn, info, debug, then trace
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("arctree").join("arctree.log"))
}

/// Start appending to the log file. Returns the file in use, or `None`
/// when the platform has no data directory.
pub fn init(verbose: u8) -> ArctreeResult<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    // a logger already installed (tests, embedding) keeps running
    if WriteLogger::init(level_for(verbose), config, file).is_ok() {
        log::info!("arctree {} started", env!("CARGO_PKG_VERSION"));
    }
    Ok(Some(path))
}
