//! Open a file with the platform's default application

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ArctreeError, ArctreeResult};

/// Program and leading arguments used to open files on this platform
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}

/// Hand `path` to the platform opener and wait for it to return
pub fn open_with_default_app(path: &Path) -> ArctreeResult<()> {
    let (program, leading) = opener_command();
    log::info!("opening {} with {}", path.display(), program);

    let status = Command::new(program)
        .args(leading)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| ArctreeError::ArchiverSpawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(ArctreeError::ArchiverFailed {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
            stderr: String::new(),
        });
    }
    Ok(())
}
