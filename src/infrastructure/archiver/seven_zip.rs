//! 7-Zip adapter
//!
//! Runs the `7z` command line program with explicit argument arrays. Output
//! is captured; a non-zero exit becomes [`ArctreeError::ArchiverFailed`].

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::Archiver;
use crate::error::{ArctreeError, ArctreeResult};

/// [`Archiver`] backed by the `7z` executable
#[derive(Debug, Clone)]
pub struct SevenZipArchiver {
    program: String,
}

impl SevenZipArchiver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the program is installed and runs
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("i")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(&self, args: &[OsString], cwd: Option<&Path>) -> ArctreeResult<Output> {
        log::info!("running {} {}", self.program, display_args(args));

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| ArctreeError::ArchiverSpawn {
            program: self.program.clone(),
            source,
        })?;

        let code = output.status.code().unwrap_or(-1);
        log::info!("{} exited with code {}", self.program, code);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::debug!("{} stderr: {}", self.program, stderr.trim());
            return Err(ArctreeError::ArchiverFailed {
                program: self.program.clone(),
                code,
                stderr,
            });
        }

        Ok(output)
    }
}

impl Default for SevenZipArchiver {
    fn default() -> Self {
        Self::new("7z")
    }
}

impl Archiver for SevenZipArchiver {
    fn program(&self) -> &str {
        &self.program
    }

    fn list(&self, archive: &Path, items: &[String]) -> ArctreeResult<String> {
        let output = self.run(&list_args(archive, items), None)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn add(&self, archive: &Path, sources: &[PathBuf], cwd: Option<&Path>) -> ArctreeResult<()> {
        let archive = match cwd {
            Some(_) if archive.is_relative() => std::env::current_dir()?.join(archive),
            _ => archive.to_path_buf(),
        };
        self.run(&add_args(&archive, sources), cwd).map(|_| ())
    }

    fn delete(&self, archive: &Path, items: &[String]) -> ArctreeResult<()> {
        self.run(&delete_args(archive, items), None).map(|_| ())
    }

    fn rename(&self, archive: &Path, pairs: &[(String, String)]) -> ArctreeResult<()> {
        self.run(&rename_args(archive, pairs), None).map(|_| ())
    }

    fn extract(&self, archive: &Path, items: &[String], out_dir: &Path) -> ArctreeResult<()> {
        self.run(&extract_args(archive, items, out_dir), None)
            .map(|_| ())
    }
}

/// `<command> <switches> -- <archive> <operands>`
///
/// Everything after `--` is taken literally, so entries named like `-x.txt`
/// or `@list` are never read as switches or list files.
fn command_args<I>(
    command: &str,
    switches: Vec<OsString>,
    archive: &Path,
    operands: I,
) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = vec![OsString::from(command)];
    args.extend(switches);
    args.push(OsString::from("--"));
    args.push(archive.into());
    args.extend(operands.into_iter().map(Into::into));
    args
}

fn list_args(archive: &Path, items: &[String]) -> Vec<OsString> {
    command_args("l", vec![OsString::from("-slt")], archive, items)
}

fn add_args(archive: &Path, sources: &[PathBuf]) -> Vec<OsString> {
    command_args("a", Vec::new(), archive, sources)
}

fn delete_args(archive: &Path, items: &[String]) -> Vec<OsString> {
    command_args("d", Vec::new(), archive, items)
}

fn rename_args(archive: &Path, pairs: &[(String, String)]) -> Vec<OsString> {
    let operands = pairs
        .iter()
        .flat_map(|(old, new)| [old.as_str(), new.as_str()]);
    command_args("rn", Vec::new(), archive, operands)
}

fn extract_args(archive: &Path, items: &[String], out_dir: &Path) -> Vec<OsString> {
    let mut out = OsString::from("-o");
    out.push(out_dir);
    command_args("x", vec![out, OsString::from("-y")], archive, items)
}

fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| quote(a))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{}\"", s)
    } else {
        s.into_owned()
    }
}
