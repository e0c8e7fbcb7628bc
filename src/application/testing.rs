//! In-memory [`Archiver`] for application tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::ports::Archiver;
use crate::error::{ArctreeError, ArctreeResult};

#[derive(Default)]
pub struct FakeArchiver {
    listing: RefCell<Vec<(String, bool)>>,
    after_mutation: RefCell<Option<Vec<(String, bool)>>>,
    fail_with: RefCell<Option<i32>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeArchiver {
    pub fn with_listing(entries: &[(&str, bool)]) -> Self {
        let archiver = Self::default();
        *archiver.listing.borrow_mut() = to_owned(entries);
        archiver
    }

    /// Listing reported once the next mutation succeeds
    pub fn then_listing(self, entries: &[(&str, bool)]) -> Self {
        *self.after_mutation.borrow_mut() = Some(to_owned(entries));
        self
    }

    pub fn failing(self, code: i32) -> Self {
        *self.fail_with.borrow_mut() = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> ArctreeResult<()> {
        self.calls.borrow_mut().push(call);
        if let Some(code) = *self.fail_with.borrow() {
            return Err(ArctreeError::ArchiverFailed {
                program: "fake7z".to_string(),
                code,
                stderr: "boom".to_string(),
            });
        }
        if let Some(next) = self.after_mutation.borrow_mut().take() {
            *self.listing.borrow_mut() = next;
        }
        Ok(())
    }
}

fn to_owned(entries: &[(&str, bool)]) -> Vec<(String, bool)> {
    entries.iter().map(|(p, d)| (p.to_string(), *d)).collect()
}

impl Archiver for FakeArchiver {
    fn program(&self) -> &str {
        "fake7z"
    }

    fn list(&self, archive: &Path, items: &[String]) -> ArctreeResult<String> {
        self.calls
            .borrow_mut()
            .push(format!("l {} {}", archive.display(), items.join(" ")).trim_end().to_string());

        let mut text = format!("Path = {}\nType = 7z\n\n----------\n", archive.display());
        for (path, is_dir) in self.listing.borrow().iter() {
            if !items.is_empty() && !items.contains(path) {
                continue;
            }
            let folder = if *is_dir { "+" } else { "-" };
            text.push_str(&format!("Path = {}\nFolder = {}\nSize = 0\n\n", path, folder));
        }
        Ok(text)
    }

    fn add(&self, archive: &Path, sources: &[PathBuf], cwd: Option<&Path>) -> ArctreeResult<()> {
        let sources: Vec<String> = sources.iter().map(|s| s.display().to_string()).collect();
        let cwd = cwd.map(|c| format!(" (in {})", c.display())).unwrap_or_default();
        self.record(format!("a {} {}{}", archive.display(), sources.join(" "), cwd))
    }

    fn delete(&self, archive: &Path, items: &[String]) -> ArctreeResult<()> {
        self.record(format!("d {} {}", archive.display(), items.join(" ")))
    }

    fn rename(&self, archive: &Path, pairs: &[(String, String)]) -> ArctreeResult<()> {
        let flat: Vec<String> = pairs.iter().map(|(a, b)| format!("{} {}", a, b)).collect();
        self.record(format!("rn {} {}", archive.display(), flat.join(" ")))
    }

    fn extract(&self, archive: &Path, items: &[String], out_dir: &Path) -> ArctreeResult<()> {
        self.record(
            format!("x {} {} -o{}", archive.display(), items.join(" "), out_dir.display())
                .replace("  ", " "),
        )
    }
}
