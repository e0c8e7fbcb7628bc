//! PathSeparator value object - the separator used inside archive paths
//!
//! Resolved once at startup (`PathSeparator::native()`) and threaded through
//! every path pattern the parser, builder and prompts construct.

/// Separator between segments of an archive entry path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSeparator(char);

impl PathSeparator {
    /// Forward slash (`/`)
    pub const SLASH: PathSeparator = PathSeparator('/');
    /// Backslash (`\`)
    pub const BACKSLASH: PathSeparator = PathSeparator('\\');

    /// The separator 7z reports on the current platform
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::BACKSLASH
        } else {
            Self::SLASH
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Join a parent path and a child segment; an empty parent yields the child
    pub fn join(&self, parent: &str, child: &str) -> String {
        if parent.is_empty() {
            child.to_string()
        } else {
            format!("{}{}{}", parent, self.0, child)
        }
    }

    /// Last segment of `path`
    pub fn leaf<'a>(&self, path: &'a str) -> &'a str {
        match path.rfind(self.0) {
            Some(idx) => &path[idx + self.0.len_utf8()..],
            None => path,
        }
    }

    /// Everything before the last separator, or `None` at depth 0
    pub fn parent<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.rfind(self.0).map(|idx| &path[..idx])
    }

    /// True when `path` has no separator (direct child of the archive root)
    pub fn is_surface(&self, path: &str) -> bool {
        !path.contains(self.0)
    }

    /// True when `path` ends with this separator (directory identifiers do)
    pub fn is_dir_marker(&self, path: &str) -> bool {
        path.ends_with(self.0)
    }

    /// Remove one trailing separator, if any
    pub fn trim_trailing<'a>(&self, path: &'a str) -> &'a str {
        path.strip_suffix(self.0).unwrap_or(path)
    }

    /// Suffix `path` with the separator, as directory identifiers are
    pub fn dir_identifier(&self, path: &str) -> String {
        format!("{}{}", path, self.0)
    }
}

impl Default for PathSeparator {
    fn default() -> Self {
        Self::native()
    }
}

impl std::fmt::Display for PathSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: PathSeparator = PathSeparator::SLASH;

    #[test]
    fn join_with_empty_parent_is_child() {
        assert_eq!(SEP.join("", "a"), "a");
        assert_eq!(SEP.join("a/b", "c"), "a/b/c");
    }

    #[test]
    fn leaf_and_parent() {
        assert_eq!(SEP.leaf("docs/img/logo.png"), "logo.png");
        assert_eq!(SEP.parent("docs/img/logo.png"), Some("docs/img"));
        assert_eq!(SEP.leaf("top.txt"), "top.txt");
        assert_eq!(SEP.parent("top.txt"), None);
    }

    #[test]
    fn surface_paths() {
        assert!(SEP.is_surface("docs"));
        assert!(!SEP.is_surface("docs/img"));
    }

    #[test]
    fn backslash_separator() {
        let sep = PathSeparator::BACKSLASH;
        assert_eq!(sep.join("docs", "img"), "docs\\img");
        assert_eq!(sep.leaf("docs\\img"), "img");
        assert_eq!(sep.dir_identifier("docs"), "docs\\");
        assert_eq!(sep.trim_trailing("docs\\"), "docs");
    }
}
