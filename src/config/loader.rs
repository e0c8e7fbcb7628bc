//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArctreeError, ArctreeResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// The whole file was skipped and defaults are in use
    Ignored { file: PathBuf, reason: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Ignored { file, reason } => write!(
                f,
                "ignoring {} and using defaults: {}",
                file.display(),
                reason
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArctreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArctreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config_dir>/arctree/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arctree").join("config.toml"))
}

/// Load from the user config or defaults, then apply env overrides
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    let (config, warnings) = load_file_or_default(user_config_path().as_deref());
    (with_env_overrides(config), warnings)
}

/// A missing file means defaults; one that cannot be read or parsed also
/// means defaults, reported as [`ConfigWarning::Ignored`]
pub(super) fn load_file_or_default(path: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let Some(path) = path.filter(|p| p.exists()) else {
        return (Config::default(), Vec::new());
    };

    match load_with_warnings(path) {
        Ok(loaded) => {
            log::info!("loaded config from {}", path.display());
            loaded
        }
        Err(err) => {
            log::warn!("ignoring config: {}", err);
            let warning = ConfigWarning::Ignored {
                file: path.to_path_buf(),
                reason: err.to_string(),
            };
            (Config::default(), vec![warning])
        }
    }
}

/// Apply environment variable overrides (ARCTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ARCTREE_PAGE_SIZE
    if let Some(size) = get_env("ARCTREE_PAGE_SIZE") {
        match size.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.browser.page_size = size,
            _ => log::warn!("ignoring ARCTREE_PAGE_SIZE={:?}", size),
        }
    }

    // ARCTREE_RECURSIVE_SEARCH
    if let Some(val) = get_env("ARCTREE_RECURSIVE_SEARCH") {
        config.browser.recursive_search = val.to_lowercase() != "false" && val != "0";
    }

    // ARCTREE_SEVEN_ZIP
    if let Some(program) = get_env("ARCTREE_SEVEN_ZIP") {
        if !program.trim().is_empty() {
            config.archiver.program = program;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "browser",
        "page_size",
        "recursive_search",
        "loop",
        "create",
        "skip_to_new_archive",
        "back_to_menu",
        "archiver",
        "program",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
