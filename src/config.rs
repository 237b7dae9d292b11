//! Configuration entries consumed by the core operations.
//!
//! An [`Entry`] is constructed per invocation — by the CLI layer from flags,
//! or from a TOML entry file via [`load_entries`] — and discarded when the
//! operation completes. No state persists between runs.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// One unit of work: a target tree, the glob patterns selecting paths within
/// it, and the options controlling conflict and cleanup behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    /// Source directory the globs are evaluated against when creating links.
    /// Required for creation, unused for removal and persistence.
    pub source: Option<PathBuf>,
    /// Target directory where links live.
    pub target: PathBuf,
    /// Glob patterns, applied in order.
    pub globs: Vec<String>,
    /// Replace existing regular files/directories at matched target paths.
    /// Existing symlinks are always replaced regardless of this flag.
    #[serde(default)]
    pub override_files: bool,
    /// After removing a symlink, prune ancestor directories that became empty.
    #[serde(default)]
    pub remove_empty_dirs: bool,
}

impl Entry {
    /// Return the source directory, or a [`ConfigError::MissingSource`] when
    /// the entry was built without one.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is `None`.
    pub fn source_dir(&self) -> Result<&Path, ConfigError> {
        self.source
            .as_deref()
            .ok_or_else(|| ConfigError::MissingSource {
                target: self.target.clone(),
            })
    }
}

/// TOML document holding a list of entries:
///
/// ```toml
/// [[entry]]
/// source = "dotfiles/shell"
/// target = "/home/user"
/// globs = ["**/*"]
/// override_files = true
/// ```
#[derive(Debug, Deserialize)]
struct EntryFile {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// Load a list of entries from a TOML entry file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML of the
/// expected shape.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: EntryFile = toml::from_str(&text).map_err(|source| ConfigError::InvalidSyntax {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.entries)
}
