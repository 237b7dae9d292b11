//! Domain-specific error types for the symlink engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! The core operations return typed errors ([`MatchError`], [`ConfigError`],
//! [`IoError`], aggregated as [`SlinkError`]) while command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via the standard `?`
//! operator.
//!
//! # Error hierarchy
//!
//! ```text
//! SlinkError
//! ├── Match(MatchError)   — missing base directory, bad glob, walk failure
//! ├── Config(ConfigError) — missing required field, entry file problems
//! └── Io(IoError)         — filesystem mutation or resolution failure
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for the symlink engine.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum SlinkError {
    /// Glob matching failed (invalid base directory or pattern).
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    /// Configuration entry is invalid or an entry file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

/// Errors that arise while resolving glob patterns against a base directory.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The base directory the patterns are evaluated against does not exist.
    #[error("base directory does not exist: {}", .0.display())]
    BaseDirMissing(PathBuf),

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// Underlying compilation error.
        source: globset::Error,
    },

    /// Walking the base directory failed (permissions, vanished entries).
    #[error("walking {}: {source}", base.display())]
    Walk {
        /// The base directory being walked.
        base: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

/// Errors that arise from configuration entries and entry files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A creation entry has no source directory.
    #[error("entry for target '{}' has no source directory (required for create)", target.display())]
    MissingSource {
        /// Target directory of the incomplete entry.
        target: PathBuf,
    },

    /// An entry file could not be read.
    #[error("reading entry file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An entry file contains a TOML syntax or shape error.
    #[error("invalid entry file {}: {source}", path.display())]
    InvalidSyntax {
        /// Path to the malformed file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}

/// A filesystem operation failure, tagged with the action attempted and the
/// path it was attempted on.
#[derive(Error, Debug)]
#[error("{action} {}: {source}", path.display())]
pub struct IoError {
    /// Short description of the attempted action, e.g. `"create symlink"`.
    pub action: &'static str,
    /// Path the action was attempted on.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

impl IoError {
    /// Tag an [`std::io::Error`] with the action and path it arose from.
    pub fn new(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
