//! Glob matching against a base directory.
//!
//! Resolves an ordered list of glob patterns into a deterministic
//! (lexically sorted, deduplicated) list of paths relative to a base
//! directory. The walk never follows symlinks, so a symlink pointing at a
//! directory surfaces as a single candidate entry — which is exactly what
//! removal and persistence need in order to discover it.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::MatchError;

/// Options forwarded to the matcher.
///
/// Each core operation starts from a suitable default ([`for_creation`] or
/// [`for_removal`]); the `_with` entry points forward a caller-supplied value
/// verbatim instead.
///
/// [`for_creation`]: MatchOptions::for_creation
/// [`for_removal`]: MatchOptions::for_removal
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// When `true`, only files (and symlinks resolving to files) are
    /// candidates. When `false`, directories — including symlinked
    /// directories — match as well.
    pub only_files: bool,
    /// Match patterns case-insensitively.
    pub case_insensitive: bool,
    /// Let wildcards match hidden entries (path components starting with
    /// `.`). When `false`, a hidden entry only matches a pattern that
    /// literally names a dot component, so `**/*` leaves dotfiles alone
    /// while `.bashrc` or `.config/**` still reach them.
    pub match_hidden: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            only_files: true,
            case_insensitive: false,
            match_hidden: false,
        }
    }
}

impl MatchOptions {
    /// Defaults for link creation: files only.
    #[must_use]
    pub fn for_creation() -> Self {
        Self::default()
    }

    /// Defaults for removal and persistence: directories are candidates too,
    /// so symlinked directories can be discovered.
    #[must_use]
    pub fn for_removal() -> Self {
        Self {
            only_files: false,
            ..Self::default()
        }
    }
}

/// Resolve `globs` against `base` into a sorted, deduplicated list of
/// relative paths.
///
/// An empty result is not an error. Patterns use `globset` syntax with a
/// literal path separator, so `*` stays within one directory level and
/// `**/*` recurses. Unless [`MatchOptions::match_hidden`] is set, hidden
/// entries are only reachable through patterns that literally name a dot
/// component.
///
/// # Errors
///
/// Returns a [`MatchError`] if `base` is not an existing directory, a
/// pattern fails to compile, or the directory walk fails.
pub fn matched_paths(
    base: &Path,
    globs: &[String],
    options: &MatchOptions,
) -> Result<Vec<PathBuf>, MatchError> {
    if !base.is_dir() {
        return Err(MatchError::BaseDirMissing(base.to_path_buf()));
    }
    let set = build_glob_set(globs, options)?;
    // With hidden matching off, paths containing a dot component must be
    // claimed by a pattern that literally names one.
    let dot_set = if options.match_hidden {
        None
    } else {
        let dot_globs: Vec<String> = globs
            .iter()
            .filter(|p| has_dot_component(p))
            .cloned()
            .collect();
        Some(build_glob_set(&dot_globs, options)?)
    };

    let mut matched = Vec::new();
    for entry in WalkDir::new(base).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|source| MatchError::Walk {
            base: base.to_path_buf(),
            source,
        })?;
        let Ok(rel) = entry.path().strip_prefix(base) else {
            continue;
        };
        if !set.is_match(rel) {
            continue;
        }
        if let Some(dot_set) = &dot_set
            && has_hidden_component(rel)
            && !dot_set.is_match(rel)
        {
            continue;
        }
        if options.only_files && !is_file_like(&entry) {
            continue;
        }
        matched.push(rel.to_path_buf());
    }

    matched.sort();
    matched.dedup();
    Ok(matched)
}

/// Compile the pattern list into a single [`GlobSet`].
fn build_glob_set(globs: &[String], options: &MatchOptions) -> Result<GlobSet, MatchError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in globs {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|source| MatchError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| MatchError::InvalidPattern {
        pattern: globs.join(", "),
        source,
    })
}

/// Whether a pattern has a segment that literally starts with a dot, such
/// as `.bashrc`, `.config/**`, or `**/.git`.
fn has_dot_component(pattern: &str) -> bool {
    pattern.split('/').any(|segment| segment.starts_with('.'))
}

/// Whether a relative path has a component starting with a dot.
fn has_hidden_component(rel: &Path) -> bool {
    rel.components().any(|c| {
        matches!(c, std::path::Component::Normal(name)
            if name.to_string_lossy().starts_with('.'))
    })
}

/// A plain file, or a symlink whose resolved target is a file.
fn is_file_like(entry: &walkdir::DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() {
        return true;
    }
    ft.is_symlink() && entry.path().metadata().is_ok_and(|m| m.is_file())
}
