//! Link creation with conflict policy.

use crate::config::Entry;
use crate::error::{IoError, SlinkError};
use crate::fs_util;
use crate::matcher::{self, MatchOptions};

/// Process one creation entry.
pub(super) fn run(entry: &Entry, options: &MatchOptions) -> Result<(), SlinkError> {
    let source_dir = entry.source_dir()?;
    let matched = matcher::matched_paths(source_dir, &entry.globs, options)?;

    // Absolutize once so every link resolves regardless of the process's
    // working directory at the time it is later dereferenced.
    let source_dir = dunce::canonicalize(source_dir)
        .map_err(|source| IoError::new("canonicalize source", source_dir, source))?;

    for rel in matched {
        let source_path = source_dir.join(&rel);
        let target_path = entry.target.join(&rel);

        if let Some(parent) = target_path.parent() {
            fs_util::ensure_dir_exists(parent)?;
        }

        match std::fs::symlink_metadata(&target_path) {
            Ok(meta) => {
                // Existing symlinks are always replaced; real files and
                // directories only when the entry opts in. This keeps
                // re-creation idempotent while protecting persisted files.
                if meta.is_symlink() {
                    fs_util::remove_symlink(&target_path)?;
                } else if entry.override_files {
                    remove_real_entry(&target_path, &meta)?;
                } else {
                    tracing::debug!("kept existing file: {}", target_path.display());
                    continue;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(IoError::new("read metadata", &target_path, source).into());
            }
        }

        fs_util::create_symlink(&source_path, &target_path)?;
        tracing::debug!(
            "linked {} -> {}",
            target_path.display(),
            source_path.display()
        );
    }
    Ok(())
}

/// Remove a real (non-symlink) file or directory so a link can take its
/// place.
fn remove_real_entry(
    path: &std::path::Path,
    meta: &std::fs::Metadata,
) -> Result<(), IoError> {
    if fs_util::is_dir_like(meta) {
        std::fs::remove_dir_all(path)
            .map_err(|source| IoError::new("remove directory", path, source))
    } else {
        std::fs::remove_file(path).map_err(|source| IoError::new("remove file", path, source))
    }
}
