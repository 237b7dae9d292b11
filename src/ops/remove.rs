//! Symlink removal with optional upward pruning of emptied directories.

use crate::config::Entry;
use crate::error::SlinkError;
use crate::fs_util;
use crate::matcher::{self, MatchOptions};

/// Process one removal entry.
///
/// Only symlinks are removed; regular files and directories matched by the
/// globs are left alone. A matched path that vanished between matching and
/// removal (e.g. swallowed by pruning triggered for an earlier path) is
/// skipped.
pub(super) fn run(entry: &Entry, options: &MatchOptions) -> Result<(), SlinkError> {
    let matched = matcher::matched_paths(&entry.target, &entry.globs, options)?;

    for rel in matched {
        let full = entry.target.join(&rel);
        let Ok(meta) = std::fs::symlink_metadata(&full) else {
            continue;
        };
        if !meta.is_symlink() {
            continue;
        }

        fs_util::remove_symlink(&full)?;
        tracing::debug!("removed {}", full.display());

        if entry.remove_empty_dirs
            && let Some(parent) = full.parent()
        {
            fs_util::prune_empty_dirs(parent)?;
        }
    }
    Ok(())
}
