//! Core symlink operations: create, remove, persist.
//!
//! Each entry point processes its entries independently and sequentially;
//! within an entry, matched paths are handled one filesystem mutation at a
//! time. The first per-path error aborts the remaining work in that entry
//! and propagates — skips mandated by the conflict policy are not errors.
//!
//! These functions stay silent on the console: outcomes are communicated
//! via the return value, with per-path detail emitted as [`tracing`] debug
//! events for whatever subscriber the caller installed.

mod create;
mod persist;
mod remove;

use crate::config::Entry;
use crate::error::SlinkError;
use crate::matcher::MatchOptions;

/// Create symlinks mirroring each entry's matched source files into its
/// target tree.
///
/// Conflict policy at each target path: nothing there → link; an existing
/// symlink → always replaced; an existing real file or directory → replaced
/// only when the entry sets `override_files`, otherwise skipped silently.
///
/// # Errors
///
/// Returns an error if an entry has no source directory, matching fails, or
/// a filesystem mutation fails.
pub fn create_symlinks(entries: &[Entry]) -> Result<(), SlinkError> {
    create_symlinks_with(entries, &MatchOptions::for_creation())
}

/// [`create_symlinks`] with caller-supplied matcher options, forwarded
/// verbatim.
///
/// # Errors
///
/// See [`create_symlinks`].
pub fn create_symlinks_with(entries: &[Entry], options: &MatchOptions) -> Result<(), SlinkError> {
    for entry in entries {
        create::run(entry, options)?;
    }
    Ok(())
}

/// Remove matched symlinks under each entry's target tree.
///
/// Matched paths that are not symlinks are left untouched. When an entry
/// sets `remove_empty_dirs`, ancestor directories emptied by a removal are
/// pruned upward.
///
/// # Errors
///
/// Returns an error if matching fails or a filesystem mutation fails.
pub fn remove_symlinks(entries: &[Entry]) -> Result<(), SlinkError> {
    remove_symlinks_with(entries, &MatchOptions::for_removal())
}

/// [`remove_symlinks`] with caller-supplied matcher options, forwarded
/// verbatim.
///
/// # Errors
///
/// See [`remove_symlinks`].
pub fn remove_symlinks_with(entries: &[Entry], options: &MatchOptions) -> Result<(), SlinkError> {
    for entry in entries {
        remove::run(entry, options)?;
    }
    Ok(())
}

/// Replace matched symlinks under each entry's target tree with real copies
/// of the content they resolve to.
///
/// Matched paths that are not symlinks are skipped. A dangling symlink is a
/// per-path error.
///
/// # Errors
///
/// Returns an error if matching fails, a symlink cannot be resolved, or a
/// filesystem mutation fails.
pub fn persist_symlinks(entries: &[Entry]) -> Result<(), SlinkError> {
    persist_symlinks_with(entries, &MatchOptions::for_removal())
}

/// [`persist_symlinks`] with caller-supplied matcher options, forwarded
/// verbatim.
///
/// # Errors
///
/// See [`persist_symlinks`].
pub fn persist_symlinks_with(entries: &[Entry], options: &MatchOptions) -> Result<(), SlinkError> {
    for entry in entries {
        persist::run(entry, options)?;
    }
    Ok(())
}
