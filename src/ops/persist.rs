//! Link persistence: replace symlinks with real copies of their content.

use std::path::Path;

use crate::config::Entry;
use crate::error::{IoError, SlinkError};
use crate::fs_util;
use crate::matcher::{self, MatchOptions};

/// Process one persistence entry.
///
/// Each matched symlink is resolved through all indirections and replaced
/// with a real copy of the content it points at. Content is staged to a
/// sibling temp path and renamed into place, keeping the window where the
/// target is absent as small as possible. Non-symlinks are skipped; a
/// dangling symlink is an error.
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

        let real = dunce::canonicalize(&full)
            .map_err(|source| IoError::new("resolve symlink", &full, source))?;

        if real.is_dir() {
            persist_dir(&real, &full)?;
        } else {
            persist_file(&real, &full)?;
        }
        tracing::debug!("persisted {} (was -> {})", full.display(), real.display());
    }
    Ok(())
}

/// Copy a regular file: stage to a temp sibling, remove the symlink, rename
/// the temp file into place.
fn persist_file(real: &Path, link: &Path) -> Result<(), IoError> {
    // Sibling temp name keeps the final rename on the same filesystem. The
    // suffix is appended, not swapped for the extension, so staging `f.txt`
    // cannot collide with a real `f.<anything>` next to it.
    let tmp = staging_path(link);
    std::fs::copy(real, &tmp).map_err(|source| IoError::new("copy file", real, source))?;

    let cleanup = || {
        let _ = std::fs::remove_file(&tmp);
    };

    if let Err(e) = fs_util::remove_symlink(link) {
        cleanup();
        return Err(e);
    }
    if let Err(source) = std::fs::rename(&tmp, link) {
        cleanup();
        return Err(IoError::new("rename into place", link, source));
    }
    Ok(())
}

/// Copy a directory: stage into a sibling temp directory, remove the
/// symlink, rename the temp directory into place.
fn persist_dir(real: &Path, link: &Path) -> Result<(), IoError> {
    let tmp = staging_path(link);

    let cleanup = || {
        let _ = std::fs::remove_dir_all(&tmp);
    };

    if let Err(e) = fs_util::copy_dir_recursive(real, &tmp) {
        cleanup();
        return Err(e);
    }
    if let Err(e) = fs_util::remove_symlink(link) {
        cleanup();
        return Err(e);
    }
    if let Err(source) = std::fs::rename(&tmp, link) {
        cleanup();
        return Err(IoError::new("rename into place", link, source));
    }
    Ok(())
}

/// Sibling path used to stage content: the link's full name plus a
/// `.slink_tmp` suffix.
fn staging_path(link: &Path) -> std::path::PathBuf {
    let stem = link.file_name().map_or_else(
        || "slink_tmp".to_string(),
        |n| format!("{}.slink_tmp", n.to_string_lossy()),
    );
    link.parent().unwrap_or_else(|| Path::new(".")).join(stem)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(target: &Path, globs: &[&str]) -> Entry {
        Entry {
            source: None,
            target: target.to_path_buf(),
            globs: globs.iter().map(ToString::to_string).collect(),
            override_files: false,
            remove_empty_dirs: false,
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlink_becomes_regular_file_with_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        let real = dir.path().join("real.txt");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(&real, b"hello bytes").unwrap();
        std::os::unix::fs::symlink(&real, target.join("f.txt")).unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        let meta = target.join("f.txt").symlink_metadata().unwrap();
        assert!(!meta.is_symlink());
        assert!(meta.is_file());
        assert_eq!(std::fs::read(target.join("f.txt")).unwrap(), b"hello bytes");
    }

    #[cfg(unix)]
    #[test]
    fn follows_chained_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        let real = dir.path().join("real.txt");
        let hop = dir.path().join("hop.txt");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(&real, b"end of chain").unwrap();
        std::os::unix::fs::symlink(&real, &hop).unwrap();
        std::os::unix::fs::symlink(&hop, target.join("f.txt")).unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        assert_eq!(
            std::fs::read(target.join("f.txt")).unwrap(),
            b"end of chain"
        );
    }

    #[cfg(unix)]
    #[test]
    fn regular_file_is_skipped_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("plain.txt"), "untouched").unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        assert_eq!(
            std::fs::read_to_string(target.join("plain.txt")).unwrap(),
            "untouched"
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        std::fs::create_dir_all(&target).unwrap();
        std::os::unix::fs::symlink(dir.path().join("nope"), target.join("broken")).unwrap();

        let err = run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap_err();
        assert!(matches!(err, SlinkError::Io(_)));
        // The broken link is still there; nothing was destroyed.
        assert!(target.join("broken").symlink_metadata().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_materialised() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        let real = dir.path().join("real-dir");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::create_dir_all(real.join("sub")).unwrap();
        std::fs::write(real.join("a.txt"), b"aaa").unwrap();
        std::fs::write(real.join("sub/b.txt"), b"bbb").unwrap();
        std::os::unix::fs::symlink(&real, target.join("linked")).unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        let meta = target.join("linked").symlink_metadata().unwrap();
        assert!(!meta.is_symlink());
        assert!(meta.is_dir());
        assert_eq!(std::fs::read(target.join("linked/a.txt")).unwrap(), b"aaa");
        assert_eq!(std::fs::read(target.join("linked/sub/b.txt")).unwrap(), b"bbb");
    }

    #[cfg(unix)]
    #[test]
    fn staging_does_not_clobber_file_sharing_the_stem() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        let real = dir.path().join("real.txt");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(&real, "linked").unwrap();
        std::os::unix::fs::symlink(&real, target.join("f.txt")).unwrap();
        // A real user file whose name is the link's stem plus the staging
        // suffix must survive persistence of f.txt.
        std::fs::write(target.join("f.slink_tmp"), "bystander").unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        assert_eq!(
            std::fs::read_to_string(target.join("f.slink_tmp")).unwrap(),
            "bystander"
        );
        assert_eq!(std::fs::read(target.join("f.txt")).unwrap(), b"linked");
    }

    #[cfg(unix)]
    #[test]
    fn no_leftover_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dst");
        let real = dir.path().join("real.txt");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(&real, "x").unwrap();
        std::os::unix::fs::symlink(&real, target.join("f.txt")).unwrap();

        run(&entry(&target, &["*"]), &MatchOptions::for_removal()).unwrap();

        let names: Vec<String> = std::fs::read_dir(&target)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["f.txt".to_string()]);
    }
}
