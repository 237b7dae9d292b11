//! Filesystem helpers shared by the link operations.

use std::path::Path;

use crate::error::IoError;

/// Ensure `dir` exists, creating it and any missing ancestors.
///
/// Idempotent: calling on an existing directory is a no-op success.
///
/// # Errors
///
/// Returns an error on permission or filesystem failures (not on
/// "already exists").
pub fn ensure_dir_exists(dir: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(dir).map_err(|source| IoError::new("create directory", dir, source))
}

/// Create a symlink at `link` pointing to `source` (platform-specific).
///
/// On Windows, file and directory symlinks are distinct; the kind is chosen
/// from what `source` currently is.
///
/// # Errors
///
/// Returns an error if the link cannot be created, e.g. when something
/// already exists at `link`.
pub fn create_symlink(source: &Path, link: &Path) -> Result<(), IoError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(source, link);

    #[cfg(windows)]
    let result = if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, link)
    } else {
        std::os::windows::fs::symlink_file(source, link)
    };

    result.map_err(|source| IoError::new("create symlink", link, source))
}

/// Remove a symlink without following it, handling platform differences.
///
/// On Windows, directory symlinks must be removed with `remove_dir` (not
/// `remove_file`). Rust's `symlink_metadata().is_dir()` returns `false` for
/// symlinks, so the raw `FILE_ATTRIBUTE_DIRECTORY` flag is checked to detect
/// directory symlinks.
///
/// # Errors
///
/// Returns an error if `path` does not exist or cannot be unlinked.
pub fn remove_symlink(path: &Path) -> Result<(), IoError> {
    let meta = std::fs::symlink_metadata(path)
        .map_err(|source| IoError::new("read metadata", path, source))?;
    if is_dir_like(&meta) {
        std::fs::remove_dir(path).map_err(|source| IoError::new("remove link", path, source))
    } else {
        std::fs::remove_file(path).map_err(|source| IoError::new("remove link", path, source))
    }
}

/// Check if metadata represents a directory-like entry.
/// On Windows, `symlink_metadata().is_dir()` returns `false` for directory
/// symlinks, so the raw `FILE_ATTRIBUTE_DIRECTORY` bit is checked instead.
pub(crate) fn is_dir_like(meta: &std::fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}

/// Walk upward from `start`, deleting each directory that is empty.
///
/// The loop is bounded by three stop conditions checked every iteration:
/// the filesystem root is reached (no parent), the directory no longer
/// exists, or the directory is non-empty. A directory that still contains
/// any entry is never deleted, which also halts the climb before it can
/// reach unrelated ancestors.
///
/// # Errors
///
/// Returns an error if reading or removing a directory fails for a reason
/// other than it being absent.
pub fn prune_empty_dirs(start: &Path) -> Result<(), IoError> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.parent().is_none() || !dir.exists() {
            return Ok(());
        }
        let mut reader = std::fs::read_dir(&dir)
            .map_err(|source| IoError::new("read directory", &dir, source))?;
        if reader.next().is_some() {
            return Ok(());
        }
        std::fs::remove_dir(&dir)
            .map_err(|source| IoError::new("remove directory", &dir, source))?;
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Ok(()),
        }
    }
}

/// Recursively copy a directory tree, following symlinks within the source
/// so their content is materialised rather than the link itself.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or read, or a file
/// cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(dst).map_err(|source| IoError::new("create directory", dst, source))?;
    for entry in
        std::fs::read_dir(src).map_err(|source| IoError::new("read directory", src, source))?
    {
        let entry = entry.map_err(|source| IoError::new("read directory", src, source))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)
                .map_err(|source| IoError::new("copy file", &src_path, source))?;
        }
    }
    Ok(())
}
