// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed source/target pair and small
// assertion helpers so each integration test can set up an isolated
// environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use slink::Entry;

/// An isolated source/target directory pair backed by a
/// [`tempfile::TempDir`], deleted automatically on drop.
pub struct LinkFixture {
    /// Temporary directory containing `src/` and `dst/`.
    pub root: tempfile::TempDir,
}

impl LinkFixture {
    /// Create a fixture with empty `src/` and `dst/` directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("src")).expect("create src");
        std::fs::create_dir_all(root.path().join("dst")).expect("create dst");
        Self { root }
    }

    /// Path to the source directory.
    pub fn source(&self) -> PathBuf {
        self.root.path().join("src")
    }

    /// Path to the target directory.
    pub fn target(&self) -> PathBuf {
        self.root.path().join("dst")
    }

    /// Write `content` to `src/<rel>`, creating parent directories.
    pub fn write_source(&self, rel: &str, content: &str) -> &Self {
        let path = self.source().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source parent");
        }
        std::fs::write(&path, content).expect("write source file");
        self
    }

    /// Write `content` to `dst/<rel>`, creating parent directories.
    pub fn write_target(&self, rel: &str, content: &str) -> &Self {
        let path = self.target().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create target parent");
        }
        std::fs::write(&path, content).expect("write target file");
        self
    }

    /// Build a creation entry for this fixture.
    pub fn create_entry(&self, globs: &[&str]) -> Entry {
        Entry {
            source: Some(self.source()),
            target: self.target(),
            globs: globs.iter().map(ToString::to_string).collect(),
            override_files: false,
            remove_empty_dirs: false,
        }
    }

    /// Build a removal/persistence entry for this fixture.
    pub fn target_entry(&self, globs: &[&str]) -> Entry {
        Entry {
            source: None,
            target: self.target(),
            globs: globs.iter().map(ToString::to_string).collect(),
            override_files: false,
            remove_empty_dirs: false,
        }
    }
}

/// Assert that `path` is a symlink (without following it).
pub fn assert_symlink(path: &Path) {
    let meta = path
        .symlink_metadata()
        .unwrap_or_else(|_| panic!("{} does not exist", path.display()));
    assert!(meta.is_symlink(), "{} is not a symlink", path.display());
}

/// Assert that `path` is a regular file (not a symlink) with exactly
/// `content` as its bytes.
pub fn assert_regular_file_with(path: &Path, content: &str) {
    let meta = path
        .symlink_metadata()
        .unwrap_or_else(|_| panic!("{} does not exist", path.display()));
    assert!(!meta.is_symlink(), "{} is still a symlink", path.display());
    assert!(meta.is_file(), "{} is not a regular file", path.display());
    assert_eq!(
        std::fs::read_to_string(path).expect("read file"),
        content,
        "unexpected content in {}",
        path.display()
    );
}

/// Assert that nothing exists at `path`, not even a broken symlink.
pub fn assert_absent(path: &Path) {
    assert!(
        path.symlink_metadata().is_err(),
        "{} should not exist",
        path.display()
    );
}
