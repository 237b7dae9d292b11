//! Glob-driven symlink manager.
//!
//! Manages symbolic links between a source and a target directory tree based
//! on glob patterns: create symlinks mirroring matched source files into the
//! target, remove previously created symlinks (optionally pruning emptied
//! directories), and persist symlinks by replacing them with real copies of
//! the content they resolve to.
//!
//! The public API is organised into thin layers:
//!
//! - **[`matcher`]** — resolve glob patterns into deterministic path lists
//! - **[`fs_util`]** — directory creation, platform symlink primitives, pruning
//! - **[`ops`]** — the three core operations over [`config::Entry`] lists
//! - **[`commands`]** — CLI glue mapping parsed flags onto entries
//!
//! Every operation is derived purely from the filesystem state at invocation
//! time plus the supplied entries; nothing is cached between calls.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_util;
pub mod logging;
pub mod matcher;
pub mod ops;

pub use config::Entry;
pub use error::SlinkError;
pub use matcher::MatchOptions;
pub use ops::{
    create_symlinks, create_symlinks_with, persist_symlinks, persist_symlinks_with,
    remove_symlinks, remove_symlinks_with,
};
