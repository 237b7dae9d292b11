//! Subcommand glue: map CLI options onto configuration entries and invoke
//! the core operations.
//!
//! All user-visible reporting lives here; the core stays silent and
//! communicates only through return values.

use anyhow::{Context as _, Result};

use crate::cli::{CreateOpts, PersistOpts, RemoveOpts};
use crate::config::{self, Entry};
use crate::ops;

/// Run the `create` command.
///
/// # Errors
///
/// Returns an error if the entry file cannot be loaded or link creation
/// fails.
pub fn create(opts: &CreateOpts) -> Result<()> {
    let entries = match &opts.config {
        Some(path) => config::load_entries(path)?,
        None => vec![Entry {
            source: opts.source.clone(),
            target: opts.target.clone().context("--target is required")?,
            globs: opts.globs.clone(),
            override_files: opts.override_files,
            remove_empty_dirs: false,
        }],
    };
    ops::create_symlinks(&entries)?;
    tracing::info!("create: {} entries processed", entries.len());
    Ok(())
}

/// Run the `remove` command.
///
/// # Errors
///
/// Returns an error if the entry file cannot be loaded or symlink removal
/// fails.
pub fn remove(opts: &RemoveOpts) -> Result<()> {
    let entries = match &opts.config {
        Some(path) => config::load_entries(path)?,
        None => vec![Entry {
            source: None,
            target: opts.target.clone().context("--target is required")?,
            globs: opts.globs.clone(),
            override_files: false,
            remove_empty_dirs: opts.remove_empty_dirs,
        }],
    };
    ops::remove_symlinks(&entries)?;
    tracing::info!("remove: {} entries processed", entries.len());
    Ok(())
}

/// Run the `persist` command.
///
/// # Errors
///
/// Returns an error if the entry file cannot be loaded or persistence fails.
pub fn persist(opts: &PersistOpts) -> Result<()> {
    let entries = match &opts.config {
        Some(path) => config::load_entries(path)?,
        None => vec![Entry {
            source: None,
            target: opts.target.clone().context("--target is required")?,
            globs: opts.globs.clone(),
            override_files: false,
            remove_empty_dirs: false,
        }],
    };
    ops::persist_symlinks(&entries)?;
    tracing::info!("persist: {} entries processed", entries.len());
    Ok(())
}
