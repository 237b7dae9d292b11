//! Command-line argument types for the `slink` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the symlink manager.
#[derive(Parser, Debug)]
#[command(
    name = "slink",
    about = "Glob-driven symlink manager: mirror, remove, and persist symlinks",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create symlinks mirroring matched source files into the target tree
    Create(CreateOpts),
    /// Remove matched symlinks from the target tree
    Remove(RemoveOpts),
    /// Replace matched symlinks with real copies of their content
    Persist(PersistOpts),
}

/// Options for the `create` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CreateOpts {
    /// Source directory path
    #[arg(short, long, required_unless_present = "config")]
    pub source: Option<PathBuf>,

    /// Target directory path
    #[arg(short, long, required_unless_present = "config")]
    pub target: Option<PathBuf>,

    /// Glob patterns evaluated against the source directory
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub globs: Vec<String>,

    /// Replace existing regular files at the target (symlinks are always replaced)
    #[arg(short = 'o', long)]
    pub override_files: bool,

    /// Load entries from a TOML entry file instead of flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["source", "target", "globs", "override_files"]
    )]
    pub config: Option<PathBuf>,
}

/// Options for the `remove` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RemoveOpts {
    /// Target directory path
    #[arg(short, long, required_unless_present = "config")]
    pub target: Option<PathBuf>,

    /// Glob patterns evaluated against the target directory
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub globs: Vec<String>,

    /// Remove directories left empty by symlink removal
    #[arg(short = 'r', long)]
    pub remove_empty_dirs: bool,

    /// Load entries from a TOML entry file instead of flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["target", "globs", "remove_empty_dirs"]
    )]
    pub config: Option<PathBuf>,
}

/// Options for the `persist` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct PersistOpts {
    /// Target directory path
    #[arg(short, long, required_unless_present = "config")]
    pub target: Option<PathBuf>,

    /// Glob patterns evaluated against the target directory
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub globs: Vec<String>,

    /// Load entries from a TOML entry file instead of flags
    #[arg(short, long, conflicts_with_all = ["target", "globs"])]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_full() {
        let cli = Cli::parse_from([
            "slink", "create", "-s", "src", "-t", "dst", "-g", "**/*", "*.conf", "-o",
        ]);
        let Command::Create(opts) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(opts.source, Some(PathBuf::from("src")));
        assert_eq!(opts.target, Some(PathBuf::from("dst")));
        assert_eq!(opts.globs, vec!["**/*", "*.conf"]);
        assert!(opts.override_files);
    }

    #[test]
    fn parse_create_long_flags() {
        let cli = Cli::parse_from([
            "slink",
            "create",
            "--source",
            "src",
            "--target",
            "dst",
            "--globs",
            "*",
            "--override-files",
        ]);
        let Command::Create(opts) = cli.command else {
            panic!("expected create");
        };
        assert!(opts.override_files);
    }

    #[test]
    fn create_requires_source_without_config() {
        let result = Cli::try_parse_from(["slink", "create", "-t", "dst", "-g", "*"]);
        assert!(result.is_err());
    }

    #[test]
    fn create_with_config_needs_no_other_flags() {
        let cli = Cli::parse_from(["slink", "create", "-c", "entries.toml"]);
        let Command::Create(opts) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(opts.config, Some(PathBuf::from("entries.toml")));
    }

    #[test]
    fn config_conflicts_with_flags() {
        let result =
            Cli::try_parse_from(["slink", "create", "-c", "entries.toml", "-t", "dst"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_remove_with_prune() {
        let cli = Cli::parse_from(["slink", "remove", "-t", "dst", "-g", "**/*", "-r"]);
        let Command::Remove(opts) = cli.command else {
            panic!("expected remove");
        };
        assert!(opts.remove_empty_dirs);
        assert_eq!(opts.target, Some(PathBuf::from("dst")));
    }

    #[test]
    fn remove_prune_defaults_off() {
        let cli = Cli::parse_from(["slink", "remove", "-t", "dst", "-g", "*"]);
        let Command::Remove(opts) = cli.command else {
            panic!("expected remove");
        };
        assert!(!opts.remove_empty_dirs);
    }

    #[test]
    fn parse_persist() {
        let cli = Cli::parse_from(["slink", "persist", "-t", "dst", "-g", "**/*"]);
        assert!(matches!(cli.command, Command::Persist(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["slink", "-v", "persist", "-t", "dst", "-g", "*"]);
        assert!(cli.verbose);
    }

    #[test]
    fn globs_are_required_without_config() {
        let result = Cli::try_parse_from(["slink", "persist", "-t", "dst"]);
        assert!(result.is_err());
    }
}
