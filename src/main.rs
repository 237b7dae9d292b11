//! Command line entry point for the `slink` symlink manager.

use anyhow::Result;
use clap::Parser;

use slink::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    let result = match &args.command {
        cli::Command::Create(opts) => commands::create(opts),
        cli::Command::Remove(opts) => commands::remove(opts),
        cli::Command::Persist(opts) => commands::persist(opts),
    };

    if let Err(ref e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
    result
}
