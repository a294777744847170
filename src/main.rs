// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! hostkeep - home server maintenance utilities
//!
//! Entry point for the hostkeep CLI application.

use clap::Parser;

use hostkeep::cli::{Cli, Commands};
use hostkeep::commands;
use hostkeep::config::Settings;
use hostkeep::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on this crate's debug output. `RUST_LOG` still applies to everything else.
    if cli.verbose > 0 {
        if let Ok(parsed) = "hostkeep=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    // `settings` stays usable on a bad file so it can be shown or reset.
    if !matches!(cli.command, Commands::Settings(_)) {
        settings.validate()?;
    }

    if cli.verbose > 1 {
        eprintln!("[verbose:2] Settings: {:?}", settings);
    }

    // Dispatch to appropriate command
    match &cli.command {
        Commands::Plot(args) => commands::plot::execute(args, &settings, &cli.format)?,
        Commands::Summary(args) => commands::summary::execute(args, &settings, &cli.format)?,
        Commands::Backup(args) => {
            commands::backup::execute(args, &settings, &cli.format, cli.verbose)?
        }
        Commands::Links(args) => commands::links::execute(args, &cli.format)?,
        Commands::Settings(args) => {
            commands::settings::execute(args, &settings, cli.config.as_deref())?
        }
    }

    Ok(())
}
