mod cli;
mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigCommands};

use sceneplay::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // The player owns the terminal, so its logs go to a file
    let to_file = matches!(cli.command, Commands::Play { .. });
    logging::init(cli.verbose, &config.logging, to_file)?;

    match cli.command {
        Commands::Play {
            snapshot,
            updates,
            interval_ms,
        } => commands::play::handle_play(&snapshot, updates.as_deref(), interval_ms, &config),
        Commands::Inspect {
            snapshot,
            updates,
            at,
        } => commands::inspect::handle_inspect(&snapshot, updates.as_deref(), at, &config),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sceneplay", &mut io::stdout());
            Ok(())
        }
    }
}
