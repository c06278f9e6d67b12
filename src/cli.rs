use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sceneplay")]
#[command(author, version, about = "Play multi-scene generated videos as one timeline")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a project snapshot in the terminal
    Play {
        /// Project snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Live updates to replay while playing (JSON lines)
        #[arg(short, long)]
        updates: Option<PathBuf>,

        /// Milliseconds between replayed updates (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Print the timeline of a project snapshot
    Inspect {
        /// Project snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Apply these live updates before building the timeline (JSON lines)
        #[arg(short, long)]
        updates: Option<PathBuf>,

        /// Resolve a global time in seconds to a scene and local offset
        #[arg(long)]
        at: Option<f64>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
