//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise `--verbose` or the configured level
//! decides. While the terminal player owns the screen, log output goes to
//! a file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Build the filter directive string.
pub fn filter_directive(verbose: bool, level: &str, env: Option<String>) -> String {
    if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
        return env;
    }
    if verbose {
        "sceneplay=debug".to_string()
    } else {
        format!("sceneplay={}", level)
    }
}

/// Default log file used while the terminal player is running.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("sceneplay").join("sceneplay.log"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global tracing subscriber.
///
/// With `to_file` set, output goes to the configured file (or the default
/// cache location); if no location is available, logging is disabled.
pub fn init(verbose: bool, config: &LoggingConfig, to_file: bool) -> Result<()> {
    let directive = filter_directive(verbose, &config.level, std::env::var("RUST_LOG").ok());
    let builder = tracing_subscriber::fmt().with_env_filter(directive.as_str());

    let installed = if to_file {
        let Some(path) = config.file.clone().or_else(default_log_path) else {
            return Ok(());
        };
        let file = open_log_file(&path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
