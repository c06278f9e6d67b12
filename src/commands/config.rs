//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use sceneplay::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file location and whether it exists.
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    let note = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", path.display(), note);
    Ok(())
}
