//! Configuration management for sceneplay
//!
//! Settings live in `~/.config/sceneplay/config.toml`. Every field has a
//! default, so a missing file or a partial file is always valid input.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub media: MediaConfig,
    pub live: LiveConfig,
    pub logging: LoggingConfig,
}

/// Timeline and transport tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Provisional duration for scenes without a declared one (seconds)
    pub fallback_duration: f64,
    /// Forward nudge past a segment boundary on end-of-segment (seconds)
    pub end_nudge: f64,
    /// Minimum playhead change committed from media time updates (seconds)
    pub time_update_hysteresis: f64,
    /// Drift between resolved and reported local time that forces a seek (seconds)
    pub resync_threshold: f64,
    /// Transport skip step (seconds)
    pub skip_step: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fallback_duration: 10.0,
            end_nudge: 0.1,
            time_update_hysteresis: 0.1,
            resync_threshold: 0.5,
            skip_step: 5.0,
        }
    }
}

/// Media source resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Prefix for relative source references (e.g. `/videos/x.mp4`)
    pub base_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl MediaConfig {
    /// Resolve a source reference against `base_url`.
    ///
    /// Absolute URLs and empty bases are passed through unchanged.
    pub fn resolve(&self, source: &str) -> String {
        if source.contains("://") || self.base_url.is_empty() {
            return source.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if source.starts_with('/') {
            format!("{}{}", base, source)
        } else {
            format!("{}/{}", base, source)
        }
    }
}

/// Live update feed settings for the terminal player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    /// Delay between replayed update lines (milliseconds)
    pub update_interval_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1500,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
    /// Log file used while the terminal player owns the screen
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("sceneplay").join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load a specific config file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would break timeline invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        require_positive("player.fallback_duration", p.fallback_duration)?;
        require_positive("player.end_nudge", p.end_nudge)?;
        require_positive("player.skip_step", p.skip_step)?;
        require_non_negative("player.time_update_hysteresis", p.time_update_hysteresis)?;
        require_non_negative("player.resync_threshold", p.resync_threshold)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be greater than zero, got {}", value),
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {}", value),
        })
    }
}
