use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::{GestureConfig, PlaybackConfig};

/// Settings of the simulated player used by the terminal front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Delay between a load and the player's ready report
    pub ready_latency_ms: u64,
    /// Refuse the first `play` request, as a browser does before any user
    /// activation
    pub block_autoplay: bool,
    /// Fixed length for every track instead of a per-media pseudo length
    pub track_length_secs: Option<u64>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            ready_latency_ms: 300,
            block_autoplay: false,
            track_length_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// JSON track list; the built-in demo list is used when unset
    pub tracks_path: Option<PathBuf>,
}

pub const DEFAULT_LOG_FILTER: &str = "clickwheel_rs=debug,clickwheel=debug,warn";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Directory of the daily log files, relative to the working directory
    pub dir: PathBuf,
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".logs"),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub gesture: GestureConfig,
    pub playback: PlaybackConfig,
    pub player: PlayerSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

impl Settings {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..180).contains(&self.gesture.angle_threshold_deg) {
            return Err(ConfigError::Invalid(format!(
                "gesture.angle_threshold_deg must be within 1..180, got {}",
                self.gesture.angle_threshold_deg
            )));
        }
        if !self.gesture.pan_threshold_px.is_finite() || self.gesture.pan_threshold_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.pan_threshold_px must be positive, got {}",
                self.gesture.pan_threshold_px
            )));
        }
        if self.playback.sample_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback.sample_interval_ms must be positive".to_string(),
            ));
        }
        Ok(self)
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "clickwheel", "clickwheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Layers the optional config file and `CLICKWHEEL__*` environment variables
/// over the defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    let config_path = get_config_path()?;
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path).required(false));
    from_builder(builder)
}

fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let s = builder
        .add_source(
            config::Environment::with_prefix("CLICKWHEEL")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let settings: Settings = s.try_deserialize()?;
    settings.validate()
}
