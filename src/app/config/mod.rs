use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub mod user;

pub use user::{UserConfig, VisualizerConfig};

use crate::app::cli::Args;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("adb-music");

        // Ensure it exists
        if !xdg_dir.exists() {
            let _ = fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        Self::get_config_dir().join("logs")
    }

    /// Load `config.toml`, writing the defaults there first if it is missing.
    pub fn load() -> UserConfig {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> UserConfig {
        if !path.exists() {
            let c = UserConfig::default();
            if let Ok(content) = toml::to_string_pretty(&c) {
                if let Err(e) = fs::write(path, content) {
                    tracing::warn!(path = %path.display(), "could not write default config: {}", e);
                }
            }
            return c;
        }

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "invalid config, using defaults: {}", e);
                UserConfig::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not read config: {}", e);
                UserConfig::default()
            }
        }
    }

    pub fn default_toml() -> String {
        toml::to_string_pretty(&UserConfig::default()).unwrap_or_default()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bars must be at least 1")]
    NoBars,
    #[error("max height must be at least 1")]
    ZeroMaxHeight,
    #[error("bar width must be at least 1")]
    ZeroBarWidth,
    #[error("frame interval must be at least 1 ms")]
    ZeroInterval,
}

/// Effective settings: command line over `config.toml` over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub adb_path: PathBuf,
    pub startup_delay: Duration,
    pub bars: usize,
    pub max_height: u16,
    pub bar_width: u16,
    pub interval: Duration,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let config = UserConfig::default();
        let vis = &config.visualizer;
        Self {
            adb_path: PathBuf::from("adb"),
            startup_delay: Duration::from_millis(config.startup_delay_ms),
            bars: vis.bars,
            max_height: vis.max_height,
            bar_width: vis.bar_width,
            interval: Duration::from_millis(vis.interval_ms),
            seed: None,
        }
    }
}

impl Settings {
    pub fn resolve(config: &UserConfig, args: &Args) -> Result<Self, ConfigError> {
        let vis = &config.visualizer;

        let settings = Self {
            adb_path: args
                .adb
                .clone()
                .or_else(|| config.adb_path.clone())
                .unwrap_or_else(|| PathBuf::from("adb")),
            startup_delay: Duration::from_millis(config.startup_delay_ms),
            bars: args.bars.unwrap_or(vis.bars),
            max_height: args.max_height.unwrap_or(vis.max_height),
            bar_width: args.bar_width.unwrap_or(vis.bar_width),
            interval: Duration::from_millis(args.interval.unwrap_or(vis.interval_ms)),
            seed: args.seed,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bars == 0 {
            return Err(ConfigError::NoBars);
        }
        if self.max_height == 0 {
            return Err(ConfigError::ZeroMaxHeight);
        }
        if self.bar_width == 0 {
            return Err(ConfigError::ZeroBarWidth);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
