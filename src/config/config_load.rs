// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigSource {
    File(PathBuf),
    #[default]
    Defaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub moon: MoonConfig,
    pub drag: DragConfig,
    pub release: ReleaseConfig,
    pub sky: SkyConfig,
    pub logging: LoggingConfig,

    #[serde(skip)]
    pub source: ConfigSource,
}

impl Config {
    /// Looks next to the executable first, then in the working directory.
    /// Missing files are not an error: built-in defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE_NAME))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.source = ConfigSource::File(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be non-zero"));
        }
        if !(self.moon.size > 0.0) {
            return Err(invalid("moon.size", "must be positive"));
        }
        if !(self.moon.radius_ratio > 0.0) {
            return Err(invalid("moon.radius_ratio", "must be positive"));
        }
        // both spreads (point_count / 8 and / 12) must be non-zero
        if self.moon.point_count < 12 {
            return Err(invalid("moon.point_count", "must be at least 12"));
        }
        if !(self.drag.strength_normalization > 0.0) {
            return Err(invalid("drag.strength_normalization", "must be positive"));
        }
        if !(self.drag.touch_slop >= 0.0) {
            return Err(invalid("drag.touch_slop", "must not be negative"));
        }
        if !(self.release.duration >= 0.0) {
            return Err(invalid("release.duration", "must not be negative"));
        }
        if self.sky.star_size_min > self.sky.star_size_max {
            return Err(invalid(
                "sky.star_size_min",
                format!(
                    "{} is larger than star_size_max {}",
                    self.sky.star_size_min, self.sky.star_size_max
                ),
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
