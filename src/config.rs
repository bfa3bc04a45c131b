//! Game configuration loaded from TOML.

use crate::console::BoardStyle;
use crate::games::fox_hounds::Dimension;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one session.
///
/// Every field is optional in the file; command-line flags override it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Requested board dimension. Out-of-range values fall back to the default.
    dimension: Option<u32>,

    /// Board rendering style.
    style: BoardStyle,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(dimension: Option<u32>, style: BoardStyle) -> Self {
        Self { dimension, style }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, dimension: Option<u32>, style: Option<BoardStyle>) -> Self {
        if dimension.is_some() {
            self.dimension = dimension;
        }
        if let Some(style) = style {
            self.style = style;
        }
        self
    }

    /// The configured dimension, clamped to the playable range, or `None`
    /// when the player should be asked.
    pub fn board_dimension(&self) -> Option<Dimension> {
        self.dimension.map(Dimension::clamped)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
