//! Rule configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use shogi_core::Square;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating rule configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The promotion zone depth is outside 1..=9.
    #[error("Invalid promotion zone depth: {0}")]
    InvalidZoneDepth(u8),
}

/// Tunable rules of a game.
///
/// Every field has a default, so an empty TOML document yields the standard
/// rules:
///
/// ```toml
/// move_limit = 500
/// promotion_zone_depth = 3
/// forbid_immobile_drops = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Number of full rounds after which the game is drawn.
    pub move_limit: u32,
    /// Number of ranks on the far side that form the promotion zone.
    pub promotion_zone_depth: u8,
    /// Reject drops onto squares the piece could never leave.
    pub forbid_immobile_drops: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            move_limit: 500,
            promotion_zone_depth: 3,
            forbid_immobile_drops: true,
        }
    }
}

impl RuleConfig {
    /// Loads rules from a TOML file.
    ///
    /// A missing file yields the default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidZoneDepth`] if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads rules from a TOML file that must exist.
    ///
    /// Unlike [`RuleConfig::load`], a missing file is a
    /// [`ConfigError::ReadError`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates rules from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.promotion_zone_depth == 0 || self.promotion_zone_depth > Square::RANKS {
            return Err(ConfigError::InvalidZoneDepth(self.promotion_zone_depth));
        }
        Ok(())
    }
}
