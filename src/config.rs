//! Game configuration.
//!
//! Every field has a default, so a JSON document only needs the values it
//! overrides.
//!
//! ```
//! use leftovers::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "challenges_per_game": 3 }"#).unwrap();
//! assert_eq!(config.challenges_per_game, 3);
//! assert_eq!(config.quantity_range.max, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::QuantityRange;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("invalid game configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of its allowed range
    #[error("invalid game configuration: {0}")]
    Invalid(String),
}

/// Constants consumed by the game and the screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Range of every quantity in the Before/After boxes
    pub quantity_range: QuantityRange,
    /// Range of custom sandwich coefficients
    pub coefficient_range: QuantityRange,
    /// Challenges per game batch
    pub challenges_per_game: usize,
    /// Attempts allowed per challenge before the answer is shown
    pub max_attempts: u32,
    /// Points for a correct first attempt
    pub points_first_attempt: u32,
    /// Points for a correct later attempt
    pub points_later_attempt: u32,
    /// Developer option: guesses start filled in with the correct answer
    pub play_all: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            quantity_range: QuantityRange::QUANTITIES,
            coefficient_range: QuantityRange::COEFFICIENTS,
            challenges_per_game: 5,
            max_attempts: 2,
            points_first_attempt: 2,
            points_later_attempt: 1,
            play_all: false,
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the game relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.quantity_range.is_valid() || self.quantity_range.max == 0 {
            return Err(ConfigError::Invalid(format!(
                "quantity range {} must be non-empty with a positive maximum",
                self.quantity_range
            )));
        }
        if !self.coefficient_range.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "coefficient range {} is empty",
                self.coefficient_range
            )));
        }
        if self.challenges_per_game == 0 {
            return Err(ConfigError::Invalid(
                "challenges_per_game must be > 0".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be > 0".to_string()));
        }
        Ok(())
    }

    /// Largest quantity the game may place in a box.
    pub fn max_quantity(&self) -> u32 {
        self.quantity_range.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_quantity(), 8);
        assert_eq!(config.challenges_per_game, 5);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GameConfig::from_json_str(
            r#"{ "quantity_range": { "min": 0, "max": 6 }, "play_all": true }"#,
        )
        .unwrap();
        assert_eq!(config.max_quantity(), 6);
        assert!(config.play_all);
        assert_eq!(config.max_attempts, 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let json = r#"{ "challenges_per_game": 0 }"#;
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let json = r#"{ "quantity_range": { "min": 3, "max": 1 } }"#;
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = GameConfig {
            max_attempts: 3,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }
}
