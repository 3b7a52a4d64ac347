use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical profile of the pallet every plan is computed against.
///
/// The defaults describe the warehouse's standard pallet: a 42 x 48 inch
/// deck standing 5 inches off the floor, 50 lb of tare, and a 65 inch
/// ceiling on the finished stack. The engine only ever reads these values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PalletConfig {
    /// Deck extent read along the forklift approach axis, inches.
    pub deck_long: f64,
    /// Deck extent across the forklift approach axis, inches.
    pub deck_wide: f64,
    /// Height of the empty pallet deck, inches.
    pub deck_height: f64,
    /// Weight of the empty pallet, pounds.
    pub tare_weight: f64,
    /// Ceiling on deck height plus stacked boxes, inches.
    pub max_stack_height: f64,
}

/// Optional TOML overrides for [`PalletConfig`]; absent fields keep defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PalletConfigPatch {
    pub deck_long: Option<f64>,
    pub deck_wide: Option<f64>,
    pub deck_height: Option<f64>,
    pub tare_weight: Option<f64>,
    pub max_stack_height: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for PalletConfig {
    fn default() -> Self {
        Self {
            deck_long: 42.0,
            deck_wide: 48.0,
            deck_height: 5.0,
            tare_weight: 50.0,
            max_stack_height: 65.0,
        }
    }
}

impl PalletConfig {
    /// Load the default profile, optionally patched from a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            let raw = fs::read_to_string(path)
                .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
            let patch: PalletConfigPatch = toml::from_str(&raw)
                .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })?;
            config.apply_patch(patch);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_patch(&mut self, patch: PalletConfigPatch) {
        if let Some(deck_long) = patch.deck_long {
            self.deck_long = deck_long;
        }
        if let Some(deck_wide) = patch.deck_wide {
            self.deck_wide = deck_wide;
        }
        if let Some(deck_height) = patch.deck_height {
            self.deck_height = deck_height;
        }
        if let Some(tare_weight) = patch.tare_weight {
            self.tare_weight = tare_weight;
        }
        if let Some(max_stack_height) = patch.max_stack_height {
            self.max_stack_height = max_stack_height;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("deck_long", self.deck_long),
            ("deck_wide", self.deck_wide),
            ("deck_height", self.deck_height),
            ("max_stack_height", self.max_stack_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.tare_weight.is_finite() || self.tare_weight < 0.0 {
            return Err(ConfigError::Validation(format!(
                "tare_weight must be non-negative, got {}",
                self.tare_weight
            )));
        }
        if self.max_stack_height <= self.deck_height {
            return Err(ConfigError::Validation(format!(
                "max_stack_height ({}) leaves no room above the {} in deck",
                self.max_stack_height, self.deck_height
            )));
        }
        Ok(())
    }

    /// Vertical room left for boxes once the deck itself is subtracted.
    pub fn usable_height(&self) -> f64 {
        self.max_stack_height - self.deck_height
    }
}
