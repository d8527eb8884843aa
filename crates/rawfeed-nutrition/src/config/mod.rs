// ABOUTME: Nutrition rules configuration for intake presets, puppy brackets, and ratio defaults
// ABOUTME: Loads defaults, applies environment overrides, validates, and exposes a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Rules Configuration
//!
//! Every tunable constant of the rules engine lives here so callers and tests can
//! run the engine against custom rules. Engine functions take the relevant section
//! by reference; [`NutritionRulesConfig::global`] provides the process-wide instance.
//!
//! # Module Structure
//!
//! - `intake` - goal presets and puppy age brackets
//! - `ratios` - default ratio preset and sum tolerance
//! - `error` - configuration errors

pub mod error;
pub mod intake;
pub mod ratios;

pub use error::ConfigError;
pub use intake::{IntakeConfig, PuppyBracket};
pub use ratios::RatioConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static NUTRITION_RULES: OnceLock<NutritionRulesConfig> = OnceLock::new();

/// Main rules configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionRulesConfig {
    /// Daily intake rules
    pub intake: IntakeConfig,
    /// Ingredient ratio rules
    pub ratios: RatioConfig,
}

impl NutritionRulesConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_RULES.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition rules: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            maintain = config.intake.maintain_percent,
            gain = config.intake.gain_percent,
            lose = config.intake.lose_percent,
            brackets = config.intake.puppy_brackets.len(),
            "Loaded nutrition rules"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by a section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intake.validate()?;
        self.ratios.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "RAWFEED_MAINTAIN_INTAKE_PERCENT",
            &mut self.intake.maintain_percent,
        )?;
        Self::apply_env_var("RAWFEED_GAIN_INTAKE_PERCENT", &mut self.intake.gain_percent)?;
        Self::apply_env_var("RAWFEED_LOSE_INTAKE_PERCENT", &mut self.intake.lose_percent)?;
        Self::apply_env_var(
            "RAWFEED_RATIO_TOLERANCE_PERCENT",
            &mut self.ratios.sum_tolerance_percent,
        )?;
        Ok(self)
    }
}
