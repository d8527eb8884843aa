// ABOUTME: Ingredient ratio configuration with the default preset and sum tolerance
// ABOUTME: The preset is what a ratio reset restores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use rawfeed_core::constants::ratios::RATIO_SUM_TOLERANCE_PERCENT;
use rawfeed_core::models::IngredientRatios;
use serde::{Deserialize, Serialize};

/// Ratio rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Preset restored by a ratio reset: 55/10/25/5/5
    pub default_ratios: IngredientRatios,
    /// Accepted distance from 100 for the rounded total: 0.01
    pub sum_tolerance_percent: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            default_ratios: IngredientRatios::default(),
            sum_tolerance_percent: RATIO_SUM_TOLERANCE_PERCENT,
        }
    }
}

impl RatioConfig {
    /// Validate the preset and the tolerance
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for a non-positive tolerance and
    /// `ConfigError::InvalidWeights` when the preset does not sum to 100%
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sum_tolerance_percent > 0.0 && self.sum_tolerance_percent < 1.0) {
            return Err(ConfigError::InvalidRange(format!(
                "sum_tolerance_percent must be in (0, 1), got {}",
                self.sum_tolerance_percent
            )));
        }

        let total = self.default_ratios.total_percent();
        if (total - 100.0).abs() >= self.sum_tolerance_percent {
            return Err(ConfigError::InvalidWeights(format!(
                "default ratios must sum to 100%, got {total}%"
            )));
        }

        Ok(())
    }
}
