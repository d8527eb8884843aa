// ABOUTME: Daily intake configuration for goal presets and puppy age brackets
// ABOUTME: Brackets are half-open month ranges checked in ascending order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use rawfeed_core::constants::intake::{
    ADULT_AGE_MONTHS, GAIN_INTAKE_PERCENT, LOSE_INTAKE_PERCENT, MAINTAIN_INTAKE_PERCENT,
    MAX_INTAKE_PERCENT, PUPPY_BRACKETS,
};
use serde::{Deserialize, Serialize};

/// Puppy guideline for one age range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuppyBracket {
    /// First month covered (inclusive)
    pub from_months: i32,
    /// First month no longer covered (exclusive)
    pub to_months: i32,
    /// Daily intake percent for this range
    pub percent: f64,
}

impl PuppyBracket {
    /// Whether an age falls inside `[from_months, to_months)`
    #[must_use]
    pub const fn contains(&self, age_months: i32) -> bool {
        age_months >= self.from_months && age_months < self.to_months
    }

    /// Width of the bracket in months
    #[must_use]
    pub const fn span(&self) -> i32 {
        self.to_months - self.from_months
    }
}

/// Intake rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maintenance intake percent: 2.5
    pub maintain_percent: f64,
    /// Weight-gain intake percent: 3.0
    pub gain_percent: f64,
    /// Weight-loss intake percent: 2.0
    pub lose_percent: f64,
    /// Age at which puppy guidelines stop applying: 12 months
    pub adult_age_months: i32,
    /// Puppy brackets in ascending order
    pub puppy_brackets: Vec<PuppyBracket>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            maintain_percent: MAINTAIN_INTAKE_PERCENT,
            gain_percent: GAIN_INTAKE_PERCENT,
            lose_percent: LOSE_INTAKE_PERCENT,
            adult_age_months: ADULT_AGE_MONTHS,
            puppy_brackets: PUPPY_BRACKETS
                .iter()
                .map(|&(from_months, to_months, percent)| PuppyBracket {
                    from_months,
                    to_months,
                    percent,
                })
                .collect(),
        }
    }
}

impl IntakeConfig {
    /// Validate presets and bracket layout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a percent is outside (0, 100], or if
    /// brackets are empty-width, overlapping, out of order, or extend past adulthood
    pub fn validate(&self) -> Result<(), ConfigError> {
        let presets = [
            ("maintain_percent", self.maintain_percent),
            ("gain_percent", self.gain_percent),
            ("lose_percent", self.lose_percent),
        ];
        for (name, value) in presets {
            if !(value > 0.0 && value <= MAX_INTAKE_PERCENT) {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} must be in (0, 100], got {value}"
                )));
            }
        }

        let mut previous_end = 0;
        for bracket in &self.puppy_brackets {
            if bracket.span() <= 0 {
                return Err(ConfigError::InvalidRange(format!(
                    "puppy bracket [{}, {}) is empty",
                    bracket.from_months, bracket.to_months
                )));
            }
            if bracket.from_months < previous_end {
                return Err(ConfigError::InvalidRange(format!(
                    "puppy bracket starting at {} months overlaps the previous bracket",
                    bracket.from_months
                )));
            }
            if bracket.to_months > self.adult_age_months {
                return Err(ConfigError::InvalidRange(format!(
                    "puppy bracket ending at {} months extends past adult age {}",
                    bracket.to_months, self.adult_age_months
                )));
            }
            if !(bracket.percent > 0.0 && bracket.percent <= MAX_INTAKE_PERCENT) {
                return Err(ConfigError::InvalidRange(format!(
                    "puppy bracket percent must be in (0, 100], got {}",
                    bracket.percent
                )));
            }
            previous_end = bracket.to_months;
        }

        Ok(())
    }
}
