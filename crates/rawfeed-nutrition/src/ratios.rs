// ABOUTME: Save-time validation of the five ingredient ratios
// ABOUTME: Checks the rounded total against 100% and provides the default-ratio reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ratio validation gates persistence, not typing: a user may leave the set
//! temporarily unbalanced while editing fields one by one, and only the save is
//! refused until the total returns to 100%.

use crate::config::RatioConfig;
use rawfeed_core::errors::{ValidationIssue, ValidationReport};
use rawfeed_core::models::{Dog, IngredientRatios};
use serde::{Deserialize, Serialize};

/// Outcome of a ratio validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioValidation {
    /// Whether the set may be saved
    pub valid: bool,
    /// Sum of the fractions as a percentage, rounded to one decimal
    pub total_percent: f64,
}

impl RatioValidation {
    /// Rejection reason for an invalid set
    #[must_use]
    pub const fn issue(&self) -> Option<ValidationIssue> {
        if self.valid {
            None
        } else {
            Some(ValidationIssue::RatioSumInvalid {
                total_percent: self.total_percent,
            })
        }
    }
}

/// Validate that the five ratios add up to 100%
#[must_use]
pub fn validate_ratios(ratios: &IngredientRatios, config: &RatioConfig) -> RatioValidation {
    let total_percent = ratios.total_percent();
    RatioValidation {
        valid: (total_percent - 100.0).abs() < config.sum_tolerance_percent,
        total_percent,
    }
}

/// Validate a whole dog profile with the configured ratio tolerance
///
/// Uses the same tolerance as [`validate_ratios`], so a set accepted by
/// [`apply_ratios`] also passes here.
#[must_use]
pub fn validate_dog(dog: &Dog, config: &RatioConfig) -> ValidationReport {
    dog.validate(config.sum_tolerance_percent)
}

/// The preset a ratio reset restores
#[must_use]
pub fn default_ratios(config: &RatioConfig) -> IngredientRatios {
    config.default_ratios
}

/// Apply an edited ratio set to a dog if it passes the save gate
///
/// # Errors
///
/// Returns `ValidationIssue::RatioSumInvalid` when the set does not sum to 100%
pub fn apply_ratios(
    dog: &Dog,
    ratios: IngredientRatios,
    config: &RatioConfig,
) -> Result<Dog, ValidationIssue> {
    let validation = validate_ratios(&ratios, config);
    match validation.issue() {
        Some(issue) => Err(issue),
        None => Ok(dog.clone().with_ratios(ratios)),
    }
}
