// ABOUTME: Dog profile model used by every feeding calculation
// ABOUTME: Defines Dog, DogId, and the feeding Goal with profile-level validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ratios::IngredientRatios;
use crate::constants::intake::MAX_INTAKE_PERCENT;
use crate::errors::{ValidationIssue, ValidationReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Dog identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DogId(pub Uuid);

impl DogId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Feeding goal selected on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Keep current weight
    #[default]
    Maintain,
    /// Put on weight
    Gain,
    /// Lose weight
    Lose,
    /// Manual intake percent stored in `ratios_intake`
    Custom,
}

impl Goal {
    /// Parse a goal name, falling back to `Custom` for anything unknown
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "maintain" => Self::Maintain,
            "gain" => Self::Gain,
            "lose" => Self::Lose,
            _ => Self::Custom,
        }
    }
}

/// Dog profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Dog identifier
    pub dog_id: DogId,
    /// Date of birth; unknown birth dates disable puppy guidelines
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    /// Body weight in kilograms
    pub weight_metric: f64,
    /// Feeding goal
    #[serde(default)]
    pub goal: Goal,
    /// Manual daily intake percent, used when `goal` is `Custom`
    #[serde(default)]
    pub ratios_intake: Option<f64>,
    /// Target ingredient ratios
    #[serde(flatten)]
    pub ratios: IngredientRatios,
    /// Follow puppy age-bracket guidelines while younger than 12 months
    #[serde(default)]
    pub use_puppy_guidelines: bool,
}

impl Dog {
    /// Create a profile with default ratios and no birth date
    #[must_use]
    pub fn new(weight_metric: f64, goal: Goal) -> Self {
        Self {
            dog_id: DogId::new(),
            dob: None,
            weight_metric,
            goal,
            ratios_intake: None,
            ratios: IngredientRatios::default(),
            use_puppy_guidelines: false,
        }
    }

    /// Set the birth date
    #[must_use]
    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    /// Toggle puppy guidelines
    #[must_use]
    pub fn with_puppy_guidelines(mut self, enabled: bool) -> Self {
        self.use_puppy_guidelines = enabled;
        self
    }

    /// Switch to a custom goal with a manual intake percent
    #[must_use]
    pub fn with_custom_intake(mut self, percent: f64) -> Self {
        self.goal = Goal::Custom;
        self.ratios_intake = Some(percent);
        self
    }

    /// Replace all five ratios at once
    #[must_use]
    pub fn with_ratios(mut self, ratios: IngredientRatios) -> Self {
        self.ratios = ratios;
        self
    }

    /// Check every caller-correctable constraint of the profile
    ///
    /// `sum_tolerance_percent` is the allowed distance between the ratio total
    /// and 100%; pass the configured save-gate tolerance so a ratio set the
    /// gate accepted never fails here.
    #[must_use]
    pub fn validate(&self, sum_tolerance_percent: f64) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.weight_metric.is_nan() || self.weight_metric <= 0.0 {
            report.push(ValidationIssue::WeightNotPositive {
                weight_kg: self.weight_metric,
            });
        }

        if self.goal == Goal::Custom {
            let percent = self.ratios_intake.unwrap_or(0.0);
            if !(percent > 0.0 && percent <= MAX_INTAKE_PERCENT) {
                report.push(ValidationIssue::IntakeOutOfRange { percent });
            }
        }

        let mut ratios_in_range = true;
        for (component, value) in self.ratios.iter() {
            if !(0.0..=1.0).contains(&value) {
                ratios_in_range = false;
                report.push(ValidationIssue::RatioOutOfRange {
                    field: component.field_name(),
                    value,
                });
            }
        }

        let total_percent = self.ratios.total_percent();
        if ratios_in_range && (total_percent - 100.0).abs() >= sum_tolerance_percent {
            report.push(ValidationIssue::RatioSumInvalid { total_percent });
        }

        debug!(
            dog_id = %self.dog_id,
            issues = report.issues.len(),
            "Validated dog profile"
        );
        report
    }
}
