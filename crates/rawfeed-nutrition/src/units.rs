// ABOUTME: Metric/imperial weight conversion with the planner's rounding policy
// ABOUTME: Converts kg and lb both ways, snaps committed weights to half kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight unit conversion.
//!
//! Converted values are rounded to two decimals. Snapping to the nearest half
//! kilogram only happens when an edit is committed, so interim keystrokes are
//! shown exactly as typed.

use rawfeed_core::constants::units::LB_PER_KG;
use serde::{Deserialize, Serialize};

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Convert kilograms to pounds, rounded to 2 decimals
#[must_use]
pub fn to_imperial(kg: f64) -> f64 {
    round_to_places(kg * LB_PER_KG, 2)
}

/// Convert pounds to kilograms, rounded to 2 decimals
#[must_use]
pub fn to_metric(lb: f64) -> f64 {
    round_to_places(lb / LB_PER_KG, 2)
}

/// Snap a weight to the nearest 0.5 kg
#[must_use]
pub fn round_to_nearest_half(kg: f64) -> f64 {
    (kg * 2.0).round() / 2.0
}

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kilograms,
    /// Pounds
    Pounds,
}

/// A weight shown in both units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeightPair {
    /// Kilograms
    pub kg: f64,
    /// Pounds
    pub lb: f64,
}

impl WeightPair {
    /// Build both units from a kilogram value
    #[must_use]
    pub fn from_kg(kg: f64) -> Self {
        Self {
            kg,
            lb: to_imperial(kg),
        }
    }

    /// Build both units from a pound value
    #[must_use]
    pub fn from_lb(lb: f64) -> Self {
        Self {
            kg: to_metric(lb),
            lb,
        }
    }

    /// Parse text typed into one of the weight fields
    ///
    /// Empty or non-numeric text clears both fields to zero.
    #[must_use]
    pub fn from_input(text: &str, unit: WeightUnit) -> Self {
        let Some(value) = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
        else {
            return Self::default();
        };

        match unit {
            WeightUnit::Kilograms => Self::from_kg(value),
            WeightUnit::Pounds => Self::from_lb(value),
        }
    }

    /// Commit the edit: snap kg to the nearest half and recompute pounds
    #[must_use]
    pub fn commit(self) -> Self {
        Self::from_kg(round_to_nearest_half(self.kg))
    }
}
