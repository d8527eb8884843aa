// ABOUTME: Bone requirement calculation for bone-bearing ingredients
// ABOUTME: Derives grams of an ingredient needed to meet a dog's daily bone target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bone Requirement Calculator
//!
//! Formula:
//! - `daily_intake_grams = weight_kg * 1000 * intake_percent / 100`
//! - `bone_required_grams = daily_intake_grams * ratios_bone`
//! - `ingredient_required_grams = bone_required_grams / bone_percent * 100`
//!
//! Intermediate values stay unrounded; [`BoneRequirement::rounded`] rounds each
//! value to whole grams for display.

use crate::config::IntakeConfig;
use crate::intake::{resolve_intake_percent, unrounded_daily_intake_grams};
use chrono::NaiveDate;
use rawfeed_core::constants::units::PERCENT_SCALE;
use rawfeed_core::models::{Dog, Ingredient};
use serde::{Deserialize, Serialize};

/// Unrounded bone requirement for one dog and one ingredient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoneRequirement {
    /// Total daily food (g)
    pub daily_intake_grams: f64,
    /// Bone the dog needs per day (g)
    pub bone_required_grams: f64,
    /// Grams of the ingredient that supply that bone; `None` when it carries no bone
    pub ingredient_required_grams: Option<f64>,
}

impl BoneRequirement {
    /// Same requirement rounded to whole grams for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            daily_intake_grams: self.daily_intake_grams.round(),
            bone_required_grams: self.bone_required_grams.round(),
            ingredient_required_grams: self.ingredient_required_grams.map(f64::round),
        }
    }
}

/// Compute the bone requirement
///
/// Returns `None` when the dog's intake percent cannot be resolved.
#[must_use]
pub fn bone_requirement(
    dog: &Dog,
    ingredient: &Ingredient,
    today: NaiveDate,
    config: &IntakeConfig,
) -> Option<BoneRequirement> {
    let percent = resolve_intake_percent(dog, today, config);
    let daily_intake_grams = unrounded_daily_intake_grams(dog.weight_metric, percent)?;
    let bone_required_grams = daily_intake_grams * dog.ratios.bone;

    let ingredient_required_grams = (ingredient.bone_percent.is_finite()
        && ingredient.bone_percent > 0.0)
        .then(|| bone_required_grams / ingredient.bone_percent * PERCENT_SCALE);

    Some(BoneRequirement {
        daily_intake_grams,
        bone_required_grams,
        ingredient_required_grams,
    })
}

/// Grams of `ingredient` needed per day to meet the dog's bone target
///
/// `None` for ingredients without bone or dogs without a resolvable intake.
#[must_use]
pub fn required_ingredient_grams(
    dog: &Dog,
    ingredient: &Ingredient,
    today: NaiveDate,
    config: &IntakeConfig,
) -> Option<f64> {
    bone_requirement(dog, ingredient, today, config)?.ingredient_required_grams
}
