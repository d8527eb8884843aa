// ABOUTME: Ingredient ratio set describing how a raw diet splits across five components
// ABOUTME: Defines IngredientRatios and the RatioComponent enumeration with display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ratios::{
    DEFAULT_BONE, DEFAULT_LIVER, DEFAULT_MUSCLE_MEAT, DEFAULT_PLANT_MATTER,
    DEFAULT_SECRETING_ORGAN,
};
use crate::constants::units::PERCENT_SCALE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five diet components a ratio set distributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatioComponent {
    /// Muscle meat (category 1 flesh)
    #[serde(rename = "muscle meat")]
    MuscleMeat,
    /// Edible bone (category 1 bone content)
    #[serde(rename = "bone")]
    Bone,
    /// Vegetables, fruit, and other plant matter
    #[serde(rename = "plant matter")]
    PlantMatter,
    /// Liver
    #[serde(rename = "liver")]
    Liver,
    /// Kidney, spleen, pancreas and other secreting organs
    #[serde(rename = "secreting organs")]
    SecretingOrgan,
}

impl RatioComponent {
    /// All components in reporting order
    pub const ALL: [Self; 5] = [
        Self::MuscleMeat,
        Self::Bone,
        Self::PlantMatter,
        Self::Liver,
        Self::SecretingOrgan,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MuscleMeat => "muscle meat",
            Self::Bone => "bone",
            Self::PlantMatter => "plant matter",
            Self::Liver => "liver",
            Self::SecretingOrgan => "secreting organs",
        }
    }

    /// Field name of this component in a ratio set
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::MuscleMeat => "muscle_meat",
            Self::Bone => "bone",
            Self::PlantMatter => "plant_matter",
            Self::Liver => "liver",
            Self::SecretingOrgan => "secreting_organ",
        }
    }
}

impl fmt::Display for RatioComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target fractions (0-1) of each diet component
///
/// A persisted set sums to 1.0; while a user edits fields one at a time the sum
/// may drift, which is why saving goes through ratio validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientRatios {
    /// Muscle meat fraction
    #[serde(alias = "ratios_muscle_meat")]
    pub muscle_meat: f64,
    /// Bone fraction
    #[serde(alias = "ratios_bone")]
    pub bone: f64,
    /// Liver fraction
    #[serde(alias = "ratios_liver")]
    pub liver: f64,
    /// Secreting organ fraction
    #[serde(alias = "ratios_secreting_organ")]
    pub secreting_organ: f64,
    /// Plant matter fraction
    #[serde(alias = "ratios_plant_matter")]
    pub plant_matter: f64,
}

impl Default for IngredientRatios {
    fn default() -> Self {
        Self {
            muscle_meat: DEFAULT_MUSCLE_MEAT,
            bone: DEFAULT_BONE,
            liver: DEFAULT_LIVER,
            secreting_organ: DEFAULT_SECRETING_ORGAN,
            plant_matter: DEFAULT_PLANT_MATTER,
        }
    }
}

impl IngredientRatios {
    /// Fraction assigned to a component
    #[must_use]
    pub const fn get(&self, component: RatioComponent) -> f64 {
        match component {
            RatioComponent::MuscleMeat => self.muscle_meat,
            RatioComponent::Bone => self.bone,
            RatioComponent::PlantMatter => self.plant_matter,
            RatioComponent::Liver => self.liver,
            RatioComponent::SecretingOrgan => self.secreting_organ,
        }
    }

    /// Sum of the five fractions, unrounded
    #[must_use]
    pub fn total_fraction(&self) -> f64 {
        RatioComponent::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Sum of the five fractions as a percentage rounded to one decimal
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        (self.total_fraction() * PERCENT_SCALE * 10.0).round() / 10.0
    }

    /// Component/fraction pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (RatioComponent, f64)> + '_ {
        RatioComponent::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}
