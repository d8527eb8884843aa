// ABOUTME: Ingredient catalog entries as seen by the rules engine
// ABOUTME: Defines Ingredient, IngredientId, and the numeric IngredientCategory taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ratios::RatioComponent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ingredient identifier assigned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub i64);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Catalog category of an ingredient, stored as `category_id` 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IngredientCategory {
    /// Meat that may carry bone (`category_id` 1)
    MuscleAndBone = 1,
    /// Vegetables, fruit, seeds (`category_id` 2)
    PlantMatter = 2,
    /// Liver (`category_id` 3)
    Liver = 3,
    /// Secreting organs other than liver (`category_id` 4)
    SecretingOrgan = 4,
    /// Supplements and extras; never required for balance (`category_id` 5)
    Misc = 5,
}

impl IngredientCategory {
    /// Numeric category id used by the catalog
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Diet component this category fills, if any
    ///
    /// Category 1 fills muscle meat; its bone share is derived separately from
    /// `bone_percent`.
    #[must_use]
    pub const fn component(self) -> Option<RatioComponent> {
        match self {
            Self::MuscleAndBone => Some(RatioComponent::MuscleMeat),
            Self::PlantMatter => Some(RatioComponent::PlantMatter),
            Self::Liver => Some(RatioComponent::Liver),
            Self::SecretingOrgan => Some(RatioComponent::SecretingOrgan),
            Self::Misc => None,
        }
    }
}

impl TryFrom<u8> for IngredientCategory {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::MuscleAndBone),
            2 => Ok(Self::PlantMatter),
            3 => Ok(Self::Liver),
            4 => Ok(Self::SecretingOrgan),
            5 => Ok(Self::Misc),
            other => Err(format!("unknown ingredient category_id {other}")),
        }
    }
}

impl From<IngredientCategory> for u8 {
    fn from(category: IngredientCategory) -> Self {
        category.id()
    }
}

/// Ingredient as resolved from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identifier
    pub ingredient_id: IngredientId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Catalog category
    #[serde(rename = "category_id")]
    pub category: IngredientCategory,
    /// Percent of the ingredient's weight that is edible bone (category 1 only)
    #[serde(default)]
    pub bone_percent: f64,
}

impl Ingredient {
    /// Create a catalog entry
    #[must_use]
    pub fn new(
        ingredient_id: i64,
        name: impl Into<String>,
        category: IngredientCategory,
        bone_percent: f64,
    ) -> Self {
        Self {
            ingredient_id: IngredientId(ingredient_id),
            name: name.into(),
            category,
            bone_percent,
        }
    }

    /// True for category 1 ingredients with a positive bone share
    #[must_use]
    pub fn provides_bone(&self) -> bool {
        self.category == IngredientCategory::MuscleAndBone && self.bone_percent > 0.0
    }
}
