// ABOUTME: Nutrient taxonomy and ingredient-to-nutrient coverage rows
// ABOUTME: Defines the fixed seven NutrientGroup values and NutrientCoverageRow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ingredient::IngredientId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient identifier assigned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientId(pub i64);

/// Nutrient group a nutrient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutrientGroup {
    /// Vitamins A, D, E, K
    #[serde(rename = "Fat-Soluble Vitamins")]
    FatSolubleVitamins,
    /// B vitamins and vitamin C
    #[serde(rename = "Water-Soluble Vitamins")]
    WaterSolubleVitamins,
    /// Calcium, phosphorus, magnesium, sodium, potassium, chloride
    #[serde(rename = "Major Minerals")]
    MajorMinerals,
    /// Iron, zinc, copper, manganese, selenium, iodine
    #[serde(rename = "Trace Minerals")]
    TraceMinerals,
    /// Omega-3 and omega-6 fatty acids
    #[serde(rename = "Essential Fatty Acids")]
    EssentialFattyAcids,
    /// Amino acids dogs cannot synthesize
    #[serde(rename = "Essential Amino Acids")]
    EssentialAminoAcids,
    /// Amino acids dogs can synthesize
    #[serde(rename = "Non-Essential Amino Acids")]
    NonEssentialAminoAcids,
}

impl NutrientGroup {
    /// Every group, in reporting order
    pub const ALL: [Self; 7] = [
        Self::FatSolubleVitamins,
        Self::WaterSolubleVitamins,
        Self::MajorMinerals,
        Self::TraceMinerals,
        Self::EssentialFattyAcids,
        Self::EssentialAminoAcids,
        Self::NonEssentialAminoAcids,
    ];

    /// Catalog label of the group
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FatSolubleVitamins => "Fat-Soluble Vitamins",
            Self::WaterSolubleVitamins => "Water-Soluble Vitamins",
            Self::MajorMinerals => "Major Minerals",
            Self::TraceMinerals => "Trace Minerals",
            Self::EssentialFattyAcids => "Essential Fatty Acids",
            Self::EssentialAminoAcids => "Essential Amino Acids",
            Self::NonEssentialAminoAcids => "Non-Essential Amino Acids",
        }
    }

    /// Look a group up by its catalog label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.label() == label)
    }
}

impl fmt::Display for NutrientGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `has_nutrient = true` row of the ingredient/nutrient relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutrientCoverageRow {
    /// Ingredient that carries the nutrient
    pub ingredient_id: IngredientId,
    /// Nutrient carried
    pub nutrient_id: NutrientId,
    /// Group of the nutrient
    pub nutrient_group: NutrientGroup,
}
