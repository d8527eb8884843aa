// ABOUTME: Recipe composition totals per diet component from ingredient quantities
// ABOUTME: Splits category-1 grams into muscle meat and bone and compares against target ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::units::round_to_places;
use rawfeed_core::constants::units::PERCENT_SCALE;
use rawfeed_core::models::{Ingredient, IngredientCategory, IngredientRatios, RatioComponent};
use serde::{Deserialize, Serialize};

/// Grams of each diet component in a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeComposition {
    /// Sum of every ingredient line, misc included
    pub total_grams: f64,
    /// Flesh share of category-1 ingredients
    pub muscle_meat_grams: f64,
    /// Bone share of category-1 ingredients
    pub bone_grams: f64,
    /// Category 2
    pub plant_matter_grams: f64,
    /// Category 3
    pub liver_grams: f64,
    /// Category 4
    pub secreting_organ_grams: f64,
    /// Category 5, excluded from ratio math
    pub misc_grams: f64,
}

/// Difference between a target ratio and what a recipe achieves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentDeviation {
    /// Component compared
    pub component: RatioComponent,
    /// Target share (percent)
    pub target_percent: f64,
    /// Achieved share (percent, 1 decimal)
    pub actual_percent: f64,
    /// `actual - target` in percentage points (1 decimal)
    pub deviation_points: f64,
}

impl RecipeComposition {
    /// Grams of a component
    #[must_use]
    pub const fn grams(&self, component: RatioComponent) -> f64 {
        match component {
            RatioComponent::MuscleMeat => self.muscle_meat_grams,
            RatioComponent::Bone => self.bone_grams,
            RatioComponent::PlantMatter => self.plant_matter_grams,
            RatioComponent::Liver => self.liver_grams,
            RatioComponent::SecretingOrgan => self.secreting_organ_grams,
        }
    }

    /// Grams that count toward the five ratios
    #[must_use]
    pub fn ratio_base_grams(&self) -> f64 {
        RatioComponent::ALL.iter().map(|c| self.grams(*c)).sum()
    }

    /// Achieved fractions; `None` for a recipe with no ratio-relevant grams
    #[must_use]
    pub fn achieved_ratios(&self) -> Option<IngredientRatios> {
        let base = self.ratio_base_grams();
        if !(base.is_finite() && base > 0.0) {
            return None;
        }
        Some(IngredientRatios {
            muscle_meat: self.muscle_meat_grams / base,
            bone: self.bone_grams / base,
            liver: self.liver_grams / base,
            secreting_organ: self.secreting_organ_grams / base,
            plant_matter: self.plant_matter_grams / base,
        })
    }

    /// Per-component deviation from a target ratio set
    ///
    /// Empty when the recipe has no ratio-relevant grams.
    #[must_use]
    pub fn compare_to_target(&self, target: &IngredientRatios) -> Vec<ComponentDeviation> {
        let Some(achieved) = self.achieved_ratios() else {
            return Vec::new();
        };
        achieved
            .iter()
            .map(|(component, fraction)| {
                let target_percent = round_to_places(target.get(component) * PERCENT_SCALE, 1);
                let actual_percent = round_to_places(fraction * PERCENT_SCALE, 1);
                ComponentDeviation {
                    component,
                    target_percent,
                    actual_percent,
                    deviation_points: round_to_places(actual_percent - target_percent, 1),
                }
            })
            .collect()
    }
}

/// Total each component across resolved ingredient lines
pub fn recipe_composition<'a, I>(lines: I) -> RecipeComposition
where
    I: IntoIterator<Item = (&'a Ingredient, f64)>,
{
    let mut composition = RecipeComposition::default();
    for (ingredient, grams) in lines {
        if !(grams.is_finite() && grams > 0.0) {
            continue;
        }
        composition.total_grams += grams;
        match ingredient.category {
            IngredientCategory::MuscleAndBone => {
                let bone_share = ingredient.bone_percent.clamp(0.0, PERCENT_SCALE) / PERCENT_SCALE;
                let bone = grams * bone_share;
                composition.bone_grams += bone;
                composition.muscle_meat_grams += grams - bone;
            }
            IngredientCategory::PlantMatter => composition.plant_matter_grams += grams,
            IngredientCategory::Liver => composition.liver_grams += grams,
            IngredientCategory::SecretingOrgan => composition.secreting_organ_grams += grams,
            IngredientCategory::Misc => composition.misc_grams += grams,
        }
    }
    composition
}
