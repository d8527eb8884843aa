// ABOUTME: Nutrient coverage engine deciding whether a recipe is balanced
// ABOUTME: Checks required ingredient categories and the seven nutrient groups against the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Coverage Engine
//!
//! A recipe is balanced when it contains every required diet component and its
//! ingredients together cover every nutrient group. Coverage is presence-based:
//! quantities do not matter here.
//!
//! ## Category rules
//!
//! - No category-1 ingredient: muscle meat and bone are both missing.
//! - Category-1 ingredients, none with `bone_percent > 0`: bone is missing.
//! - Categories 2, 3, 4 absent: plant matter, liver, secreting organs missing.
//! - Category 5 never affects balance.
//!
//! ## Unknown coverage
//!
//! A catalog failure never turns into a balanced verdict. [`check_balance`]
//! returns the error; [`check_balance_or_unknown`] folds it into
//! [`BalanceCheck::Unknown`].

/// Catalog collaborator trait
pub mod catalog;

pub use catalog::IngredientCatalog;

use rawfeed_core::errors::AppResult;
use rawfeed_core::models::{
    Ingredient, IngredientCategory, IngredientId, NutrientCoverageRow, NutrientGroup,
    RatioComponent, RecipeIngredient,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// Balance verdict for a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    /// Diet components no ingredient supplies
    pub missing_categories: Vec<RatioComponent>,
    /// Nutrient groups no ingredient covers
    pub missing_nutrient_groups: Vec<NutrientGroup>,
    /// True only when nothing is missing
    pub is_balanced: bool,
}

impl BalanceResult {
    /// Build a verdict from the two missing sets
    #[must_use]
    pub fn new(
        missing_categories: Vec<RatioComponent>,
        missing_nutrient_groups: Vec<NutrientGroup>,
    ) -> Self {
        let is_balanced = missing_categories.is_empty() && missing_nutrient_groups.is_empty();
        Self {
            missing_categories,
            missing_nutrient_groups,
            is_balanced,
        }
    }

    /// Verdict for a recipe with no ingredients: everything missing
    #[must_use]
    pub fn empty_recipe() -> Self {
        Self::new(RatioComponent::ALL.to_vec(), NutrientGroup::ALL.to_vec())
    }

    /// Whether both missing sets are subsets of `previous`'s
    #[must_use]
    pub fn is_at_least_as_complete_as(&self, previous: &Self) -> bool {
        self.missing_categories
            .iter()
            .all(|c| previous.missing_categories.contains(c))
            && self
                .missing_nutrient_groups
                .iter()
                .all(|g| previous.missing_nutrient_groups.contains(g))
    }
}

/// Display status of a balance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Every component and nutrient group is covered
    Balanced,
    /// Something is missing
    Unbalanced,
    /// Coverage could not be determined
    Unknown,
    /// The ingredient set changed and has not been rechecked yet
    Pending,
}

/// Outcome of a balance check, including the coverage-unknown state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "coverage", rename_all = "snake_case")]
pub enum BalanceCheck {
    /// Coverage resolved
    Known(BalanceResult),
    /// Catalog lookup failed
    Unknown {
        /// Failure description
        reason: String,
    },
    /// Awaiting the recheck of an ingredient set no verdict can be derived for
    Pending,
}

impl BalanceCheck {
    /// Display status
    #[must_use]
    pub const fn status(&self) -> BalanceStatus {
        match self {
            Self::Known(result) if result.is_balanced => BalanceStatus::Balanced,
            Self::Known(_) => BalanceStatus::Unbalanced,
            Self::Unknown { .. } => BalanceStatus::Unknown,
            Self::Pending => BalanceStatus::Pending,
        }
    }

    /// The resolved verdict, if coverage is known
    #[must_use]
    pub const fn result(&self) -> Option<&BalanceResult> {
        match self {
            Self::Known(result) => Some(result),
            Self::Unknown { .. } | Self::Pending => None,
        }
    }

    /// Only `true` for a known, balanced verdict
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self.status(), BalanceStatus::Balanced)
    }
}

/// Components not supplied by any of the ingredients, in reporting order
#[must_use]
pub fn missing_categories(ingredients: &[Ingredient]) -> Vec<RatioComponent> {
    let present: HashSet<IngredientCategory> = ingredients.iter().map(|i| i.category).collect();
    let has_bone = ingredients.iter().any(Ingredient::provides_bone);

    let mut missing = Vec::new();
    if !present.contains(&IngredientCategory::MuscleAndBone) {
        missing.push(RatioComponent::MuscleMeat);
        missing.push(RatioComponent::Bone);
    } else if !has_bone {
        missing.push(RatioComponent::Bone);
    }
    if !present.contains(&IngredientCategory::PlantMatter) {
        missing.push(RatioComponent::PlantMatter);
    }
    if !present.contains(&IngredientCategory::Liver) {
        missing.push(RatioComponent::Liver);
    }
    if !present.contains(&IngredientCategory::SecretingOrgan) {
        missing.push(RatioComponent::SecretingOrgan);
    }
    missing
}

/// Nutrient groups not covered by any row belonging to the ingredients
#[must_use]
pub fn missing_nutrient_groups(
    ingredients: &[Ingredient],
    coverage: &[NutrientCoverageRow],
) -> Vec<NutrientGroup> {
    let present: HashSet<IngredientId> = ingredients.iter().map(|i| i.ingredient_id).collect();
    let covered: HashSet<NutrientGroup> = coverage
        .iter()
        .filter(|row| present.contains(&row.ingredient_id))
        .map(|row| row.nutrient_group)
        .collect();

    NutrientGroup::ALL
        .into_iter()
        .filter(|group| !covered.contains(group))
        .collect()
}

/// Evaluate a verdict from resolved ingredients and their coverage rows
#[must_use]
pub fn evaluate_balance(ingredients: &[Ingredient], coverage: &[NutrientCoverageRow]) -> BalanceResult {
    if ingredients.is_empty() {
        return BalanceResult::empty_recipe();
    }
    BalanceResult::new(
        missing_categories(ingredients),
        missing_nutrient_groups(ingredients, coverage),
    )
}

/// Optimistic verdict after adding one ingredient
///
/// Removes the components the new ingredient supplies from `previous`. Nutrient
/// groups are left untouched until the authoritative recheck arrives.
#[must_use]
pub fn apply_added_ingredient(previous: &BalanceResult, ingredient: &Ingredient) -> BalanceResult {
    let mut supplied = Vec::with_capacity(2);
    if let Some(component) = ingredient.category.component() {
        supplied.push(component);
    }
    if ingredient.provides_bone() {
        supplied.push(RatioComponent::Bone);
    }

    let missing_categories = previous
        .missing_categories
        .iter()
        .copied()
        .filter(|c| !supplied.contains(c))
        .collect();
    BalanceResult::new(missing_categories, previous.missing_nutrient_groups.clone())
}

/// Distinct ingredient ids of a recipe, in ascending order
#[must_use]
pub fn distinct_ingredient_ids(recipe: &[RecipeIngredient]) -> Vec<IngredientId> {
    recipe
        .iter()
        .map(|line| line.ingredient_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Check a recipe's balance against the catalog
///
/// An empty recipe resolves without touching the catalog. Ids the catalog does
/// not know are skipped with a warning.
///
/// # Errors
///
/// Returns the catalog's error when either lookup fails
pub async fn check_balance<C>(catalog: &C, recipe: &[RecipeIngredient]) -> AppResult<BalanceResult>
where
    C: IngredientCatalog + ?Sized,
{
    let ids = distinct_ingredient_ids(recipe);
    if ids.is_empty() {
        return Ok(BalanceResult::empty_recipe());
    }

    let ingredients = catalog.get_ingredients_by_ids(&ids).await?;
    if ingredients.len() < ids.len() {
        let resolved: HashSet<IngredientId> =
            ingredients.iter().map(|i| i.ingredient_id).collect();
        for id in ids.iter().filter(|id| !resolved.contains(id)) {
            warn!(ingredient_id = %id, "Ingredient not found in catalog, skipping");
        }
    }

    let coverage = catalog.get_nutrient_coverage(&ids).await?;
    let result = evaluate_balance(&ingredients, &coverage);

    debug!(
        ingredients = ids.len(),
        missing_categories = result.missing_categories.len(),
        missing_nutrient_groups = result.missing_nutrient_groups.len(),
        is_balanced = result.is_balanced,
        "Balance check complete"
    );
    Ok(result)
}

/// Check a recipe's balance, folding catalog failures into `BalanceCheck::Unknown`
pub async fn check_balance_or_unknown<C>(catalog: &C, recipe: &[RecipeIngredient]) -> BalanceCheck
where
    C: IngredientCatalog + ?Sized,
{
    match check_balance(catalog, recipe).await {
        Ok(result) => BalanceCheck::Known(result),
        Err(error) => {
            warn!(code = ?error.code, "Nutrient coverage unknown: {error}");
            BalanceCheck::Unknown {
                reason: error.to_string(),
            }
        }
    }
}
