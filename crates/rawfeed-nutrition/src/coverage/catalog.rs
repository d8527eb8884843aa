// ABOUTME: Catalog collaborator trait for ingredient and nutrient lookups
// ABOUTME: Pluggable backend boundary; the engine only reads through it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use rawfeed_core::errors::AppResult;
use rawfeed_core::models::{Ingredient, IngredientId, NutrientCoverageRow};
use std::sync::Arc;

/// Read-only access to the ingredient/nutrient catalog
///
/// Implementations own transport concerns (timeouts, retries); the engine calls
/// each method at most once per balance check with the distinct ids of a recipe.
#[async_trait]
pub trait IngredientCatalog: Send + Sync {
    /// Resolve category and bone content for the given ingredients
    ///
    /// Unknown ids are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be queried
    async fn get_ingredients_by_ids(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>>;

    /// Every `has_nutrient = true` row for the given ingredients
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be queried
    async fn get_nutrient_coverage(
        &self,
        ingredient_ids: &[IngredientId],
    ) -> AppResult<Vec<NutrientCoverageRow>>;
}

#[async_trait]
impl<T: IngredientCatalog + ?Sized> IngredientCatalog for Arc<T> {
    async fn get_ingredients_by_ids(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>> {
        (**self).get_ingredients_by_ids(ids).await
    }

    async fn get_nutrient_coverage(
        &self,
        ingredient_ids: &[IngredientId],
    ) -> AppResult<Vec<NutrientCoverageRow>> {
        (**self).get_nutrient_coverage(ingredient_ids).await
    }
}
