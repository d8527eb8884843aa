// ABOUTME: Recipe ingredient lines linking a recipe to catalog ingredients
// ABOUTME: Defines RecipeId and RecipeIngredient with gram quantities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ingredient::IngredientId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Recipe identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single ingredient line of a recipe
///
/// Quantities feed recipe totals and composition; balance coverage only looks at
/// which ingredients are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Owning recipe
    pub recipe_id: RecipeId,
    /// Catalog ingredient
    pub ingredient_id: IngredientId,
    /// Amount in grams
    pub quantity_grams: f64,
}

impl RecipeIngredient {
    /// Create an ingredient line
    #[must_use]
    pub const fn new(recipe_id: RecipeId, ingredient_id: IngredientId, quantity_grams: f64) -> Self {
        Self {
            recipe_id,
            ingredient_id,
            quantity_grams,
        }
    }
}
