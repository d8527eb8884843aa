// ABOUTME: Mutable recipe draft with a version counter bumped on every change
// ABOUTME: Lines are keyed by ingredient so re-adding an ingredient updates its quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rawfeed_core::models::{IngredientId, RecipeId, RecipeIngredient};
use serde::{Deserialize, Serialize};

/// One line of a recipe as supplied by a caller or a JSON file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    /// Catalog ingredient
    pub ingredient_id: IngredientId,
    /// Quantity in grams
    #[serde(default)]
    pub quantity_grams: f64,
}

/// Ingredient list being edited, with a monotonically increasing version
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    recipe_id: RecipeId,
    lines: Vec<RecipeIngredient>,
    version: u64,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self::new(RecipeId::new())
    }
}

impl RecipeDraft {
    /// Empty draft for a recipe
    #[must_use]
    pub const fn new(recipe_id: RecipeId) -> Self {
        Self {
            recipe_id,
            lines: Vec::new(),
            version: 0,
        }
    }

    /// Draft pre-filled with lines; counts as a single change
    #[must_use]
    pub fn from_lines(recipe_id: RecipeId, lines: &[DraftLine]) -> Self {
        let mut draft = Self::new(recipe_id);
        for line in lines {
            draft.upsert(line.ingredient_id, line.quantity_grams);
        }
        if !draft.lines.is_empty() {
            draft.version = 1;
        }
        draft
    }

    /// Recipe this draft belongs to
    #[must_use]
    pub const fn recipe_id(&self) -> RecipeId {
        self.recipe_id
    }

    /// Current lines
    #[must_use]
    pub fn lines(&self) -> &[RecipeIngredient] {
        &self.lines
    }

    /// Version of the ingredient set; bumps on every change
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Whether the draft has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether an ingredient is already in the draft
    #[must_use]
    pub fn contains(&self, ingredient_id: IngredientId) -> bool {
        self.lines.iter().any(|line| line.ingredient_id == ingredient_id)
    }

    /// Add an ingredient, or replace its quantity if already present
    ///
    /// Returns the new version.
    pub fn add(&mut self, ingredient_id: IngredientId, quantity_grams: f64) -> u64 {
        self.upsert(ingredient_id, quantity_grams);
        self.bump()
    }

    /// Remove an ingredient; `None` if it was not in the draft
    pub fn remove(&mut self, ingredient_id: IngredientId) -> Option<u64> {
        let before = self.lines.len();
        self.lines.retain(|line| line.ingredient_id != ingredient_id);
        (self.lines.len() != before).then(|| self.bump())
    }

    fn upsert(&mut self, ingredient_id: IngredientId, quantity_grams: f64) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.ingredient_id == ingredient_id)
        {
            line.quantity_grams = quantity_grams;
        } else {
            self.lines.push(RecipeIngredient::new(
                self.recipe_id,
                ingredient_id,
                quantity_grams,
            ));
        }
    }

    fn bump(&mut self) -> u64 {
        self.version += 1;
        self.version
    }
}
