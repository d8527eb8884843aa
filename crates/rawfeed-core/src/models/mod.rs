// ABOUTME: Core data models for the rawfeed planner
// ABOUTME: Re-exports Dog, Ingredient, NutrientGroup, RecipeIngredient and identifier types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The engine reads these values and never persists them. Dogs, recipes, and the
//! ingredient/nutrient catalog are owned by external collaborators; the types here
//! only describe the fields the rules need.
//!
//! ## Core Models
//!
//! - `Dog`: profile with weight, birth date, feeding goal, and target ratios
//! - `IngredientRatios`: the five ingredient-category fractions of a diet
//! - `Ingredient`: catalog entry with its category and bone content
//! - `NutrientGroup`: the fixed seven-group nutrient taxonomy
//! - `RecipeIngredient`: one ingredient line of a recipe

mod dog;
mod ingredient;
mod nutrient;
mod ratios;
mod recipe;

pub use dog::{Dog, DogId, Goal};
pub use ingredient::{Ingredient, IngredientCategory, IngredientId};
pub use nutrient::{NutrientCoverageRow, NutrientGroup, NutrientId};
pub use ratios::{IngredientRatios, RatioComponent};
pub use recipe::{RecipeId, RecipeIngredient};
