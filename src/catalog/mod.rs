// ABOUTME: Ingredient catalog backends for the nutrient coverage engine
// ABOUTME: JSON fixture format plus the in-memory catalog implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog backends
//!
//! The engine reads the catalog through
//! [`IngredientCatalog`](rawfeed_nutrition::coverage::IngredientCatalog). This
//! module ships an in-memory backend and the JSON fixture format it loads.
//!
//! Fixture shape:
//!
//! ```json
//! {
//!   "ingredients": [
//!     { "ingredient_id": 1, "name": "Chicken wings", "category_id": 1, "bone_percent": 46.0 }
//!   ],
//!   "coverage": [
//!     { "ingredient_id": 1, "nutrient_id": 301, "nutrient_group": "Essential Amino Acids" }
//!   ]
//! }
//! ```

/// In-memory catalog backed by `tokio` locks
pub mod memory;

pub use memory::InMemoryCatalog;
pub use rawfeed_nutrition::coverage::IngredientCatalog;

use rawfeed_core::errors::{AppError, AppResult};
use rawfeed_core::models::{Ingredient, NutrientCoverageRow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Catalog contents as stored in a JSON fixture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFixture {
    /// Ingredient rows
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// `has_nutrient = true` rows
    #[serde(default)]
    pub coverage: Vec<NutrientCoverageRow>,
}

impl CatalogFixture {
    /// Parse a fixture from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or unknown category ids
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the file cannot be read, or a
    /// serialization error if its contents are not a valid fixture
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).await.map_err(|e| {
            AppError::not_found(format!("catalog fixture {}", path.display())).with_source(e)
        })?;
        let fixture = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            ingredients = fixture.ingredients.len(),
            coverage_rows = fixture.coverage.len(),
            "Loaded catalog fixture"
        );
        Ok(fixture)
    }
}
