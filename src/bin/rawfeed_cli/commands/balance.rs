// ABOUTME: Recipe balance command for rawfeed-cli
// ABOUTME: Loads a catalog fixture and recipe lines, then reports coverage and composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rawfeed::catalog::{CatalogFixture, InMemoryCatalog};
use rawfeed::errors::{AppError, AppResult};
use rawfeed::models::RecipeId;
use rawfeed::nutrition::composition::recipe_composition;
use rawfeed::nutrition::config::NutritionRulesConfig;
use rawfeed::recipe::{BalanceTracker, DraftLine, RecipeDraft};
use serde_json::{json, Value};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

async fn load_recipe(path: &Path) -> AppResult<Vec<DraftLine>> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::not_found(format!("recipe file {}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Check a recipe against a catalog fixture
pub async fn balance(
    rules: &NutritionRulesConfig,
    catalog_path: &Path,
    recipe_path: &Path,
) -> AppResult<Value> {
    let catalog = InMemoryCatalog::from_fixture(CatalogFixture::load(catalog_path).await?);
    let lines = load_recipe(recipe_path).await?;

    let mut tracker = BalanceTracker::from_draft(RecipeDraft::from_lines(RecipeId::new(), &lines));
    let check = tracker.recheck(&catalog).await.clone();
    info!(
        recipe_id = %tracker.recipe_id(),
        lines = lines.len(),
        status = ?check.status(),
        "Recipe balance checked"
    );

    let mut resolved = Vec::with_capacity(lines.len());
    for line in tracker.draft().lines() {
        match catalog.ingredient(line.ingredient_id).await {
            Some(ingredient) => resolved.push((ingredient, line.quantity_grams)),
            None => warn!(ingredient_id = %line.ingredient_id, "Not in catalog, left out of composition"),
        }
    }
    let composition = recipe_composition(resolved.iter().map(|(i, grams)| (i, *grams)));
    let deviations = composition.compare_to_target(&rules.ratios.default_ratios);

    Ok(json!({
        "status": check.status(),
        "balance": check,
        "composition": composition,
        "deviations": deviations,
    }))
}
