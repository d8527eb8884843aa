// ABOUTME: In-memory ingredient catalog implementation with shared async state
// ABOUTME: Serves ingredient and coverage lookups and can simulate an unavailable backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::CatalogFixture;
use async_trait::async_trait;
use rawfeed_core::errors::{AppError, AppResult};
use rawfeed_core::models::{Ingredient, IngredientId, NutrientCoverageRow};
use rawfeed_nutrition::coverage::IngredientCatalog;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const SERVICE_NAME: &str = "ingredient catalog";

/// In-memory ingredient catalog
///
/// Clones share the same underlying maps, so a test can keep a handle to flip
/// the catalog into its unavailable mode while the engine holds another.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    ingredients: Arc<RwLock<HashMap<IngredientId, Ingredient>>>,
    coverage: Arc<RwLock<HashMap<IngredientId, Vec<NutrientCoverageRow>>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated from a fixture
    #[must_use]
    pub fn from_fixture(fixture: CatalogFixture) -> Self {
        let ingredients = fixture
            .ingredients
            .into_iter()
            .map(|ingredient| (ingredient.ingredient_id, ingredient))
            .collect();

        let mut coverage: HashMap<IngredientId, Vec<NutrientCoverageRow>> = HashMap::new();
        for row in fixture.coverage {
            coverage.entry(row.ingredient_id).or_default().push(row);
        }

        Self {
            ingredients: Arc::new(RwLock::new(ingredients)),
            coverage: Arc::new(RwLock::new(coverage)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Insert or replace an ingredient
    pub async fn upsert_ingredient(&self, ingredient: Ingredient) {
        self.ingredients
            .write()
            .await
            .insert(ingredient.ingredient_id, ingredient);
    }

    /// Record that an ingredient has a nutrient
    pub async fn add_coverage(&self, row: NutrientCoverageRow) {
        let mut coverage = self.coverage.write().await;
        let rows = coverage.entry(row.ingredient_id).or_default();
        if !rows.contains(&row) {
            rows.push(row);
        }
    }

    /// Look up a single ingredient
    pub async fn ingredient(&self, ingredient_id: IngredientId) -> Option<Ingredient> {
        self.ingredients.read().await.get(&ingredient_id).cloned()
    }

    /// Number of ingredients in the catalog
    pub async fn len(&self) -> usize {
        self.ingredients.read().await.len()
    }

    /// Whether the catalog has no ingredients
    pub async fn is_empty(&self) -> bool {
        self.ingredients.read().await.is_empty()
    }

    /// Make every lookup fail with `EXTERNAL_SERVICE_UNAVAILABLE`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::external_unavailable(SERVICE_NAME));
        }
        Ok(())
    }
}

#[async_trait]
impl IngredientCatalog for InMemoryCatalog {
    async fn get_ingredients_by_ids(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>> {
        self.ensure_available()?;
        let store = self.ingredients.read().await;
        let found: Vec<Ingredient> = ids.iter().filter_map(|id| store.get(id).cloned()).collect();
        drop(store);

        debug!(requested = ids.len(), found = found.len(), "Ingredient lookup");
        Ok(found)
    }

    async fn get_nutrient_coverage(
        &self,
        ingredient_ids: &[IngredientId],
    ) -> AppResult<Vec<NutrientCoverageRow>> {
        self.ensure_available()?;
        let store = self.coverage.read().await;
        let rows: Vec<NutrientCoverageRow> = ingredient_ids
            .iter()
            .filter_map(|id| store.get(id))
            .flatten()
            .copied()
            .collect();
        drop(store);

        debug!(
            requested = ingredient_ids.len(),
            rows = rows.len(),
            "Nutrient coverage lookup"
        );
        Ok(rows)
    }
}
