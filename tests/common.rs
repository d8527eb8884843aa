// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging plus sample catalog and recipe builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `rawfeed`
//!
//! Common catalog fixtures and logging setup used across integration tests.

use rawfeed::catalog::{CatalogFixture, InMemoryCatalog};
use rawfeed::models::{
    Ingredient, IngredientCategory, IngredientId, NutrientCoverageRow, NutrientGroup, NutrientId,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

pub const CHICKEN_WINGS: i64 = 1;
pub const BEEF_HEART: i64 = 2;
pub const SPINACH: i64 = 3;
pub const BEEF_LIVER: i64 = 4;
pub const PORK_KIDNEY: i64 = 5;
pub const FISH_OIL: i64 = 6;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn row(ingredient_id: i64, nutrient_id: i64, nutrient_group: NutrientGroup) -> NutrientCoverageRow {
    NutrientCoverageRow {
        ingredient_id: IngredientId(ingredient_id),
        nutrient_id: NutrientId(nutrient_id),
        nutrient_group,
    }
}

/// Ingredients covering every category between them
pub fn sample_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new(CHICKEN_WINGS, "Chicken wings", IngredientCategory::MuscleAndBone, 46.0),
        Ingredient::new(BEEF_HEART, "Beef heart", IngredientCategory::MuscleAndBone, 0.0),
        Ingredient::new(SPINACH, "Spinach", IngredientCategory::PlantMatter, 0.0),
        Ingredient::new(BEEF_LIVER, "Beef liver", IngredientCategory::Liver, 0.0),
        Ingredient::new(PORK_KIDNEY, "Pork kidney", IngredientCategory::SecretingOrgan, 0.0),
        Ingredient::new(FISH_OIL, "Fish oil", IngredientCategory::Misc, 0.0),
    ]
}

/// Coverage rows; every group is covered once all six ingredients are present
pub fn sample_coverage() -> Vec<NutrientCoverageRow> {
    vec![
        row(CHICKEN_WINGS, 301, NutrientGroup::EssentialAminoAcids),
        row(CHICKEN_WINGS, 401, NutrientGroup::NonEssentialAminoAcids),
        row(CHICKEN_WINGS, 201, NutrientGroup::MajorMinerals),
        row(BEEF_HEART, 301, NutrientGroup::EssentialAminoAcids),
        row(SPINACH, 110, NutrientGroup::WaterSolubleVitamins),
        row(BEEF_LIVER, 101, NutrientGroup::FatSolubleVitamins),
        row(PORK_KIDNEY, 210, NutrientGroup::TraceMinerals),
        row(FISH_OIL, 501, NutrientGroup::EssentialFattyAcids),
    ]
}

pub fn sample_fixture() -> CatalogFixture {
    CatalogFixture {
        ingredients: sample_ingredients(),
        coverage: sample_coverage(),
    }
}

/// Catalog built from [`sample_fixture`]
pub fn sample_catalog() -> InMemoryCatalog {
    init_test_logging();
    InMemoryCatalog::from_fixture(sample_fixture())
}

/// Look up a sample ingredient by id
pub fn sample_ingredient(id: i64) -> Ingredient {
    sample_ingredients()
        .into_iter()
        .find(|i| i.ingredient_id == IngredientId(id))
        .unwrap()
}
