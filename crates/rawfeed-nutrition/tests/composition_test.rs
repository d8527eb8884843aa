// ABOUTME: Tests for recipe composition totals and deviation from target ratios
// ABOUTME: Covers the category-1 bone split, misc exclusion, and empty recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use rawfeed_core::models::{Ingredient, IngredientCategory, IngredientRatios, RatioComponent};
use rawfeed_nutrition::composition::recipe_composition;

fn pantry() -> Vec<Ingredient> {
    vec![
        Ingredient::new(1, "Chicken wings", IngredientCategory::MuscleAndBone, 40.0),
        Ingredient::new(2, "Spinach", IngredientCategory::PlantMatter, 0.0),
        Ingredient::new(3, "Beef liver", IngredientCategory::Liver, 0.0),
        Ingredient::new(4, "Beef kidney", IngredientCategory::SecretingOrgan, 0.0),
        Ingredient::new(5, "Kelp", IngredientCategory::Misc, 0.0),
    ]
}

#[test]
fn test_category_one_split_by_bone_percent() {
    let pantry = pantry();
    let composition = recipe_composition([(&pantry[0], 500.0)]);
    assert!((composition.bone_grams - 200.0).abs() < 1e-9);
    assert!((composition.muscle_meat_grams - 300.0).abs() < 1e-9);
    assert_eq!(composition.total_grams, 500.0);
}

#[test]
fn test_misc_excluded_from_ratio_base() {
    let pantry = pantry();
    let composition = recipe_composition([
        (&pantry[0], 500.0),
        (&pantry[1], 100.0),
        (&pantry[2], 50.0),
        (&pantry[3], 50.0),
        (&pantry[4], 20.0),
    ]);
    assert_eq!(composition.total_grams, 720.0);
    assert_eq!(composition.misc_grams, 20.0);
    assert!((composition.ratio_base_grams() - 700.0).abs() < 1e-9);

    let achieved = composition.achieved_ratios().unwrap();
    assert!((achieved.total_fraction() - 1.0).abs() < 1e-9);
    assert!((achieved.muscle_meat - 300.0 / 700.0).abs() < 1e-9);
}

#[test]
fn test_compare_to_target() {
    let pantry = pantry();
    let composition = recipe_composition([
        (&pantry[0], 500.0),
        (&pantry[1], 100.0),
        (&pantry[2], 50.0),
        (&pantry[3], 50.0),
    ]);
    let deviations = composition.compare_to_target(&IngredientRatios::default());
    assert_eq!(deviations.len(), 5);

    let muscle = deviations
        .iter()
        .find(|d| d.component == RatioComponent::MuscleMeat)
        .unwrap();
    assert_eq!(muscle.target_percent, 55.0);
    assert_eq!(muscle.actual_percent, 42.9);
    assert!((muscle.deviation_points - -12.1).abs() < 1e-9);

    let bone = deviations
        .iter()
        .find(|d| d.component == RatioComponent::Bone)
        .unwrap();
    assert_eq!(bone.actual_percent, 28.6);
    assert!(bone.deviation_points > 0.0);
}

#[test]
fn test_non_positive_quantities_ignored() {
    let pantry = pantry();
    let composition = recipe_composition([(&pantry[1], 0.0), (&pantry[2], -50.0)]);
    assert_eq!(composition.total_grams, 0.0);
    assert_eq!(composition.achieved_ratios(), None);
    assert!(composition
        .compare_to_target(&IngredientRatios::default())
        .is_empty());
}

#[test]
fn test_misc_only_recipe_has_no_ratios() {
    let pantry = pantry();
    let composition = recipe_composition([(&pantry[4], 30.0)]);
    assert_eq!(composition.total_grams, 30.0);
    assert_eq!(composition.achieved_ratios(), None);
}
