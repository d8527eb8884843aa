// ABOUTME: Tests for core domain models, identifiers, and error conversions
// ABOUTME: Covers dog profile validation, category taxonomy, labels, and serde shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use rawfeed_core::constants::ratios::RATIO_SUM_TOLERANCE_PERCENT;
use rawfeed_core::errors::{AppError, ErrorCode, ValidationIssue};
use rawfeed_core::models::{
    Dog, Goal, Ingredient, IngredientCategory, IngredientRatios, NutrientGroup, RatioComponent,
};
use serde_json::json;

// ============================================================================
// DOG PROFILE VALIDATION
// ============================================================================

#[test]
fn test_default_dog_is_valid() {
    let dog = Dog::new(20.0, Goal::Maintain);
    let report = dog.validate(RATIO_SUM_TOLERANCE_PERCENT);
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    assert!(report.into_result().is_ok());
}

#[test]
fn test_zero_weight_rejected() {
    let dog = Dog::new(0.0, Goal::Maintain);
    let report = dog.validate(RATIO_SUM_TOLERANCE_PERCENT);
    assert_eq!(
        report.issues,
        vec![ValidationIssue::WeightNotPositive { weight_kg: 0.0 }]
    );
}

#[test]
fn test_custom_goal_requires_intake_in_range() {
    let mut dog = Dog::new(20.0, Goal::Custom);
    assert!(matches!(
        dog.validate(RATIO_SUM_TOLERANCE_PERCENT).issues.as_slice(),
        [ValidationIssue::IntakeOutOfRange { percent }] if *percent == 0.0
    ));

    dog = dog.with_custom_intake(120.0);
    assert!(!dog.validate(RATIO_SUM_TOLERANCE_PERCENT).is_valid());

    dog = dog.with_custom_intake(4.0);
    assert!(dog.validate(RATIO_SUM_TOLERANCE_PERCENT).is_valid());
}

#[test]
fn test_ratio_out_of_range_reports_field() {
    let ratios = IngredientRatios {
        muscle_meat: 1.2,
        ..IngredientRatios::default()
    };
    let dog = Dog::new(20.0, Goal::Maintain).with_ratios(ratios);
    let issues = dog.validate(RATIO_SUM_TOLERANCE_PERCENT).issues;

    assert_eq!(issues.len(), 1, "sum check is skipped when a field is out of range");
    match &issues[0] {
        ValidationIssue::RatioOutOfRange { field, value } => {
            assert_eq!(*field, "muscle_meat");
            assert_eq!(*value, 1.2);
        }
        other => panic!("unexpected issue {other:?}"),
    }
}

#[test]
fn test_ratio_sum_checked_when_fields_in_range() {
    let ratios = IngredientRatios {
        muscle_meat: 0.60,
        ..IngredientRatios::default()
    };
    let dog = Dog::new(20.0, Goal::Maintain).with_ratios(ratios);
    assert_eq!(
        dog.validate(RATIO_SUM_TOLERANCE_PERCENT).issues,
        vec![ValidationIssue::RatioSumInvalid {
            total_percent: 105.0
        }]
    );
}

#[test]
fn test_ratio_sum_uses_given_tolerance() {
    let ratios = IngredientRatios {
        muscle_meat: 0.553,
        ..IngredientRatios::default()
    };
    let dog = Dog::new(20.0, Goal::Maintain).with_ratios(ratios);

    assert!(!dog.validate(RATIO_SUM_TOLERANCE_PERCENT).is_valid());
    assert!(dog.validate(0.5).is_valid());
}

#[test]
fn test_validation_report_into_app_error() {
    let dog = Dog::new(-1.0, Goal::Custom);
    let error: AppError = dog.validate(RATIO_SUM_TOLERANCE_PERCENT).into();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("weight must be greater than 0 kg"));
    assert!(error.message.contains("; "));
}

#[test]
fn test_goal_from_str_lossy() {
    assert_eq!(Goal::from_str_lossy("maintain"), Goal::Maintain);
    assert_eq!(Goal::from_str_lossy(" Gain "), Goal::Gain);
    assert_eq!(Goal::from_str_lossy("LOSE"), Goal::Lose);
    assert_eq!(Goal::from_str_lossy("bulk"), Goal::Custom);
}

// ============================================================================
// RATIOS AND COMPONENTS
// ============================================================================

#[test]
fn test_default_ratios_total_one_hundred() {
    let ratios = IngredientRatios::default();
    assert_eq!(ratios.total_percent(), 100.0);
    assert_eq!(ratios.get(RatioComponent::MuscleMeat), 0.55);
    assert_eq!(ratios.get(RatioComponent::PlantMatter), 0.25);
    assert_eq!(ratios.iter().count(), 5);
}

#[test]
fn test_ratio_component_labels() {
    let labels: Vec<&str> = RatioComponent::ALL.iter().map(RatioComponent::label).collect();
    assert_eq!(
        labels,
        vec!["muscle meat", "bone", "plant matter", "liver", "secreting organs"]
    );
    assert_eq!(
        serde_json::to_value(RatioComponent::SecretingOrgan).unwrap(),
        json!("secreting organs")
    );
}

// ============================================================================
// INGREDIENTS AND NUTRIENTS
// ============================================================================

#[test]
fn test_ingredient_category_ids() {
    for id in 1..=5_u8 {
        let category = IngredientCategory::try_from(id).unwrap();
        assert_eq!(category.id(), id);
    }
    assert!(IngredientCategory::try_from(0).is_err());
    assert!(IngredientCategory::try_from(6).is_err());
    assert_eq!(IngredientCategory::Misc.component(), None);
    assert_eq!(
        IngredientCategory::MuscleAndBone.component(),
        Some(RatioComponent::MuscleMeat)
    );
}

#[test]
fn test_ingredient_deserializes_catalog_shape() {
    let ingredient: Ingredient = serde_json::from_value(json!({
        "ingredient_id": 7,
        "name": "Chicken wings",
        "category_id": 1,
        "bone_percent": 46.0
    }))
    .unwrap();
    assert_eq!(ingredient.category, IngredientCategory::MuscleAndBone);
    assert!(ingredient.provides_bone());

    let unknown = serde_json::from_value::<Ingredient>(json!({
        "ingredient_id": 8,
        "category_id": 9
    }));
    assert!(unknown.is_err());
}

#[test]
fn test_only_category_one_provides_bone() {
    let liver = Ingredient::new(3, "Beef liver", IngredientCategory::Liver, 10.0);
    assert!(!liver.provides_bone());
    let boneless = Ingredient::new(4, "Beef heart", IngredientCategory::MuscleAndBone, 0.0);
    assert!(!boneless.provides_bone());
}

#[test]
fn test_nutrient_group_labels_round_trip() {
    assert_eq!(NutrientGroup::ALL.len(), 7);
    for group in NutrientGroup::ALL {
        assert_eq!(NutrientGroup::from_label(group.label()), Some(group));
    }
    assert_eq!(NutrientGroup::from_label("Vitamins"), None);
    assert_eq!(
        serde_json::to_value(NutrientGroup::TraceMinerals).unwrap(),
        json!("Trace Minerals")
    );
}

#[test]
fn test_dog_deserializes_persisted_ratio_columns() {
    let dog: Dog = serde_json::from_value(json!({
        "dog_id": "6f1c9b2e-8a4d-4f43-9b1e-2f6d3c4b5a69",
        "dob": "2023-02-01",
        "weight_metric": 12.5,
        "goal": "gain",
        "ratios_muscle_meat": 0.5,
        "ratios_bone": 0.15,
        "ratios_liver": 0.05,
        "ratios_secreting_organ": 0.05,
        "ratios_plant_matter": 0.25
    }))
    .unwrap();

    assert_eq!(dog.goal, Goal::Gain);
    assert_eq!(dog.ratios.bone, 0.15);
    assert!(!dog.use_puppy_guidelines);
    assert!(dog.validate(RATIO_SUM_TOLERANCE_PERCENT).is_valid());
}
