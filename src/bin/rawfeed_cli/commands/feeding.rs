// ABOUTME: Feeding calculator commands for rawfeed-cli
// ABOUTME: Handles intake, convert, ratios, batch, and bone operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use rawfeed::errors::{AppError, AppResult};
use rawfeed::models::{Dog, Goal, Ingredient, IngredientCategory, IngredientRatios};
use rawfeed::nutrition::batch::{batch_from_days, days_from_batch};
use rawfeed::nutrition::bone::bone_requirement;
use rawfeed::nutrition::config::NutritionRulesConfig;
use rawfeed::nutrition::intake::{
    age_in_months, daily_intake_grams, goal_from_intake, resolve_intake_percent,
};
use rawfeed::nutrition::ratios::{validate_dog, validate_ratios};
use rawfeed::nutrition::units::{WeightPair, WeightUnit};
use serde_json::{json, Value};
use tracing::info;

/// Dog profile as given on the command line
pub struct DogArgs {
    pub weight: f64,
    pub goal: String,
    pub intake_percent: Option<f64>,
    pub dob: Option<NaiveDate>,
    pub puppy: bool,
    pub bone_ratio: Option<f64>,
}

/// Ratio overrides; unset fields keep the preset
pub struct RatioArgs {
    pub muscle_meat: Option<f64>,
    pub bone: Option<f64>,
    pub liver: Option<f64>,
    pub secreting_organ: Option<f64>,
    pub plant_matter: Option<f64>,
}

fn build_dog(args: &DogArgs, rules: &NutritionRulesConfig) -> AppResult<Dog> {
    let mut dog = Dog::new(args.weight, Goal::from_str_lossy(&args.goal))
        .with_puppy_guidelines(args.puppy);
    if let Some(dob) = args.dob {
        dog = dog.with_dob(dob);
    }
    if let Some(percent) = args.intake_percent {
        dog = dog.with_custom_intake(percent);
    }
    if let Some(bone) = args.bone_ratio {
        // Muscle meat absorbs the difference so the set stays at 100%
        let preset = rules.ratios.default_ratios;
        dog = dog.with_ratios(IngredientRatios {
            muscle_meat: preset.muscle_meat + preset.bone - bone,
            bone,
            ..preset
        });
    }

    validate_dog(&dog, &rules.ratios)
        .into_result()
        .map_err(AppError::from)?;
    Ok(dog)
}

/// Resolve intake percent and daily grams
pub fn intake(rules: &NutritionRulesConfig, today: NaiveDate, args: &DogArgs) -> AppResult<Value> {
    let dog = build_dog(args, rules)?;
    let percent = resolve_intake_percent(&dog, today, &rules.intake);
    let grams = daily_intake_grams(dog.weight_metric, percent);

    info!(dog_id = %dog.dog_id, ?percent, ?grams, "Resolved daily intake");

    Ok(json!({
        "weight_kg": dog.weight_metric,
        "goal": dog.goal,
        "age_months": age_in_months(dog.dob, today),
        "intake_percent": percent,
        "daily_intake_grams": grams,
        "goal_for_percent": percent.map(|p| goal_from_intake(p, &rules.intake)),
    }))
}

/// Convert a typed weight to both units
pub fn convert(kg: Option<&str>, lb: Option<&str>, commit: bool) -> Value {
    let typed = match (kg, lb) {
        (Some(text), _) => WeightPair::from_input(text, WeightUnit::Kilograms),
        (None, Some(text)) => WeightPair::from_input(text, WeightUnit::Pounds),
        (None, None) => WeightPair::default(),
    };
    let pair = if commit { typed.commit() } else { typed };
    json!({ "kg": pair.kg, "lb": pair.lb, "committed": commit })
}

/// Validate a ratio set built from the preset plus overrides
pub fn ratios(rules: &NutritionRulesConfig, args: RatioArgs) -> AppResult<Value> {
    let preset = rules.ratios.default_ratios;
    let ratios = IngredientRatios {
        muscle_meat: args.muscle_meat.unwrap_or(preset.muscle_meat),
        bone: args.bone.unwrap_or(preset.bone),
        liver: args.liver.unwrap_or(preset.liver),
        secreting_organ: args.secreting_organ.unwrap_or(preset.secreting_organ),
        plant_matter: args.plant_matter.unwrap_or(preset.plant_matter),
    };

    if let Some((component, value)) = ratios.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
        return Err(AppError::value_out_of_range(format!(
            "{component} must be a fraction between 0 and 1, got {value}"
        )));
    }

    let validation = validate_ratios(&ratios, &rules.ratios);
    Ok(json!({
        "ratios": ratios,
        "valid": validation.valid,
        "totalPercent": validation.total_percent,
        "message": validation.issue().map(|issue| issue.to_string()),
    }))
}

/// Convert between batch size and number of days
pub fn batch(daily_grams: f64, batch_kg: Option<f64>, days: Option<f64>) -> Value {
    let daily = Some(daily_grams);
    let (batch_size_kg, number_of_days) = match (batch_kg, days) {
        (Some(kg), _) => (Some(kg), days_from_batch(kg, daily)),
        (None, Some(days)) => (batch_from_days(days, daily), Some(days)),
        (None, None) => (None, None),
    };
    json!({
        "daily_intake_grams": daily_grams,
        "batch_size_kg": batch_size_kg,
        "number_of_days": number_of_days,
    })
}

/// Grams of a bone-bearing ingredient needed per day
pub fn bone(
    rules: &NutritionRulesConfig,
    today: NaiveDate,
    args: &DogArgs,
    bone_percent: f64,
) -> AppResult<Value> {
    if !(0.0..=100.0).contains(&bone_percent) {
        return Err(AppError::value_out_of_range(format!(
            "bone percent must be between 0 and 100, got {bone_percent}"
        )));
    }

    let dog = build_dog(args, rules)?;
    let ingredient = Ingredient::new(0, "ingredient", IngredientCategory::MuscleAndBone, bone_percent);
    let requirement = bone_requirement(&dog, &ingredient, today, &rules.intake);

    Ok(json!({
        "bone_ratio": dog.ratios.bone,
        "bone_percent": bone_percent,
        "requirement": requirement.map(|r| r.rounded()),
        "ingredient_required_grams_exact": requirement.and_then(|r| r.ingredient_required_grams),
    }))
}
