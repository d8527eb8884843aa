// ABOUTME: Feeding and nutrition rules engine for raw-fed dogs
// ABOUTME: Unit conversion, intake policy, ratio validation, batch and bone math, nutrient coverage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rawfeed Nutrition
//!
//! Rules engine behind the raw-feeding planner. Everything except the coverage
//! check is pure arithmetic over `rawfeed-core` models and a
//! [`config::NutritionRulesConfig`].
//!
//! ## Modules
//!
//! - **units**: kg/lb conversion and half-kilogram snapping
//! - **intake**: daily intake percent resolution (puppy brackets, goal presets, custom)
//! - **ratios**: save-time validation of the five ingredient ratios
//! - **batch**: batch size to days conversion and the linked batch planner
//! - **bone**: grams of a bone-bearing ingredient needed per day
//! - **composition**: achieved component split of a recipe
//! - **coverage**: async balance check against an ingredient catalog

/// Rules configuration with environment overrides
pub mod config;

/// Metric/imperial weight conversion
pub mod units;

/// Daily intake policy
pub mod intake;

/// Ingredient ratio validation
pub mod ratios;

/// Batch calculator
pub mod batch;

/// Bone requirement calculator
pub mod bone;

/// Recipe composition against target ratios
pub mod composition;

/// Nutrient coverage engine
pub mod coverage;

pub use batch::{batch_from_days, days_from_batch, BatchFields, BatchPlanner};
pub use bone::{bone_requirement, required_ingredient_grams, BoneRequirement};
pub use composition::{recipe_composition, ComponentDeviation, RecipeComposition};
pub use config::NutritionRulesConfig;
pub use coverage::{
    apply_added_ingredient, check_balance, check_balance_or_unknown, evaluate_balance,
    BalanceCheck, BalanceResult, BalanceStatus, IngredientCatalog,
};
pub use intake::{
    age_in_months, daily_intake_grams, goal_from_intake, resolve_intake_percent,
};
pub use ratios::{apply_ratios, default_ratios, validate_dog, validate_ratios, RatioValidation};
pub use units::{round_to_nearest_half, to_imperial, to_metric, WeightPair, WeightUnit};
