// ABOUTME: Tests for daily intake resolution, puppy brackets, and age calculation
// ABOUTME: Covers goal presets, custom intake, bracket boundaries, and unknown intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use rawfeed_core::models::{Dog, Goal};
use rawfeed_nutrition::config::IntakeConfig;
use rawfeed_nutrition::intake::{
    age_in_months, daily_intake_grams, goal_from_intake, goal_preset_percent,
    puppy_bracket_percent, resolve_intake_percent,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 15)
}

// ============================================================================
// GOAL PRESETS
// ============================================================================

#[test]
fn test_goal_presets() {
    let config = IntakeConfig::default();
    let cases = [
        (Goal::Maintain, 500.0),
        (Goal::Gain, 600.0),
        (Goal::Lose, 400.0),
    ];
    for (goal, expected) in cases {
        let dog = Dog::new(20.0, goal);
        let percent = resolve_intake_percent(&dog, today(), &config);
        assert_eq!(daily_intake_grams(dog.weight_metric, percent), Some(expected));
    }
}

#[test]
fn test_goal_preset_ignores_stale_manual_percent() {
    let config = IntakeConfig::default();
    let mut dog = Dog::new(20.0, Goal::Maintain);
    dog.ratios_intake = Some(4.0);
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(2.5));
}

#[test]
fn test_custom_intake_used_verbatim() {
    let config = IntakeConfig::default();
    let dog = Dog::new(20.0, Goal::Maintain).with_custom_intake(4.0);
    let percent = resolve_intake_percent(&dog, today(), &config);
    assert_eq!(percent, Some(4.0));
    assert_eq!(daily_intake_grams(20.0, percent), Some(800.0));
}

#[test]
fn test_custom_goal_without_percent_is_unknown() {
    let config = IntakeConfig::default();
    let dog = Dog::new(20.0, Goal::Custom);
    assert_eq!(resolve_intake_percent(&dog, today(), &config), None);
    assert_eq!(goal_preset_percent(Goal::Custom, &config), None);
}

#[test]
fn test_daily_intake_zero_or_missing_percent() {
    assert_eq!(daily_intake_grams(20.0, None), None);
    assert_eq!(daily_intake_grams(20.0, Some(0.0)), None);
}

#[test]
fn test_daily_intake_rounds_to_whole_grams() {
    // 13.3 kg * 2.5% = 332.5 g
    assert_eq!(daily_intake_grams(13.3, Some(2.5)), Some(333.0));
}

// ============================================================================
// PUPPY GUIDELINES
// ============================================================================

#[test]
fn test_puppy_bracket_applies_before_goal() {
    let config = IntakeConfig::default();
    let dog = Dog::new(10.0, Goal::Lose)
        .with_dob(date(2024, 3, 1))
        .with_puppy_guidelines(true);
    // 3 months old
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(10.0));
    assert_eq!(
        daily_intake_grams(10.0, resolve_intake_percent(&dog, today(), &config)),
        Some(1000.0)
    );
}

#[test]
fn test_puppy_bracket_boundaries_are_half_open() {
    let config = IntakeConfig::default();
    assert_eq!(puppy_bracket_percent(2, &config), Some(10.0));
    assert_eq!(puppy_bracket_percent(4, &config), Some(8.0));
    assert_eq!(puppy_bracket_percent(6, &config), Some(6.0));
    assert_eq!(puppy_bracket_percent(8, &config), Some(4.0));
    assert_eq!(puppy_bracket_percent(11, &config), Some(4.0));
    assert_eq!(puppy_bracket_percent(12, &config), None);
}

#[test]
fn test_young_puppy_outside_brackets_falls_through() {
    let config = IntakeConfig::default();
    assert_eq!(puppy_bracket_percent(1, &config), None);

    let dog = Dog::new(3.0, Goal::Gain)
        .with_dob(date(2024, 5, 10))
        .with_puppy_guidelines(true);
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(3.0));
}

#[test]
fn test_adult_dog_ignores_puppy_flag() {
    let config = IntakeConfig::default();
    let dog = Dog::new(20.0, Goal::Maintain)
        .with_dob(date(2022, 1, 1))
        .with_puppy_guidelines(true);
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(2.5));
}

#[test]
fn test_puppy_flag_without_dob_falls_through() {
    let config = IntakeConfig::default();
    let dog = Dog::new(5.0, Goal::Maintain).with_puppy_guidelines(true);
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(2.5));
}

#[test]
fn test_puppy_flag_disabled() {
    let config = IntakeConfig::default();
    let dog = Dog::new(5.0, Goal::Maintain).with_dob(date(2024, 3, 1));
    assert_eq!(resolve_intake_percent(&dog, today(), &config), Some(2.5));
}

// ============================================================================
// AGE AND GOAL INFERENCE
// ============================================================================

#[test]
fn test_age_in_months_floors_partial_months() {
    assert_eq!(age_in_months(Some(date(2024, 2, 15)), today()), Some(4));
    assert_eq!(age_in_months(Some(date(2024, 2, 16)), today()), Some(3));
    assert_eq!(age_in_months(Some(date(2023, 6, 15)), today()), Some(12));
    assert_eq!(age_in_months(None, today()), None);
}

#[test]
fn test_future_dob_is_negative_and_not_puppy() {
    let config = IntakeConfig::default();
    let age = age_in_months(Some(date(2024, 9, 1)), today()).unwrap();
    assert!(age < 0);
    assert_eq!(puppy_bracket_percent(age, &config), None);
}

#[test]
fn test_goal_from_intake_exact_match_only() {
    let config = IntakeConfig::default();
    assert_eq!(goal_from_intake(2.5, &config), Goal::Maintain);
    assert_eq!(goal_from_intake(3.0, &config), Goal::Gain);
    assert_eq!(goal_from_intake(2.0, &config), Goal::Lose);
    assert_eq!(goal_from_intake(2.51, &config), Goal::Custom);
    assert_eq!(goal_from_intake(2.499, &config), Goal::Custom);
}
