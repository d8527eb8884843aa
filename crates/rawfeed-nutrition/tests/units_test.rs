// ABOUTME: Tests for kg/lb conversion and committed-weight snapping
// ABOUTME: Covers two-decimal rounding, half-kilogram snapping, and field input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use rawfeed_nutrition::units::{
    round_to_nearest_half, round_to_places, to_imperial, to_metric, WeightPair, WeightUnit,
};

#[test]
fn test_to_imperial_rounds_two_decimals() {
    assert_eq!(to_imperial(10.0), 22.05);
    assert_eq!(to_imperial(0.0), 0.0);
    assert_eq!(to_imperial(1.0), 2.2);
}

#[test]
fn test_to_metric_rounds_two_decimals() {
    assert_eq!(to_metric(22.05), 10.0);
    assert_eq!(to_metric(50.0), 22.68);
}

#[test]
fn test_metric_imperial_round_trip_within_a_hundredth() {
    // 0.01 kg .. 250 kg in 0.01 kg steps
    for hundredths in 1..=25_000_u32 {
        let kg = f64::from(hundredths) / 100.0;
        let back = to_metric(to_imperial(kg));
        assert!(
            (back - kg).abs() <= 0.01 + 1e-9,
            "{kg} kg came back as {back} kg"
        );
    }
}

#[test]
fn test_round_to_nearest_half() {
    assert_eq!(round_to_nearest_half(10.2), 10.0);
    assert_eq!(round_to_nearest_half(10.3), 10.5);
    assert_eq!(round_to_nearest_half(10.74), 10.5);
    assert_eq!(round_to_nearest_half(10.75), 11.0);
    assert_eq!(round_to_nearest_half(0.2), 0.0);
}

#[test]
fn test_round_to_places() {
    assert_eq!(round_to_places(1.234_56, 1), 1.2);
    assert_eq!(round_to_places(1.75, 0), 2.0);
    assert_eq!(round_to_places(337.456, 2), 337.46);
}

// ============================================================================
// FIELD INPUT
// ============================================================================

#[test]
fn test_input_in_kilograms_fills_pounds() {
    let pair = WeightPair::from_input(" 10 ", WeightUnit::Kilograms);
    assert_eq!(pair.kg, 10.0);
    assert_eq!(pair.lb, 22.05);
}

#[test]
fn test_input_in_pounds_fills_kilograms() {
    let pair = WeightPair::from_input("22.05", WeightUnit::Pounds);
    assert_eq!(pair, WeightPair { kg: 10.0, lb: 22.05 });
}

#[test]
fn test_interim_input_is_not_snapped() {
    let pair = WeightPair::from_input("10.3", WeightUnit::Kilograms);
    assert_eq!(pair.kg, 10.3);
}

#[test]
fn test_empty_or_invalid_input_clears_to_zero() {
    for text in ["", "   ", "abc", "NaN", "inf", "12kg"] {
        assert_eq!(
            WeightPair::from_input(text, WeightUnit::Kilograms),
            WeightPair::default(),
            "input {text:?}"
        );
    }
}

#[test]
fn test_commit_snaps_and_recomputes_pounds() {
    let committed = WeightPair::from_kg(10.3).commit();
    assert_eq!(committed.kg, 10.5);
    assert_eq!(committed.lb, 23.15);

    let from_pounds = WeightPair::from_input("30", WeightUnit::Pounds).commit();
    // 30 lb = 13.61 kg, snapped to 13.5
    assert_eq!(from_pounds.kg, 13.5);
    assert_eq!(from_pounds.lb, to_imperial(13.5));
}
