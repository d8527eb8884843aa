// ABOUTME: Unit conversion constants for weight and percentage arithmetic
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pounds per kilogram conversion factor
pub const LB_PER_KG: f64 = 2.204_62;

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Divisor turning a percentage into a fraction
pub const PERCENT_SCALE: f64 = 100.0;

/// Months per year
pub const MONTHS_PER_YEAR: i32 = 12;
