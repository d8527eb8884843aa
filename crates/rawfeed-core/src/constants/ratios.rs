// ABOUTME: Default ingredient ratio preset and the tolerances used to validate ratio sums
// ABOUTME: Fractions are stored in [0, 1]; percentages are derived for display and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default muscle meat fraction
pub const DEFAULT_MUSCLE_MEAT: f64 = 0.55;

/// Default bone fraction
pub const DEFAULT_BONE: f64 = 0.10;

/// Default plant matter fraction
pub const DEFAULT_PLANT_MATTER: f64 = 0.25;

/// Default liver fraction
pub const DEFAULT_LIVER: f64 = 0.05;

/// Default secreting organ fraction
pub const DEFAULT_SECRETING_ORGAN: f64 = 0.05;

/// Allowed distance (percentage points) between the rounded ratio total and 100
///
/// 0.01 points is the ±0.0001 fraction band a persisted ratio set must stay in.
pub const RATIO_SUM_TOLERANCE_PERCENT: f64 = 0.01;
