// ABOUTME: Daily intake defaults expressed as percent of body weight per day
// ABOUTME: Goal presets for adult dogs and age-bracket guidelines for puppies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Adult maintenance intake (percent of body weight)
pub const MAINTAIN_INTAKE_PERCENT: f64 = 2.5;

/// Weight-gain intake (percent of body weight)
pub const GAIN_INTAKE_PERCENT: f64 = 3.0;

/// Weight-loss intake (percent of body weight)
pub const LOSE_INTAKE_PERCENT: f64 = 2.0;

/// Age (months) from which puppy guidelines no longer apply
pub const ADULT_AGE_MONTHS: i32 = 12;

/// Puppy guideline brackets as `(from_months, to_months, percent)`, half-open `[from, to)`
pub const PUPPY_BRACKETS: [(i32, i32, f64); 4] = [
    (2, 4, 10.0),
    (4, 6, 8.0),
    (6, 8, 6.0),
    (8, 12, 4.0),
];

/// Upper bound for a manually entered intake percent
pub const MAX_INTAKE_PERCENT: f64 = 100.0;
