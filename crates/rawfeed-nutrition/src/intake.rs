// ABOUTME: Daily intake policy resolving a dog's feeding percentage
// ABOUTME: Applies puppy age brackets, goal presets, and manual overrides in priority order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Policy Module
//!
//! Raw feeding portions are expressed as a percentage of body weight per day.
//! The percentage is resolved in this order:
//!
//! 1. Puppy guidelines, when enabled, the birth date is known, and the dog is
//!    younger than the adult age. The most specific half-open month bracket wins;
//!    ages outside every bracket fall through.
//! 2. The goal preset (maintain 2.5%, gain 3%, lose 2%).
//! 3. For a custom goal, the manual `ratios_intake` percent verbatim.

use crate::config::IntakeConfig;
use chrono::{Datelike, NaiveDate};
use rawfeed_core::constants::units::{GRAMS_PER_KG, MONTHS_PER_YEAR, PERCENT_SCALE};
use rawfeed_core::models::{Dog, Goal};
use tracing::debug;

/// Whole months between a birth date and `today`, floored
///
/// Returns `None` when the birth date is unknown. A birth date after `today`
/// yields a negative count.
#[must_use]
pub fn age_in_months(dob: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    let dob = dob?;
    let year_months = i64::from(today.year() - dob.year()) * i64::from(MONTHS_PER_YEAR);
    let month_delta = i64::from(today.month()) - i64::from(dob.month());
    let mut months = year_months + month_delta;
    if today.day() < dob.day() {
        months -= 1;
    }
    i32::try_from(months).ok()
}

/// Puppy guideline percent for an age, if a bracket covers it
#[must_use]
pub fn puppy_bracket_percent(age_months: i32, config: &IntakeConfig) -> Option<f64> {
    if age_months >= config.adult_age_months {
        return None;
    }
    config
        .puppy_brackets
        .iter()
        .filter(|bracket| bracket.contains(age_months))
        .min_by_key(|bracket| bracket.span())
        .map(|bracket| bracket.percent)
}

/// Preset percent of a goal; `None` for custom goals
#[must_use]
pub const fn goal_preset_percent(goal: Goal, config: &IntakeConfig) -> Option<f64> {
    match goal {
        Goal::Maintain => Some(config.maintain_percent),
        Goal::Gain => Some(config.gain_percent),
        Goal::Lose => Some(config.lose_percent),
        Goal::Custom => None,
    }
}

/// Resolve the dog's current daily intake percent
///
/// Returns `None` only for a custom goal without a stored manual percent.
#[must_use]
pub fn resolve_intake_percent(dog: &Dog, today: NaiveDate, config: &IntakeConfig) -> Option<f64> {
    if dog.use_puppy_guidelines {
        if let Some(percent) =
            age_in_months(dog.dob, today).and_then(|age| puppy_bracket_percent(age, config))
        {
            debug!(dog_id = %dog.dog_id, percent, "Using puppy guideline intake");
            return Some(percent);
        }
    }

    goal_preset_percent(dog.goal, config).or(dog.ratios_intake)
}

/// Goal matching a freehand intake percent
///
/// Exact equality only: any value that is not precisely a preset maps to `Custom`.
#[must_use]
#[allow(clippy::float_cmp)] // Exact preset match is the defined behavior
pub fn goal_from_intake(percent: f64, config: &IntakeConfig) -> Goal {
    if percent == config.maintain_percent {
        Goal::Maintain
    } else if percent == config.gain_percent {
        Goal::Gain
    } else if percent == config.lose_percent {
        Goal::Lose
    } else {
        Goal::Custom
    }
}

/// Daily food amount in grams, rounded to the nearest gram
///
/// Zero or unknown percentages yield `None` so "unknown" stays distinct from zero.
#[must_use]
pub fn daily_intake_grams(weight_kg: f64, percent: Option<f64>) -> Option<f64> {
    unrounded_daily_intake_grams(weight_kg, percent).map(f64::round)
}

pub(crate) fn unrounded_daily_intake_grams(weight_kg: f64, percent: Option<f64>) -> Option<f64> {
    let percent = percent.filter(|p| p.is_finite() && *p != 0.0)?;
    let grams = weight_kg * GRAMS_PER_KG * percent / PERCENT_SCALE;
    grams.is_finite().then_some(grams)
}
