// ABOUTME: Batch planning between "kilograms to prepare" and "days that batch lasts"
// ABOUTME: Pure conversions plus a small editor state that keeps both fields linked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Batch Calculator
//!
//! Relation: `batch_size_kg * 1000 = daily_intake_grams * number_of_days`.
//! A zero or unknown daily intake makes both directions unavailable.

use crate::units::round_to_places;
use rawfeed_core::constants::units::GRAMS_PER_KG;
use serde::{Deserialize, Serialize};

fn usable_daily_intake(daily_intake_grams: Option<f64>) -> Option<f64> {
    daily_intake_grams.filter(|grams| grams.is_finite() && *grams > 0.0)
}

/// Days a batch covers, rounded to whole days
#[must_use]
pub fn days_from_batch(batch_size_kg: f64, daily_intake_grams: Option<f64>) -> Option<f64> {
    let daily = usable_daily_intake(daily_intake_grams)?;
    let days = (batch_size_kg * GRAMS_PER_KG / daily).round();
    days.is_finite().then_some(days)
}

/// Kilograms to prepare for a number of days, rounded to 2 decimals
#[must_use]
pub fn batch_from_days(number_of_days: f64, daily_intake_grams: Option<f64>) -> Option<f64> {
    let daily = usable_daily_intake(daily_intake_grams)?;
    let kg = round_to_places(number_of_days * daily / GRAMS_PER_KG, 2);
    kg.is_finite().then_some(kg)
}

/// Values currently shown in the two batch fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BatchFields {
    /// Batch size (kg); `None` renders as empty or unavailable
    pub batch_size_kg: Option<f64>,
    /// Number of days; `None` renders as empty or unavailable
    pub number_of_days: Option<f64>,
}

/// Linked editor state for the batch size and day count fields
///
/// Editing one field recomputes the other. Clearing a field leaves the other
/// field at its last valid value instead of zeroing it.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlanner {
    daily_intake_grams: Option<f64>,
    fields: BatchFields,
    last_batch_size_kg: Option<f64>,
    last_number_of_days: Option<f64>,
}

impl BatchPlanner {
    /// Start with empty fields for a dog's daily intake
    #[must_use]
    pub const fn new(daily_intake_grams: Option<f64>) -> Self {
        Self {
            daily_intake_grams,
            fields: BatchFields {
                batch_size_kg: None,
                number_of_days: None,
            },
            last_batch_size_kg: None,
            last_number_of_days: None,
        }
    }

    /// Whether conversions can be computed at all
    #[must_use]
    pub fn is_available(&self) -> bool {
        usable_daily_intake(self.daily_intake_grams).is_some()
    }

    /// Current field values
    #[must_use]
    pub const fn fields(&self) -> BatchFields {
        self.fields
    }

    /// Edit the batch size; `None` means the field was cleared
    pub fn edit_batch_size(&mut self, batch_size_kg: Option<f64>) -> BatchFields {
        match batch_size_kg.filter(|kg| kg.is_finite() && *kg >= 0.0) {
            Some(kg) => {
                self.fields.batch_size_kg = Some(kg);
                self.last_batch_size_kg = Some(kg);
                self.fields.number_of_days = days_from_batch(kg, self.daily_intake_grams);
                if self.fields.number_of_days.is_some() {
                    self.last_number_of_days = self.fields.number_of_days;
                }
            }
            None => {
                self.fields.batch_size_kg = None;
                self.fields.number_of_days = self.last_number_of_days;
            }
        }
        self.fields
    }

    /// Edit the day count; `None` means the field was cleared
    pub fn edit_days(&mut self, number_of_days: Option<f64>) -> BatchFields {
        match number_of_days.filter(|days| days.is_finite() && *days >= 0.0) {
            Some(days) => {
                self.fields.number_of_days = Some(days);
                self.last_number_of_days = Some(days);
                self.fields.batch_size_kg = batch_from_days(days, self.daily_intake_grams);
                if self.fields.batch_size_kg.is_some() {
                    self.last_batch_size_kg = self.fields.batch_size_kg;
                }
            }
            None => {
                self.fields.number_of_days = None;
                self.fields.batch_size_kg = self.last_batch_size_kg;
            }
        }
        self.fields
    }

    /// Replace the daily intake (e.g. after a weight or goal change) and
    /// recompute the day count from the current batch size
    pub fn set_daily_intake(&mut self, daily_intake_grams: Option<f64>) -> BatchFields {
        self.daily_intake_grams = daily_intake_grams;
        if let Some(kg) = self.fields.batch_size_kg {
            self.fields.number_of_days = days_from_batch(kg, daily_intake_grams);
            if self.fields.number_of_days.is_some() {
                self.last_number_of_days = self.fields.number_of_days;
            }
        }
        self.fields
    }
}
