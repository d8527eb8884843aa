// ABOUTME: Caller-correctable validation issues for dog profiles and ratio edits
// ABOUTME: Issues are collected into a report instead of failing on the first problem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde::Serialize;
use std::fmt;

/// A single structured rejection reason
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Body weight must be strictly positive
    WeightNotPositive {
        /// Rejected weight (kg)
        weight_kg: f64,
    },
    /// Daily intake percent must lie in (0, 100]
    IntakeOutOfRange {
        /// Rejected intake percent
        percent: f64,
    },
    /// A single ratio fraction must lie in [0, 1]
    RatioOutOfRange {
        /// Ratio field name
        field: &'static str,
        /// Rejected fraction
        value: f64,
    },
    /// The five ratio fractions must add up to 100%
    RatioSumInvalid {
        /// Achieved total, rounded to one decimal
        total_percent: f64,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightNotPositive { weight_kg } => {
                write!(f, "weight must be greater than 0 kg, got {weight_kg}")
            }
            Self::IntakeOutOfRange { percent } => {
                write!(f, "daily intake must be in (0, 100]%, got {percent}%")
            }
            Self::RatioOutOfRange { field, value } => {
                write!(f, "{field} ratio must be between 0 and 1, got {value}")
            }
            Self::RatioSumInvalid { total_percent } => {
                write!(f, "ratios must add up to 100%, currently {total_percent}%")
            }
        }
    }
}

impl From<ValidationIssue> for AppError {
    fn from(issue: ValidationIssue) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, issue.to_string())
    }
}

/// Every issue found while validating one value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Issues in the order they were detected
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Record an issue
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// True when nothing was rejected
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Convert into a `Result`, keeping the report as the error value
    ///
    /// # Errors
    ///
    /// Returns the report itself when it contains at least one issue
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        let message = report
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(ErrorCode::ValueOutOfRange, message)
    }
}
