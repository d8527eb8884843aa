// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, feeding intake, and ingredient ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Values that operators may tune at runtime are
//! only the defaults here; the rules configuration in `rawfeed-nutrition` starts
//! from them.

/// Goal presets and puppy age-bracket guidelines
pub mod intake;
/// Default ingredient ratio preset and sum tolerances
pub mod ratios;
/// Unit conversion and measurement constants
pub mod units;
