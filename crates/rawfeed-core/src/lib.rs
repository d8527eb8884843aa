// ABOUTME: Core types and constants for the rawfeed raw-feeding diet planner
// ABOUTME: Foundation crate with error handling, validation issues, constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rawfeed Core
//!
//! Foundation crate providing shared types and constants for the rawfeed
//! raw-feeding planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and structured validation issues
//! - **constants**: Unit factors, goal intake presets, and default ingredient ratios
//! - **models**: `Dog`, `Ingredient`, `NutrientGroup`, `RecipeIngredient` and their identifiers

/// Unified error handling system with standard error codes and validation issues
pub mod errors;

/// Domain constants (unit conversion, intake presets, default ratios)
pub mod constants;

/// Core data models (Dog, Ingredient, Nutrient, Recipe)
pub mod models;
