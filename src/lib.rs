// ABOUTME: Main library entry point for the rawfeed raw-feeding diet planner
// ABOUTME: Wires the nutrition rules engine to an in-memory catalog, recipe tracking, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rawfeed
//!
//! Runtime surface of the raw-feeding planner. The rules themselves live in
//! `rawfeed-nutrition`; this crate adds the pieces an application needs around
//! them.
//!
//! ## Architecture
//!
//! - **catalog**: in-memory ingredient/nutrient catalog loadable from JSON fixtures
//! - **recipe**: versioned recipe drafts and the balance tracker that discards stale rechecks
//! - **logging**: structured `tracing` setup driven by environment variables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rawfeed::catalog::{CatalogFixture, InMemoryCatalog};
//! use rawfeed::recipe::BalanceTracker;
//! use rawfeed::errors::AppResult;
//! use rawfeed::models::IngredientId;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let fixture = CatalogFixture::load("catalog.json").await?;
//!     let catalog = InMemoryCatalog::from_fixture(fixture);
//!
//!     let mut tracker = BalanceTracker::new();
//!     if let Some(ingredient) = catalog.ingredient(IngredientId(1)).await {
//!         tracker.add_ingredient(&ingredient, 250.0);
//!     }
//!     let check = tracker.recheck(&catalog).await;
//!     println!("balanced: {}", check.is_balanced());
//!     Ok(())
//! }
//! ```

/// In-memory ingredient catalog
pub mod catalog;

/// Structured logging configuration
pub mod logging;

/// Recipe drafts and versioned balance tracking
pub mod recipe;

/// Re-export of the shared error types
pub use rawfeed_core::errors;

/// Re-export of the domain models
pub use rawfeed_core::models;

/// Re-export of the rules engine
pub use rawfeed_nutrition as nutrition;
