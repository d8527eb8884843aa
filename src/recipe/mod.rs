// ABOUTME: Recipe editing state for incremental ingredient changes
// ABOUTME: Re-exports the versioned draft and the balance tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Versioned ingredient list
pub mod draft;

/// Balance tracking with stale-result rejection
pub mod tracker;

pub use draft::{DraftLine, RecipeDraft};
pub use tracker::{BalanceTracker, RecheckOutcome, RecheckTicket};
