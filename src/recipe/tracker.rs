// ABOUTME: Versioned balance tracking for a recipe under incremental edits
// ABOUTME: Applies optimistic category deltas and accepts only rechecks for the current version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Balance tracking
//!
//! Adding an ingredient applies the synchronous category delta right away. The
//! authoritative verdict comes from an async recheck tagged with the draft
//! version it was computed for; a recheck for any other version is stale and
//! dropped, so the last recompute of the current ingredient set always wins.

use super::draft::RecipeDraft;
use rawfeed_core::models::{Ingredient, IngredientId, RecipeId, RecipeIngredient};
use rawfeed_nutrition::coverage::{
    apply_added_ingredient, check_balance_or_unknown, BalanceCheck, BalanceResult, BalanceStatus,
    IngredientCatalog,
};
use tracing::{debug, warn};

/// Snapshot of an ingredient set to recheck
#[derive(Debug, Clone, PartialEq)]
pub struct RecheckTicket {
    version: u64,
    lines: Vec<RecipeIngredient>,
}

impl RecheckTicket {
    /// Draft version this ticket was issued for
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Lines captured at issue time
    #[must_use]
    pub fn lines(&self) -> &[RecipeIngredient] {
        &self.lines
    }

    /// Run the balance check for the captured lines
    ///
    /// Owns its snapshot, so it can run on another task while the draft keeps
    /// changing.
    pub async fn run<C>(self, catalog: &C) -> RecheckOutcome
    where
        C: IngredientCatalog + ?Sized,
    {
        let check = check_balance_or_unknown(catalog, &self.lines).await;
        RecheckOutcome {
            version: self.version,
            check,
        }
    }
}

/// Verdict computed for a specific draft version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecheckOutcome {
    /// Draft version the verdict belongs to
    pub version: u64,
    /// The verdict
    pub check: BalanceCheck,
}

/// Recipe draft plus its most recent balance verdict
#[derive(Debug, Clone)]
pub struct BalanceTracker {
    draft: RecipeDraft,
    check: BalanceCheck,
    checked_version: u64,
}

impl Default for BalanceTracker {
    fn default() -> Self {
        Self::from_draft(RecipeDraft::default())
    }
}

impl BalanceTracker {
    /// Tracker for a new, empty recipe
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for an existing draft
    ///
    /// An empty draft starts with the known empty-recipe verdict; a non-empty
    /// one starts pending until its first recheck lands.
    #[must_use]
    pub fn from_draft(draft: RecipeDraft) -> Self {
        let (check, checked_version) = if draft.is_empty() {
            (BalanceCheck::Known(BalanceResult::empty_recipe()), draft.version())
        } else {
            (BalanceCheck::Pending, draft.version().saturating_sub(1))
        };
        Self {
            draft,
            check,
            checked_version,
        }
    }

    /// Recipe being tracked
    #[must_use]
    pub const fn recipe_id(&self) -> RecipeId {
        self.draft.recipe_id()
    }

    /// The draft being edited
    #[must_use]
    pub const fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Latest verdict, optimistic or authoritative
    #[must_use]
    pub const fn check(&self) -> &BalanceCheck {
        &self.check
    }

    /// Display status of the latest verdict
    #[must_use]
    pub const fn status(&self) -> BalanceStatus {
        self.check.status()
    }

    /// Whether the draft changed since the last accepted recheck
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.checked_version != self.draft.version()
    }

    /// Ticket for the current ingredient set
    #[must_use]
    pub fn ticket(&self) -> RecheckTicket {
        RecheckTicket {
            version: self.draft.version(),
            lines: self.draft.lines().to_vec(),
        }
    }

    /// Add an ingredient and apply its category delta immediately
    ///
    /// Without a known verdict to patch, the check stays as it is.
    pub fn add_ingredient(&mut self, ingredient: &Ingredient, quantity_grams: f64) -> RecheckTicket {
        let version = self.draft.add(ingredient.ingredient_id, quantity_grams);
        if let BalanceCheck::Known(result) = &self.check {
            self.check = BalanceCheck::Known(apply_added_ingredient(result, ingredient));
        }
        debug!(
            recipe_id = %self.draft.recipe_id(),
            ingredient_id = %ingredient.ingredient_id,
            version,
            "Ingredient added, optimistic balance applied"
        );
        self.ticket()
    }

    /// Remove an ingredient; `None` if it was not in the recipe
    ///
    /// What the removed ingredient covered is only known to the catalog, so
    /// the verdict is pending until the recheck for the new version lands.
    pub fn remove_ingredient(&mut self, ingredient_id: IngredientId) -> Option<RecheckTicket> {
        let version = self.draft.remove(ingredient_id)?;
        if self.draft.is_empty() {
            self.check = BalanceCheck::Known(BalanceResult::empty_recipe());
            self.checked_version = version;
        } else {
            self.check = BalanceCheck::Pending;
        }
        debug!(
            recipe_id = %self.draft.recipe_id(),
            ingredient_id = %ingredient_id,
            version,
            "Ingredient removed"
        );
        Some(self.ticket())
    }

    /// Accept a recheck outcome if it belongs to the current version
    ///
    /// Returns `false` for stale outcomes, which are dropped.
    pub fn apply(&mut self, outcome: RecheckOutcome) -> bool {
        let current = self.draft.version();
        if outcome.version != current {
            warn!(
                recipe_id = %self.draft.recipe_id(),
                outcome_version = outcome.version,
                current_version = current,
                "Discarding stale balance recheck"
            );
            return false;
        }
        self.check = outcome.check;
        self.checked_version = current;
        true
    }

    /// Recheck the current ingredient set against the catalog and apply it
    pub async fn recheck<C>(&mut self, catalog: &C) -> &BalanceCheck
    where
        C: IngredientCatalog + ?Sized,
    {
        let outcome = self.ticket().run(catalog).await;
        self.apply(outcome);
        &self.check
    }
}
