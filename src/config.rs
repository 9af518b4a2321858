// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! The affine search is exhaustive only within
//! `1..=max_outer_multiplier` × `0..=max_outer_addition`; results are optimal
//! within that space and nothing more is claimed.

use serde::Serialize;

use crate::alphabet::{
    RuleSet, DEFAULT_MAX_OUTER_ADDITION, DEFAULT_MAX_OUTER_MULTIPLIER, DEFAULT_MAX_TARGET,
    DEFAULT_PRODUCT_CEILING, DEFAULT_TRIVIAL_THRESHOLD,
};
use crate::search::DecomposeError;

/// Parameters of one search context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Largest single-group product kept in the product table.
    pub product_ceiling: u32,
    /// Largest outer multiplier tried.
    pub max_outer_multiplier: u32,
    /// Largest outer addition tried.
    pub max_outer_addition: u32,
    /// Targets up to this value are answered with plain modifiers.
    pub trivial_threshold: u32,
    /// Largest target accepted.
    pub max_target: u32,
    /// Placement rules used to classify groups.
    pub rules: RuleSet,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_ceiling(mut self, ceiling: u32) -> Self {
        self.product_ceiling = ceiling;
        self
    }

    pub fn with_max_outer_multiplier(mut self, bound: u32) -> Self {
        self.max_outer_multiplier = bound;
        self
    }

    pub fn with_max_outer_addition(mut self, bound: u32) -> Self {
        self.max_outer_addition = bound;
        self
    }

    pub fn with_trivial_threshold(mut self, threshold: u32) -> Self {
        self.trivial_threshold = threshold;
        self
    }

    pub fn with_max_target(mut self, max_target: u32) -> Self {
        self.max_target = max_target;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check that the search space is non-empty.
    ///
    /// The ceiling is checked against the product table when a context is
    /// built, see [`SearchContext::new`](crate::context::SearchContext::new).
    pub fn validate(&self) -> Result<(), DecomposeError> {
        if self.max_outer_multiplier == 0 {
            return Err(DecomposeError::InvalidSearchBound {
                name: "max_outer_multiplier",
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            product_ceiling: DEFAULT_PRODUCT_CEILING,
            max_outer_multiplier: DEFAULT_MAX_OUTER_MULTIPLIER,
            max_outer_addition: DEFAULT_MAX_OUTER_ADDITION,
            trivial_threshold: DEFAULT_TRIVIAL_THRESHOLD,
            max_target: DEFAULT_MAX_TARGET,
            rules: RuleSet::EarlyTermination,
        }
    }
}
