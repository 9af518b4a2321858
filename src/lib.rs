// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for minimum-slot divide-by chains.
//!
//! A target number `t` of modifier copies is produced by a chain of
//! divide-by groups drawn from the alphabet `{10, 4, 3, 2}`, wrapped in an
//! affine step:
//!
//! ```text
//! t = (Σ group products + 1) × outer_multiplier + outer_addition
//! ```
//!
//! Every primitive, separator, increment, multiplier unit, terminal step and
//! addition unit occupies one slot. This crate finds the cheapest chain.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - The product table: every product a single group can reach, with the
//!   groups realising it (37 products from 260 groups by default)
//!
//! ## Tier 2: DYNAMIC Data (Growable)
//!
//! - The sum table: minimum-cost group combinations for every sum up to the
//!   largest target seen so far, extended in place
//!
//! # Search Algorithm
//!
//! 1. **Enumerate** all groups of length 1 to 4 (`memo::products`)
//! 2. **Combine** groups into minimum-cost sums by dynamic programming
//!    (`memo::sums`)
//! 3. **Search** the affine wrapper for the cheapest candidate (`search`)
//! 4. **Render** the winner as an expression or as tokens (`render`)
//!
//! # Example
//!
//! ```
//! let solution = divide_chain::decompose(312).unwrap();
//! assert_eq!(solution.cost, 9);
//! assert_eq!(
//!     divide_chain::render::token_list(&solution.decomposition),
//!     "DIVIDE_10,DIVIDE_10,DIVIDE_3,ADD_TRIGGER,DIVIDE_10,ADD_TRIGGER,modifier,BLOOD_MAGIC,modifier"
//! );
//! ```

pub mod alphabet;
pub mod config;
pub mod context;
pub mod memo;
pub mod render;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use alphabet::{Group, GroupMode, Primitive, RuleSet};
pub use config::SearchConfig;
pub use context::SearchContext;
pub use search::{DecomposeError, Decomposition, Solution};

/// Decompose a single target with the default configuration.
///
/// Builds a fresh context; use [`SearchContext`] directly to decompose many
/// targets against the same tables.
pub fn decompose(target: u32) -> Result<Solution, DecomposeError> {
    SearchContext::new(SearchConfig::default())?.decompose(target)
}
