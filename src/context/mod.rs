// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the immutable product table
//! - Tier 2 (DYNAMIC): the sum table, grown as larger targets arrive
//!
//! plus the configuration it was built from and cumulative statistics.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::config::SearchConfig;
use crate::search::{self, DecomposeError, Solution};
use crate::state::statistics::Statistics;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     config: SearchConfig,      // fixed at construction
///     memo: MemoizedData,        // Tier 1: immutable
///     state: DynamicState,       // Tier 2: grows monotonically
///     statistics: Statistics,    // cumulative counters
/// }
/// ```
///
/// # Example
///
/// ```
/// use divide_chain::context::SearchContext;
/// use divide_chain::config::SearchConfig;
///
/// let mut ctx = SearchContext::new(SearchConfig::default()).unwrap();
/// let solution = ctx.decompose(312).unwrap();
/// assert_eq!(solution.decomposition.evaluate(), 312);
/// assert!(solution.cost < 312);
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub config: SearchConfig,
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Growable search state (Tier 2)
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context, rejecting configurations that would drop groups.
    pub fn new(config: SearchConfig) -> Result<Self, DecomposeError> {
        let memo = MemoizedData::new(config.product_ceiling, config.rules);
        Self::with_memo(config, memo)
    }

    /// Create a context around existing MEMO data.
    ///
    /// `memo` must have been built for `config.rules`, and neither the
    /// configured ceiling nor the one `memo` was built with may drop groups.
    pub fn with_memo(config: SearchConfig, memo: MemoizedData) -> Result<Self, DecomposeError> {
        config.validate()?;
        if memo.products.rules() != config.rules {
            return Err(DecomposeError::RulesMismatch {
                config: config.rules,
                memo: memo.products.rules(),
            });
        }
        let ceiling = config.product_ceiling.min(memo.products.ceiling());
        if ceiling < memo.max_product {
            return Err(DecomposeError::CeilingTooLow {
                ceiling,
                required: memo.max_product,
            });
        }
        Ok(Self {
            config,
            memo,
            state: DynamicState::new(),
            statistics: Statistics::new(),
        })
    }

    /// Decompose one target with this context.
    pub fn decompose(&mut self, target: u32) -> Result<Solution, DecomposeError> {
        search::decompose_in(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::RuleSet;

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(SearchConfig::default()).unwrap();
        assert_eq!(ctx.memo.products.len(), 37);
        assert_eq!(ctx.memo.max_product, 800);
        assert_eq!(ctx.state.sums.limit(), 0);
    }

    #[test]
    fn test_ceiling_too_low_is_rejected() {
        let err = SearchContext::new(SearchConfig::default().with_product_ceiling(240)).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::CeilingTooLow {
                ceiling: 240,
                required: 800
            }
        );
    }

    #[test]
    fn test_larger_ceiling_is_accepted() {
        let ctx = SearchContext::new(SearchConfig::default().with_product_ceiling(5000)).unwrap();
        assert_eq!(ctx.memo.products.largest_product(), Some(800));
    }

    #[test]
    fn test_with_memo_shares_tables() {
        let config = SearchConfig::default().with_rules(RuleSet::Overflow);
        let memo = MemoizedData::new(config.product_ceiling, config.rules);
        let mut ctx1 = SearchContext::with_memo(config, memo.clone()).unwrap();
        let mut ctx2 = SearchContext::with_memo(config, memo).unwrap();
        assert_eq!(
            ctx1.decompose(517).unwrap().cost,
            ctx2.decompose(517).unwrap().cost
        );
    }

    #[test]
    fn test_with_memo_rejects_low_memo_ceiling() {
        let memo = MemoizedData::new(100, RuleSet::EarlyTermination);
        let err = SearchContext::with_memo(SearchConfig::default(), memo).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::CeilingTooLow {
                ceiling: 100,
                required: 800
            }
        );
    }

    #[test]
    fn test_with_memo_rejects_other_rules() {
        let memo = MemoizedData::new(800, RuleSet::Overflow);
        let err = SearchContext::with_memo(SearchConfig::default(), memo).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::RulesMismatch {
                config: RuleSet::EarlyTermination,
                memo: RuleSet::Overflow
            }
        );
    }

    #[test]
    fn test_with_memo_matches_fresh_context() {
        let memo = MemoizedData::new(800, RuleSet::EarlyTermination);
        let mut shared = SearchContext::with_memo(SearchConfig::default(), memo).unwrap();
        let mut fresh = SearchContext::new(SearchConfig::default()).unwrap();
        for target in [8, 1000] {
            assert_eq!(shared.decompose(target), fresh.decompose(target));
        }
        assert_eq!(shared.decompose(1000).unwrap().cost, 9);
        assert_eq!(shared.decompose(8).unwrap().cost, 4);
    }

    #[test]
    fn test_zero_multiplier_bound_is_rejected() {
        let config = SearchConfig::default().with_max_outer_multiplier(0);
        assert_eq!(
            SearchContext::new(config).unwrap_err(),
            DecomposeError::InvalidSearchBound {
                name: "max_outer_multiplier"
            }
        );
    }

    #[test]
    fn test_sum_table_grows_with_targets() {
        let mut ctx = SearchContext::new(SearchConfig::default()).unwrap();
        ctx.decompose(100).unwrap();
        assert_eq!(ctx.state.sums.limit(), 99);
        ctx.decompose(50).unwrap();
        assert_eq!(ctx.state.sums.limit(), 99);
        ctx.decompose(312).unwrap();
        assert_eq!(ctx.state.sums.limit(), 311);
    }
}
