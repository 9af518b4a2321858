// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use tracing::debug;

use crate::alphabet::RuleSet;
use crate::memo::ProductTable;

/// Immutable precomputed data (Tier 1: MEMO).
///
/// This data is computed once when a SearchContext is created and never
/// changes afterwards, whatever target is decomposed.
///
/// # Size
///
/// With the default ceiling the product table holds 37 products and 260
/// groups (68 groups under overflow-only rules): a few KB.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Every single-group product up to the configured ceiling.
    pub products: ProductTable,

    /// Largest product any group can reach, whatever the ceiling.
    pub max_product: u32,
}

impl MemoizedData {
    /// Initialize all MEMO data structures.
    pub fn new(ceiling: u32, rules: RuleSet) -> Self {
        debug!(ceiling, %rules, "initializing product table");

        let products = ProductTable::enumerate(ceiling, rules);
        let max_product = ProductTable::max_product(rules);

        debug!(
            products = products.len(),
            groups = products.group_count(),
            max_product,
            "product table complete"
        );

        Self {
            products,
            max_product,
        }
    }
}
