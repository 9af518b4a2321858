// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum-cost combination of groups for every sum.
//!
//! `best[s]` is the cheapest way to write `s` as a sum of group products,
//! where the cost of a combination is the total length of its groups:
//!
//! ```text
//! best[0] = empty, cost 0
//! best[s] = min over products p <= s, groups g of p, best[s - p] defined:
//!           cost(best[s - p]) + len(g)
//! ```
//!
//! Ties on cost are broken by the smaller number of groups (each extra group
//! costs a separator downstream), then by first found in ascending product
//! order. Entries keep a back-pointer rather than the full sequence, so the
//! table is linear in the largest sum and can be extended in place.

use crate::alphabet::{Group, GroupMode};
use crate::memo::ProductTable;

/// Cost summary of the best combination for one sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumEntry {
    /// Total length of the groups.
    pub cost: u32,
    /// Number of groups.
    pub group_count: u32,
    pub used_overflow: bool,
    pub used_early_termination: bool,
    /// Last group chosen as (product, index into the product's groups).
    step: Option<(u32, usize)>,
}

impl SumEntry {
    fn empty() -> Self {
        Self {
            cost: 0,
            group_count: 0,
            used_overflow: false,
            used_early_termination: false,
            step: None,
        }
    }

    fn beats(&self, other: &SumEntry) -> bool {
        (self.cost, self.group_count) < (other.cost, other.group_count)
    }
}

/// A reconstructed minimum-cost combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub groups: Vec<Group>,
    pub cost: u32,
    pub used_overflow: bool,
    pub used_early_termination: bool,
}

/// Growable table of minimum-cost combinations for sums `0..=limit`.
#[derive(Debug, Clone)]
pub struct SumTable {
    entries: Vec<Option<SumEntry>>,
}

impl SumTable {
    /// A table covering only the empty sum.
    pub fn new() -> Self {
        Self {
            entries: vec![Some(SumEntry::empty())],
        }
    }

    /// Build a table for all sums up to `limit`.
    pub fn build(limit: u32, products: &ProductTable) -> Self {
        let mut table = Self::new();
        table.extend_to(limit, products);
        table
    }

    /// Largest sum covered.
    pub fn limit(&self) -> u32 {
        (self.entries.len() - 1) as u32
    }

    /// Extend the table so it covers every sum up to `limit`.
    ///
    /// Entries already computed are kept; `products` must be the table the
    /// existing entries were computed from.
    pub fn extend_to(&mut self, limit: u32, products: &ProductTable) {
        let start = self.limit() + 1;
        if start > limit {
            return;
        }
        self.entries.reserve((limit - start + 1) as usize);
        for sum in start..=limit {
            let entry = self.best_entry(sum, products);
            self.entries.push(entry);
        }
    }

    /// Cost summary for `sum`, or None if it is unreachable or not covered.
    pub fn entry(&self, sum: u32) -> Option<&SumEntry> {
        self.entries.get(sum as usize).and_then(Option::as_ref)
    }

    /// Reconstruct the best combination for `sum`.
    ///
    /// Returns None for unreachable sums and for sums beyond [`limit`].
    ///
    /// [`limit`]: SumTable::limit
    pub fn min_cost(&self, sum: u32, products: &ProductTable) -> Option<Combination> {
        let summary = *self.entry(sum)?;
        let mut groups = Vec::with_capacity(summary.group_count as usize);
        let mut remaining = sum;
        let mut step = summary.step;
        while let Some((product, index)) = step {
            groups.push(products.groups(product)[index].clone());
            remaining -= product;
            step = self.entry(remaining)?.step;
        }
        groups.reverse();

        Some(Combination {
            groups,
            cost: summary.cost,
            used_overflow: summary.used_overflow,
            used_early_termination: summary.used_early_termination,
        })
    }

    fn best_entry(&self, sum: u32, products: &ProductTable) -> Option<SumEntry> {
        let mut best: Option<SumEntry> = None;
        for (product, groups) in products.products_up_to(sum) {
            let Some(previous) = self.entry(sum - product) else {
                continue;
            };
            for (index, group) in groups.iter().enumerate() {
                let mode = group.mode();
                let candidate = SumEntry {
                    cost: previous.cost + group.cost(),
                    group_count: previous.group_count + 1,
                    used_overflow: previous.used_overflow || mode == GroupMode::Overflow,
                    used_early_termination: previous.used_early_termination
                        || mode == GroupMode::EarlyTerminated,
                    step: Some((product, index)),
                };
                if best.as_ref().map_or(true, |current| candidate.beats(current)) {
                    best = Some(candidate);
                }
            }
        }
        best
    }
}

impl Default for SumTable {
    fn default() -> Self {
        Self::new()
    }
}
