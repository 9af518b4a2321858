// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The helpers here recompute everything from raw values so that a solution
//! is checked against arithmetic rather than against the crate's own
//! bookkeeping.

#![allow(dead_code)]

use std::collections::HashMap;

use divide_chain::render;
use divide_chain::{GroupMode, RuleSet, SearchConfig, SearchContext, Solution};

pub fn context(rules: RuleSet) -> SearchContext {
    SearchContext::new(SearchConfig::default().with_rules(rules))
        .unwrap_or_else(|e| panic!("context failed: {e}"))
}

fn contributing_cap(value: u32) -> usize {
    match value {
        10 => 2,
        4 | 3 => 3,
        _ => 4,
    }
}

/// Product of a group recomputed from its numeric values.
pub fn reference_product(values: &[u32], rules: RuleSet) -> u32 {
    let early_ten = rules == RuleSet::EarlyTermination && values.get(2) == Some(&10);
    let late_large = matches!(values.get(3), Some(10 | 4 | 3));
    let stop = if early_ten {
        2
    } else if late_large {
        3
    } else {
        values.len()
    };

    let mut seen: HashMap<u32, usize> = HashMap::new();
    let mut product = 1;
    for &value in &values[..stop] {
        let count = seen.entry(value).or_insert(0);
        *count += 1;
        if *count <= contributing_cap(value) {
            product *= value;
        }
    }
    product
}

/// Slot cost recomputed from the raw decomposition fields.
pub fn reference_cost(solution: &Solution) -> u32 {
    let d = &solution.decomposition;
    let slots: usize = d.groups.iter().map(|g| g.values().len()).sum();
    let separators = d.groups.len().saturating_sub(1);
    let increment = usize::from(!d.increment_skipped);
    let early = d
        .groups
        .iter()
        .any(|g| g.mode() == GroupMode::EarlyTerminated);
    let terminal = usize::from(!d.increment_skipped && !early);
    (slots + separators + increment + terminal) as u32 + d.outer_multiplier + d.outer_addition
}

/// Assert every property a returned solution must have.
pub fn check_solution(solution: &Solution, rules: RuleSet) {
    let d = &solution.decomposition;
    let mut inner: u64 = 0;
    for group in &d.groups {
        let values: Vec<u32> = group.values().iter().map(|v| v.value()).collect();
        assert!((1..=4).contains(&values.len()), "{:?}", values);
        assert_eq!(
            group.product(),
            reference_product(&values, rules),
            "product of {:?}",
            values
        );
        inner += u64::from(group.product());
    }

    let increment = u64::from(!d.increment_skipped);
    let produced = (inner + increment) * u64::from(d.outer_multiplier) + u64::from(d.outer_addition);
    assert_eq!(produced, u64::from(solution.target), "{:?}", solution);
    assert_eq!(d.evaluate(), produced);

    assert!(d.is_well_formed(), "{:?}", solution);
    assert_eq!(solution.cost, reference_cost(solution), "{:?}", solution);
    assert_eq!(solution.cost, d.cost());
    assert_eq!(render::tokens(d).len() as u32, solution.cost, "{:?}", solution);
}

/// Cheapest cost over the whole affine space with no pruning and no stepping.
///
/// Uses the sum table already built in `ctx`, so decompose `target` with it
/// first.
pub fn exhaustive_cost(ctx: &SearchContext, target: u32) -> Option<u32> {
    let products = &ctx.memo.products;
    let sums = &ctx.state.sums;
    let mut best: Option<u32> = None;
    let mut offer = |cost: u32| {
        if best.map_or(true, |b| cost < b) {
            best = Some(cost);
        }
    };

    for m in 1..=target.min(ctx.config.max_outer_multiplier) {
        for a in 0..=(target - 1).min(ctx.config.max_outer_addition) {
            if (target - a) % m != 0 {
                continue;
            }
            let q = (target - a) / m;
            for group in products.groups(q) {
                if group.mode() != GroupMode::Normal {
                    offer(group.cost() + m + a);
                }
            }
            if let Some(entry) = sums.entry(q - 1) {
                let separators = entry.group_count.saturating_sub(1);
                let terminal = u32::from(!entry.used_early_termination);
                offer(entry.cost + separators + 1 + m + terminal + a);
            }
        }
    }
    best
}
