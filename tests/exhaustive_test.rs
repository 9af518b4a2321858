// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Every target up to 1000, checked with one shared context per rule set.

mod common;

use common::{check_solution, context, exhaustive_cost};
use divide_chain::state::Counters;
use divide_chain::RuleSet;

fn check_all(rules: RuleSet) {
    let mut ctx = context(rules);
    for target in 1..=1000 {
        let solution = ctx
            .decompose(target)
            .unwrap_or_else(|e| panic!("{target}: {e}"));
        check_solution(&solution, rules);
        if target > 4 {
            assert!(solution.cost < target, "{} costs {}", target, solution.cost);
        }
    }
    assert_eq!(ctx.statistics.get(Counters::TrivialAnswers), 4);
    assert_eq!(ctx.statistics.get(Counters::Searches), 996);
    assert_eq!(ctx.state.sums.limit(), 999);
}

#[test]
fn test_every_target_with_early_termination() {
    check_all(RuleSet::EarlyTermination);
}

#[test]
fn test_every_target_with_overflow_only() {
    check_all(RuleSet::Overflow);
}

#[test]
fn test_pruned_search_matches_exhaustive_scan() {
    for rules in [RuleSet::EarlyTermination, RuleSet::Overflow] {
        let mut ctx = context(rules);
        for target in 5..=300 {
            let solution = ctx.decompose(target).unwrap();
            assert_eq!(
                Some(solution.cost),
                exhaustive_cost(&ctx, target),
                "{} under {}",
                target,
                rules
            );
        }
    }
}

#[test]
fn test_costs_are_repeatable() {
    let mut shared = context(RuleSet::EarlyTermination);
    for target in [7, 999, 13, 517, 100, 312] {
        let first = shared.decompose(target).unwrap();
        let again = shared.decompose(target).unwrap();
        let fresh = context(RuleSet::EarlyTermination).decompose(target).unwrap();
        assert_eq!(first, again);
        assert_eq!(first, fresh);
    }
}
