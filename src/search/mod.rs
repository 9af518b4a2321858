// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outer affine search.
//!
//! For a target `t` the search tries every outer multiplier `m` in
//! `1..=min(t, max_outer_multiplier)` and outer addition `a` in
//! `0..=min(t - 1, max_outer_addition)` with `(t - a) % m == 0`. With
//! `q = (t - a) / m` two shapes of inner chain are scored:
//!
//! 1. **Self-sufficient**: a single overflowing or early-terminated group of
//!    product `q`, with no +1 increment.
//! 2. **Increment**: the cheapest combination of groups summing to `q - 1`,
//!    followed by the +1 increment.
//!
//! The cheapest candidate wins; on equal cost the first one found (smallest
//! `m`, then smallest `a`, self-sufficient before increment) is kept.
//!
//! # Search Order
//!
//! Only additions congruent to `t` modulo `m` are visited, and a pair with
//! `m + a` already at or above the incumbent cost is abandoned together with
//! every larger addition for that multiplier. Neither changes which candidate
//! wins. The sum table is shared by all pairs and all targets of a context.

mod decomposition;
mod errors;

pub use decomposition::{CostTerms, Decomposition, Solution};
pub use errors::DecomposeError;

use tracing::{info, trace};

use crate::alphabet::GroupMode;
use crate::context::SearchContext;
use crate::state::statistics::{Counters, Statistics};

/// Candidate inner chain, materialised only once the search is over.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// Index into the groups of product `quotient`.
    SelfSufficient { quotient: u32, index: usize },
    /// Inner sum `quotient - 1`.
    Increment { inner: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: u32,
    outer_multiplier: u32,
    outer_addition: u32,
    shape: Shape,
}

/// Keep `candidate` if it is strictly cheaper than the incumbent.
fn consider(best: &mut Option<Candidate>, candidate: Candidate, statistics: &mut Statistics) {
    if best.map_or(true, |incumbent| candidate.cost < incumbent.cost) {
        trace!(
            cost = candidate.cost,
            multiplier = candidate.outer_multiplier,
            addition = candidate.outer_addition,
            shape = ?candidate.shape,
            "improved candidate"
        );
        statistics.increment_counter(Counters::Improvements);
        *best = Some(candidate);
    }
}

/// Decompose `target` within `ctx`.
pub fn decompose_in(ctx: &mut SearchContext, target: u32) -> Result<Solution, DecomposeError> {
    if target == 0 {
        return Err(DecomposeError::NotDecomposable { target });
    }
    if target <= ctx.config.trivial_threshold {
        ctx.statistics.increment_counter(Counters::TrivialAnswers);
        return Ok(Solution::new(target, Decomposition::trivial(target)));
    }

    if target > ctx.config.max_target {
        return Err(DecomposeError::TargetTooLarge {
            target,
            max: ctx.config.max_target,
        });
    }

    ctx.state.ensure_sums(target - 1, &ctx.memo);
    ctx.statistics.increment_counter(Counters::Searches);

    let SearchContext {
        config,
        memo,
        state,
        statistics,
    } = ctx;
    let products = &memo.products;
    let sums = &state.sums;

    let max_multiplier = target.min(config.max_outer_multiplier);
    let max_addition = (target - 1).min(config.max_outer_addition);
    let mut best: Option<Candidate> = None;

    for outer_multiplier in 1..=max_multiplier {
        let mut outer_addition = target % outer_multiplier;
        while outer_addition <= max_addition {
            if best.is_some_and(|incumbent| outer_multiplier + outer_addition >= incumbent.cost) {
                statistics.increment_counter(Counters::PairsPruned);
                break;
            }
            statistics.increment_counter(Counters::PairsExamined);

            let quotient = (target - outer_addition) / outer_multiplier;

            for (index, group) in products.groups(quotient).iter().enumerate() {
                if !group.mode().is_self_sufficient() {
                    continue;
                }
                statistics.increment_counter(Counters::SelfSufficientCandidates);
                let terms = CostTerms {
                    group_slots: group.cost(),
                    group_count: 1,
                    increment_skipped: true,
                    early_terminated: group.mode() == GroupMode::EarlyTerminated,
                    outer_multiplier,
                    outer_addition,
                };
                consider(
                    &mut best,
                    Candidate {
                        cost: terms.total(),
                        outer_multiplier,
                        outer_addition,
                        shape: Shape::SelfSufficient { quotient, index },
                    },
                    statistics,
                );
            }

            let inner = quotient - 1;
            if let Some(entry) = sums.entry(inner) {
                statistics.increment_counter(Counters::IncrementCandidates);
                let terms = CostTerms {
                    group_slots: entry.cost,
                    group_count: entry.group_count,
                    increment_skipped: false,
                    early_terminated: entry.used_early_termination,
                    outer_multiplier,
                    outer_addition,
                };
                consider(
                    &mut best,
                    Candidate {
                        cost: terms.total(),
                        outer_multiplier,
                        outer_addition,
                        shape: Shape::Increment { inner },
                    },
                    statistics,
                );
            }

            outer_addition += outer_multiplier;
        }
    }

    let Some(winner) = best else {
        return Err(DecomposeError::NotDecomposable { target });
    };

    let decomposition = match winner.shape {
        Shape::SelfSufficient { quotient, index } => Decomposition::self_sufficient(
            products.groups(quotient)[index].clone(),
            winner.outer_multiplier,
            winner.outer_addition,
        ),
        Shape::Increment { inner } => {
            let combination = sums
                .min_cost(inner, products)
                .ok_or(DecomposeError::NotDecomposable { target })?;
            Decomposition::with_increment(
                combination.groups,
                winner.outer_multiplier,
                winner.outer_addition,
            )
        }
    };

    let solution = Solution::new(target, decomposition);
    info!(
        requested = target,
        cost = solution.cost,
        multiplier = winner.outer_multiplier,
        addition = winner.outer_addition,
        %statistics,
        "decomposition found"
    );
    Ok(solution)
}
