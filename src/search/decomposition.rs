// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The decomposition record and its slot cost.
//!
//! A decomposition reaches its target through an affine wrapper:
//!
//! ```text
//! target = (Σ group products + (increment_skipped ? 0 : 1)) × outer_multiplier
//!          + outer_addition
//! ```
//!
//! Its cost counts one slot per primitive, one per separator between groups,
//! one for the +1 increment, one per outer multiplier unit, one for the
//! terminal step and one per outer addition unit.

use serde::Serialize;

use crate::alphabet::{Group, GroupMode};

/// The individual terms of a slot cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostTerms {
    /// Total length of the groups.
    pub group_slots: u32,
    pub group_count: u32,
    pub increment_skipped: bool,
    pub early_terminated: bool,
    pub outer_multiplier: u32,
    pub outer_addition: u32,
}

impl CostTerms {
    /// One separator between each pair of adjacent groups.
    pub fn separators(&self) -> u32 {
        self.group_count.saturating_sub(1)
    }

    pub fn uses_increment(&self) -> bool {
        !self.increment_skipped
    }

    /// The terminal step is paid only when the increment is used and no
    /// group terminated early.
    pub fn uses_terminal_step(&self) -> bool {
        !self.increment_skipped && !self.early_terminated
    }

    pub fn total(&self) -> u32 {
        self.group_slots
            + self.separators()
            + u32::from(self.uses_increment())
            + self.outer_multiplier
            + u32::from(self.uses_terminal_step())
            + self.outer_addition
    }
}

/// Groups plus the affine wrapper that maps their sum onto a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub groups: Vec<Group>,
    pub outer_multiplier: u32,
    pub outer_addition: u32,
    pub increment_skipped: bool,
}

impl Decomposition {
    /// Plain modifiers only: no groups, no multiplier.
    pub fn trivial(target: u32) -> Self {
        Self {
            groups: Vec::new(),
            outer_multiplier: 0,
            outer_addition: target,
            increment_skipped: true,
        }
    }

    /// A single self-sufficient group standing in for the +1 increment.
    ///
    /// # Panics
    ///
    /// Panics if `group` is a normal group.
    pub fn self_sufficient(group: Group, outer_multiplier: u32, outer_addition: u32) -> Self {
        assert!(
            group.mode().is_self_sufficient(),
            "Group is not self-sufficient: {:?}",
            group.values()
        );
        Self {
            groups: vec![group],
            outer_multiplier,
            outer_addition,
            increment_skipped: true,
        }
    }

    /// Groups summed, plus the +1 increment.
    pub fn with_increment(groups: Vec<Group>, outer_multiplier: u32, outer_addition: u32) -> Self {
        Self {
            groups,
            outer_multiplier,
            outer_addition,
            increment_skipped: false,
        }
    }

    pub fn is_trivial(&self) -> bool {
        self.groups.is_empty() && self.increment_skipped
    }

    pub fn uses_early_termination(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.mode() == GroupMode::EarlyTerminated)
    }

    pub fn uses_overflow(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.mode() == GroupMode::Overflow)
    }

    pub fn cost_terms(&self) -> CostTerms {
        CostTerms {
            group_slots: self.groups.iter().map(Group::cost).sum(),
            group_count: self.groups.len() as u32,
            increment_skipped: self.increment_skipped,
            early_terminated: self.uses_early_termination(),
            outer_multiplier: self.outer_multiplier,
            outer_addition: self.outer_addition,
        }
    }

    /// Total slots used.
    pub fn cost(&self) -> u32 {
        self.cost_terms().total()
    }

    /// Sum of the group products.
    pub fn inner_sum(&self) -> u64 {
        self.groups.iter().map(|group| u64::from(group.product())).sum()
    }

    /// The number this decomposition produces.
    pub fn evaluate(&self) -> u64 {
        let increment = if self.increment_skipped { 0 } else { 1 };
        (self.inner_sum() + increment) * u64::from(self.outer_multiplier)
            + u64::from(self.outer_addition)
    }

    /// Whether the structural invariant holds: a skipped increment means
    /// either no groups at all or exactly one self-sufficient group.
    pub fn is_well_formed(&self) -> bool {
        if !self.increment_skipped {
            return true;
        }
        match self.groups.as_slice() {
            [] => true,
            [group] => group.mode().is_self_sufficient(),
            _ => false,
        }
    }
}

/// A decomposition chosen for a target, with its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub target: u32,
    pub cost: u32,
    pub decomposition: Decomposition,
}

impl Solution {
    pub fn new(target: u32, decomposition: Decomposition) -> Self {
        Self {
            target,
            cost: decomposition.cost(),
            decomposition,
        }
    }
}
