// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Groups: runs of one to four primitives that multiply together.
//!
//! A group's contribution depends on more than its values. Copies beyond a
//! value's contributing cap multiply by 1 (overflow), and a large value in a
//! late position stops the group early (early termination), which also
//! removes the terminal step from the surrounding chain.
//!
//! # Classification
//!
//! | Mode               | Rule                                               | Product                         |
//! |--------------------|----------------------------------------------------|---------------------------------|
//! | `Normal`           | non-increasing, all counts within caps             | product of all values           |
//! | `Overflow`         | a cap exceeded or out of order                     | product of capped values        |
//! | `EarlyTerminated`  | `10` at index 2, or `10`/`4`/`3` at index 3        | capped product before the index |
//!
//! Early termination takes precedence over overflow. Under
//! [`RuleSet::Overflow`] there is no early termination; a late `10`/`4`/`3`
//! at index 3 is an overflow unit instead and is dropped from the product.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::Display;

use super::constants::{LATE_TERMINATION_INDEX, MAX_GROUP_LENGTH, TEN_TERMINATION_INDEX};
use super::primitive::Primitive;

/// Which placement rules are in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RuleSet {
    /// Overflow only: late large values multiply by 1.
    Overflow,
    /// Overflow plus early termination (draw cancel).
    #[default]
    EarlyTermination,
}

impl RuleSet {
    pub fn allows_early_termination(self) -> bool {
        self == RuleSet::EarlyTermination
    }
}

/// How a group contributes to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    Normal,
    Overflow,
    EarlyTerminated,
}

impl GroupMode {
    /// A self-sufficient group can stand alone without the trailing +1.
    pub fn is_self_sufficient(self) -> bool {
        self != GroupMode::Normal
    }
}

/// An immutable, classified group of primitives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    values: Vec<Primitive>,
    product: u32,
    mode: GroupMode,
}

impl Group {
    /// Classify a sequence of primitives, panicking on an invalid length.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or longer than [`MAX_GROUP_LENGTH`].
    pub fn new(values: Vec<Primitive>, rules: RuleSet) -> Self {
        let len = values.len();
        Self::try_new(values, rules)
            .unwrap_or_else(|| panic!("Group length out of range: {}", len))
    }

    /// Classify a sequence of primitives, returning None on an invalid length.
    pub fn try_new(values: Vec<Primitive>, rules: RuleSet) -> Option<Self> {
        if values.is_empty() || values.len() > MAX_GROUP_LENGTH {
            return None;
        }
        let (product, mode) = classify(&values, rules);
        Some(Self {
            values,
            product,
            mode,
        })
    }

    pub fn values(&self) -> &[Primitive] {
        &self.values
    }

    pub fn product(&self) -> u32 {
        self.product
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    /// Slots used by this group: one per primitive.
    pub fn cost(&self) -> u32 {
        self.values.len() as u32
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether the values are in non-increasing (alphabet) order.
pub fn is_non_increasing(values: &[Primitive]) -> bool {
    values.windows(2).all(|pair| pair[0].value() >= pair[1].value())
}

/// Index at which an early-terminating value stops the group, if any.
pub fn termination_index(values: &[Primitive]) -> Option<usize> {
    [TEN_TERMINATION_INDEX, LATE_TERMINATION_INDEX]
        .into_iter()
        .find(|&index| {
            values
                .get(index)
                .is_some_and(|value| value.terminates_group_at(index))
        })
}

/// Product of the values, counting each value only up to its contributing cap.
pub fn capped_product(values: &[Primitive]) -> u32 {
    let mut counts = [0usize; Primitive::COUNT];
    values.iter().fold(1, |product, &value| {
        counts[value.as_usize()] += 1;
        if counts[value.as_usize()] <= value.contributing_cap() {
            product * value.value()
        } else {
            product
        }
    })
}

fn exceeds_caps(values: &[Primitive]) -> bool {
    let mut counts = [0usize; Primitive::COUNT];
    for value in values {
        counts[value.as_usize()] += 1;
    }
    values
        .iter()
        .any(|value| counts[value.as_usize()] > value.contributing_cap())
}

fn classify(values: &[Primitive], rules: RuleSet) -> (u32, GroupMode) {
    if rules.allows_early_termination() {
        if let Some(stop) = termination_index(values) {
            return (capped_product(&values[..stop]), GroupMode::EarlyTerminated);
        }
    }

    let mut contributing = values;
    let mut overflow = exceeds_caps(values) || !is_non_increasing(values);

    // Without early termination, a late large value still multiplies by 1.
    if values
        .get(LATE_TERMINATION_INDEX)
        .is_some_and(|value| value.terminates_group_at(LATE_TERMINATION_INDEX))
    {
        overflow = true;
        contributing = &values[..LATE_TERMINATION_INDEX];
    }

    let mode = if overflow {
        GroupMode::Overflow
    } else {
        GroupMode::Normal
    };
    (capped_product(contributing), mode)
}
