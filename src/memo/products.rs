// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Product table: every product a single group can reach.
//!
//! # Generation Algorithm
//!
//! Groups are generated in a fixed order so that the table is deterministic:
//! 1. For each length from 1 to 4, a recursive descent over the alphabet where
//!    each next value is no larger than the previous one and no value exceeds
//!    its generation cap (one overflow unit beyond the contributing cap).
//! 2. Under early-termination rules, every `[a, b, 10]` and every
//!    `[a, b, c, d]` with `d` in `{10, 4, 3}` that is out of descending order.
//!    Only tuples that classify as early-terminated are kept.
//!
//! Groups whose product exceeds the ceiling are dropped, and each product
//! keeps its groups deduplicated by (sequence, mode) in generation order.
//!
//! # Example
//!
//! With the default ceiling of 800 and early-termination rules there are 37
//! distinct products realised by 260 groups.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::alphabet::group::is_non_increasing;
use crate::alphabet::{Group, GroupMode, Primitive, RuleSet, MAX_GROUP_LENGTH};

/// Immutable map from product to the groups realising it.
#[derive(Debug, Clone)]
pub struct ProductTable {
    ceiling: u32,
    rules: RuleSet,
    products: BTreeMap<u32, Vec<Group>>,
}

impl ProductTable {
    /// Enumerate every group with product at most `ceiling`.
    pub fn enumerate(ceiling: u32, rules: RuleSet) -> Self {
        let mut table = Self {
            ceiling,
            rules,
            products: BTreeMap::new(),
        };

        let mut current = Vec::with_capacity(MAX_GROUP_LENGTH);
        for length in 1..=MAX_GROUP_LENGTH {
            table.extend_descending(&mut current, length);
        }

        if rules.allows_early_termination() {
            table.extend_early_terminated();
        }

        table
    }

    /// Largest product any single group can reach under `rules`.
    ///
    /// A ceiling below this value silently drops valid groups.
    pub fn max_product(rules: RuleSet) -> u32 {
        Self::enumerate(u32::MAX, rules)
            .largest_product()
            .unwrap_or(0)
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Groups realising `product` (empty if unreachable).
    pub fn groups(&self, product: u32) -> &[Group] {
        self.products
            .get(&product)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, product: u32) -> bool {
        self.products.contains_key(&product)
    }

    /// Products in ascending order with their groups.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Group])> {
        self.products
            .iter()
            .map(|(&product, groups)| (product, groups.as_slice()))
    }

    /// Products no larger than `limit`, ascending.
    pub fn products_up_to(&self, limit: u32) -> impl Iterator<Item = (u32, &[Group])> {
        self.products
            .range(..=limit)
            .map(|(&product, groups)| (product, groups.as_slice()))
    }

    pub fn largest_product(&self) -> Option<u32> {
        self.products.keys().next_back().copied()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total number of groups across all products.
    pub fn group_count(&self) -> usize {
        self.products.values().map(Vec::len).sum()
    }

    fn insert(&mut self, group: Group) {
        if group.product() > self.ceiling {
            return;
        }
        let groups = self.products.entry(group.product()).or_default();
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    fn extend_descending(&mut self, current: &mut Vec<Primitive>, remaining: usize) {
        if remaining == 0 {
            if !current.is_empty() {
                self.insert(Group::new(current.clone(), self.rules));
            }
            return;
        }

        for value in Primitive::iter() {
            if current.last().is_some_and(|last| value.value() > last.value()) {
                continue;
            }
            let count = current.iter().filter(|&&placed| placed == value).count();
            if count >= value.generation_cap() {
                continue;
            }
            current.push(value);
            self.extend_descending(current, remaining - 1);
            current.pop();
        }
    }

    fn extend_early_terminated(&mut self) {
        const LATE_VALUES: [Primitive; 3] = [Primitive::Ten, Primitive::Four, Primitive::Three];

        for first in Primitive::iter() {
            for second in Primitive::iter() {
                self.insert_early_terminated(vec![first, second, Primitive::Ten]);
            }
        }

        for first in Primitive::iter() {
            for second in Primitive::iter() {
                for third in Primitive::iter() {
                    for last in LATE_VALUES {
                        self.insert_early_terminated(vec![first, second, third, last]);
                    }
                }
            }
        }
    }

    fn insert_early_terminated(&mut self, values: Vec<Primitive>) {
        // Descending tuples were already produced by the recursive descent.
        if is_non_increasing(&values) {
            return;
        }
        let group = Group::new(values, self.rules);
        if group.mode() == GroupMode::EarlyTerminated {
            self.insert(group);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DEFAULT_PRODUCT_CEILING, MAX_GROUP_LENGTH};
    use crate::alphabet::Primitive::{Four, Ten, Three, Two};

    fn default_table() -> ProductTable {
        ProductTable::enumerate(DEFAULT_PRODUCT_CEILING, RuleSet::EarlyTermination)
    }

    #[test]
    fn test_table_sizes() {
        let table = default_table();
        assert_eq!(table.len(), 37);
        assert_eq!(table.group_count(), 260);

        let table = ProductTable::enumerate(DEFAULT_PRODUCT_CEILING, RuleSet::Overflow);
        assert_eq!(table.len(), 37);
        assert_eq!(table.group_count(), 68);
    }

    #[test]
    fn test_every_group_is_well_formed() {
        let table = default_table();
        for (product, groups) in table.iter() {
            assert!(!groups.is_empty());
            for group in groups {
                assert_eq!(group.product(), product);
                assert!(product <= table.ceiling());
                assert!((1..=MAX_GROUP_LENGTH).contains(&group.len()));
                assert_eq!(group.cost() as usize, group.len());
                if group.mode() == GroupMode::Normal {
                    let full: u32 = group.values().iter().map(|v| v.value()).product();
                    assert_eq!(full, product);
                }
            }
        }
    }

    #[test]
    fn test_groups_are_deduplicated() {
        let table = default_table();
        for (_, groups) in table.iter() {
            for (i, a) in groups.iter().enumerate() {
                for b in &groups[i + 1..] {
                    assert!(a.values() != b.values() || a.mode() != b.mode());
                }
            }
        }
    }

    #[test]
    fn test_generation_order_for_product_four() {
        let table = default_table();
        let sequences: Vec<&[Primitive]> = table.groups(4).iter().map(Group::values).collect();
        assert_eq!(
            sequences,
            vec![
                &[Four][..],
                &[Two, Two][..],
                &[Two, Two, Ten][..],
                &[Two, Two, Ten, Ten][..],
                &[Two, Two, Ten, Four][..],
                &[Two, Two, Ten, Three][..],
            ]
        );
    }

    #[test]
    fn test_product_hundred_has_early_terminated_groups() {
        let table = default_table();
        let groups = table.groups(100);
        assert_eq!(groups[0].values(), &[Ten, Ten]);
        assert_eq!(groups[0].mode(), GroupMode::Normal);
        assert!(groups[1..]
            .iter()
            .all(|g| g.mode() == GroupMode::EarlyTerminated));
    }

    #[test]
    fn test_overflow_rules_have_no_early_termination() {
        let table = ProductTable::enumerate(DEFAULT_PRODUCT_CEILING, RuleSet::Overflow);
        assert!(table
            .iter()
            .flat_map(|(_, groups)| groups)
            .all(|g| g.mode() != GroupMode::EarlyTerminated));
        assert!(table
            .groups(100)
            .iter()
            .any(|g| g.values() == [Ten, Ten, Ten] && g.mode() == GroupMode::Overflow));
    }

    #[test]
    fn test_ceiling_drops_large_products() {
        let table = ProductTable::enumerate(100, RuleSet::EarlyTermination);
        assert_eq!(table.len(), 26);
        assert_eq!(table.group_count(), 219);
        assert_eq!(table.largest_product(), Some(100));
        assert!(!table.contains(120));
        assert!(table.groups(120).is_empty());
    }

    #[test]
    fn test_max_product() {
        assert_eq!(ProductTable::max_product(RuleSet::EarlyTermination), 800);
        assert_eq!(ProductTable::max_product(RuleSet::Overflow), 800);
    }

    #[test]
    fn test_no_product_below_two() {
        let table = default_table();
        assert_eq!(table.iter().next().map(|(p, _)| p), Some(2));
        assert_eq!(table.products_up_to(1).count(), 0);
        assert_eq!(table.products_up_to(4).count(), 3);
    }
}
