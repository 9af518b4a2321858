// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use tracing::debug;

use crate::memo::SumTable;

use super::MemoizedData;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// The sum table only ever grows: an entry, once computed, is valid for every
/// later target, so a context that decomposes many targets pays for the
/// dynamic program once up to the largest inner sum seen.
#[derive(Debug, Clone, Default)]
pub struct DynamicState {
    /// Minimum-cost combinations for sums `0..=sums.limit()`.
    pub sums: SumTable,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every sum up to `limit` has been computed.
    pub fn ensure_sums(&mut self, limit: u32, memo: &MemoizedData) {
        if limit <= self.sums.limit() {
            return;
        }
        debug!(from = self.sums.limit(), to = limit, "extending sum table");
        self.sums.extend_to(limit, &memo.products);
    }
}
