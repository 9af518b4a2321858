// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed tables.
//!
//! - ProductTable: immutable, built once per search context (MEMO tier)
//! - SumTable: minimum-cost combinations, grown on demand (DYNAMIC tier)

pub mod products;
pub mod sums;

pub use products::ProductTable;
pub use sums::{Combination, SumEntry, SumTable};
