// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cumulative search bookkeeping.

pub mod statistics;

pub use statistics::{Counters, Statistics};
