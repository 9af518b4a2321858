// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The divide-by alphabet.
//!
//! - Primitive: one of the fixed values 10, 4, 3, 2
//! - Group: a classified run of one to four primitives
//! - RuleSet: which placement rules classify groups

pub mod constants;
pub mod group;
pub mod primitive;

pub use constants::*;
pub use group::{Group, GroupMode, RuleSet};
pub use primitive::Primitive;
