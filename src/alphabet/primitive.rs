// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primitive divide-by values.
//!
//! The alphabet is the fixed, descending set `{10, 4, 3, 2}`. Declaration
//! order of [`Primitive`] is the descending order, so `Primitive::iter()`
//! walks the alphabet the way groups are generated.

use std::fmt;

use serde::Serialize;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use super::constants::{LATE_TERMINATION_INDEX, MAX_OVERFLOW_UNITS, TEN_TERMINATION_INDEX};

/// One member of the divide-by alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Serialize)]
#[serde(into = "u32")]
pub enum Primitive {
    Ten,
    Four,
    Three,
    Two,
}

impl Primitive {
    /// Numeric multiplier of this value.
    pub fn value(self) -> u32 {
        match self {
            Primitive::Ten => 10,
            Primitive::Four => 4,
            Primitive::Three => 3,
            Primitive::Two => 2,
        }
    }

    /// Look up a primitive by its numeric value.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            10 => Some(Primitive::Ten),
            4 => Some(Primitive::Four),
            3 => Some(Primitive::Three),
            2 => Some(Primitive::Two),
            _ => None,
        }
    }

    /// Position in the descending alphabet (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// How many copies of this value in one group actually multiply.
    pub fn contributing_cap(self) -> usize {
        match self {
            Primitive::Ten => 2,
            Primitive::Four => 3,
            Primitive::Three => 3,
            Primitive::Two => 4,
        }
    }

    /// How many copies of this value the enumerator may place in one group.
    ///
    /// Twos never overflow: four of them already fill a group.
    pub fn generation_cap(self) -> usize {
        match self {
            Primitive::Two => self.contributing_cap(),
            _ => self.contributing_cap() + MAX_OVERFLOW_UNITS,
        }
    }

    /// Whether this value, placed at `index`, stops the group contributing.
    pub fn terminates_group_at(self, index: usize) -> bool {
        match index {
            TEN_TERMINATION_INDEX => self == Primitive::Ten,
            LATE_TERMINATION_INDEX => self != Primitive::Two,
            _ => false,
        }
    }
}

impl From<Primitive> for u32 {
    fn from(primitive: Primitive) -> u32 {
        primitive.value()
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
