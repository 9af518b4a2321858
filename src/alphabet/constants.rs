// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed constants of the divide-by alphabet and of the affine search.
//!
//! The alphabet itself never changes, so these are plain compile-time
//! constants. The search bounds are only defaults: [`SearchConfig`] carries
//! the values actually used.
//!
//! [`SearchConfig`]: crate::config::SearchConfig

/// Maximum number of primitives in a single group.
pub const MAX_GROUP_LENGTH: usize = 4;

/// Extra units of a value a group may carry beyond its contributing cap.
///
/// Each such unit costs a slot but multiplies by 1.
pub const MAX_OVERFLOW_UNITS: usize = 1;

/// Index at which a `10` stops a group from contributing further.
pub const TEN_TERMINATION_INDEX: usize = 2;

/// Index at which a `10`, `4` or `3` stops a group from contributing further.
pub const LATE_TERMINATION_INDEX: usize = 3;

/// Default upper bound on the product of a single group.
///
/// This is exactly the largest product any group can reach (`10*10*4*2`), so
/// the default never drops a valid group.
pub const DEFAULT_PRODUCT_CEILING: u32 = 800;

/// Default upper bound on the outer multiplier searched.
pub const DEFAULT_MAX_OUTER_MULTIPLIER: u32 = 999;

/// Default upper bound on the outer addition searched.
pub const DEFAULT_MAX_OUTER_ADDITION: u32 = 999;

/// Targets up to this value are answered with plain modifiers.
pub const DEFAULT_TRIVIAL_THRESHOLD: u32 = 4;

/// Default largest target accepted.
///
/// The sum table holds one entry per inner sum, so this bounds its memory.
pub const DEFAULT_MAX_TARGET: u32 = 1_000_000;

const _: () = assert!(MAX_GROUP_LENGTH == LATE_TERMINATION_INDEX + 1);
const _: () = assert!(DEFAULT_TRIVIAL_THRESHOLD < DEFAULT_PRODUCT_CEILING);
const _: () = assert!(DEFAULT_TRIVIAL_THRESHOLD < DEFAULT_MAX_TARGET);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_indices_fit_in_group() {
        assert!(TEN_TERMINATION_INDEX < MAX_GROUP_LENGTH);
        assert!(LATE_TERMINATION_INDEX < MAX_GROUP_LENGTH);
    }

    #[test]
    fn test_default_ceiling_is_largest_group_product() {
        assert_eq!(DEFAULT_PRODUCT_CEILING, 10 * 10 * 4 * 2);
    }
}
