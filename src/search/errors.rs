// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for decomposition.

use thiserror::Error;

use crate::alphabet::RuleSet;

/// Errors that can occur when configuring or running a decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// No affine wrapper and group combination reaches the target within the
    /// searched bounds.
    #[error("no decomposition of {target} within the searched bounds")]
    NotDecomposable { target: u32 },

    /// The product ceiling would silently drop groups that can occur.
    #[error("product ceiling {ceiling} is below the largest group product {required}")]
    CeilingTooLow { ceiling: u32, required: u32 },

    /// A search bound was configured as zero.
    #[error("search bound {name} must be at least 1")]
    InvalidSearchBound { name: &'static str },

    /// Precomputed tables were built for other placement rules.
    #[error("product table built for {memo} rules, configuration asks for {config}")]
    RulesMismatch { config: RuleSet, memo: RuleSet },

    /// The target is beyond the configured maximum.
    #[error("target {target} exceeds the maximum of {max}")]
    TargetTooLarge { target: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DecomposeError::NotDecomposable { target: 0 }.to_string(),
            "no decomposition of 0 within the searched bounds"
        );
        assert_eq!(
            DecomposeError::CeilingTooLow {
                ceiling: 100,
                required: 800
            }
            .to_string(),
            "product ceiling 100 is below the largest group product 800"
        );
        assert_eq!(
            DecomposeError::InvalidSearchBound {
                name: "max_outer_multiplier"
            }
            .to_string(),
            "search bound max_outer_multiplier must be at least 1"
        );
        assert_eq!(
            DecomposeError::RulesMismatch {
                config: RuleSet::EarlyTermination,
                memo: RuleSet::Overflow
            }
            .to_string(),
            "product table built for overflow rules, configuration asks for early-termination"
        );
        assert_eq!(
            DecomposeError::TargetTooLarge {
                target: 2_000_000,
                max: 1_000_000
            }
            .to_string(),
            "target 2000000 exceeds the maximum of 1000000"
        );
    }
}
