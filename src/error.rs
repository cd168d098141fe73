// SPDX-License-Identifier: LGPL-3.0-or-later

//! Parameter validation errors.
//!
//! Every error here is detected synchronously before any generation
//! starts. A declined confirmation gate is deliberately *not* an error;
//! it is reported as [`crate::params::Resolution::Cancelled`].

use thiserror::Error;

/// Errors produced while validating raw generator parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A field is not a plain base-10 integer (empty, non-numeric, or
    /// carrying a fractional part).
    #[error("all parameters must be integers without decimals")]
    Parse,

    /// The requested sample count is below 1.
    #[error("count must be at least 1")]
    CountTooSmall,

    /// A field that must be non-negative was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Name of the violating field.
        field: &'static str,
    },

    /// A field exceeds the representable parameter range.
    #[error("{field} is too large")]
    TooLarge {
        /// Name of the violating field.
        field: &'static str,
    },

    /// A fixed modulus must be greater than 1.
    #[error("modulus must be greater than 1, got {modulus}")]
    ModulusTooSmall {
        /// The rejected modulus value.
        modulus: u64,
    },

    /// The seed falls outside `[0, modulus)`. The message names the
    /// modulus so the user sees the derived value that was applied.
    #[error("seed must be less than the modulus ({modulus}), got {seed}")]
    SeedOutOfRange {
        /// The rejected seed value.
        seed: u64,
        /// The (possibly derived) modulus in effect for this run.
        modulus: u64,
    },
}
