// SPDX-License-Identifier: LGPL-3.0-or-later

//! Parameter parsing, range validation, and modulus derivation.
//!
//! Raw text fields come in from some form-reading adapter; this module
//! turns them into a validated [`GeneratorParams`] or a descriptive
//! [`ParamError`]. Rules are applied in a fixed order and each failure
//! is terminal:
//!
//! 1. every field parses as a base-10 integer with no fractional part
//! 2. `count >= 1`
//! 3. seed/multiplier/increment are non-negative; a fixed modulus is > 1
//! 4. in derived mode, `modulus = next_pow2(count)`
//! 5. `seed < modulus`
//! 6. when `count` exceeds [`SOFT_COUNT_LIMIT`], an injected gate
//!    callback decides whether to proceed; declining is a first-class
//!    non-error outcome, not a failure
//!
//! The crate never talks to a user itself, so the confirmation gate is
//! a callback the caller injects, invoked only when the threshold is
//! actually exceeded.

use crate::error::ParamError;
use crate::generator::{GeneratorParams, MAX_MODULUS};

/// Sample counts above this trigger the confirmation gate.
pub const SOFT_COUNT_LIMIT: u64 = 100;

/// Raw text fields as read from a form, before any validation.
///
/// # Examples
/// ```
/// use lcg_scatter::{resolve, GateDecision, ModulusSource, RawParams, Resolution};
///
/// let raw = RawParams::new("1", "5", "3", "10");
/// let resolution = resolve(&raw, ModulusSource::DerivedFromCount, |_| {
///     GateDecision::Proceed
/// })
/// .unwrap();
///
/// match resolution {
///     Resolution::Ready { params, count } => {
///         assert_eq!(params.modulus(), 16); // next_pow2(10)
///         assert_eq!(count, 10);
///     }
///     Resolution::Cancelled => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParams {
    /// Seed field text.
    pub seed: String,
    /// Multiplier field text.
    pub multiplier: String,
    /// Increment field text.
    pub increment: String,
    /// Sample count field text.
    pub count: String,
}

impl RawParams {
    /// Bundle raw field texts.
    pub fn new(
        seed: impl Into<String>,
        multiplier: impl Into<String>,
        increment: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            seed: seed.into(),
            multiplier: multiplier.into(),
            increment: increment.into(),
            count: count.into(),
        }
    }
}

/// Where the modulus comes from. Resolved once by the validator; the
/// generator and the plot mapper never know the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulusSource {
    /// Use this value as-is (still range-checked to be > 1).
    Fixed(u64),
    /// Derive the modulus as the smallest power of two >= count.
    DerivedFromCount,
}

impl ModulusSource {
    /// Parse a raw modulus field into a fixed source.
    ///
    /// Integer and sign checks apply here; the `> 1` range check
    /// happens during [`resolve`] so it stays in rule order with the
    /// count check.
    pub fn from_field(text: &str) -> Result<Self, ParamError> {
        Ok(Self::Fixed(parse_field(text, "modulus")?))
    }
}

/// Outcome of the soft-count confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Continue with the run.
    Proceed,
    /// Abort the run; nothing is generated and nothing changes.
    Cancel,
}

/// Result of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Parameters are valid; the run may generate `count` samples.
    Ready {
        /// Validated generator parameters.
        params: GeneratorParams,
        /// Requested sample count.
        count: u64,
    },
    /// The gate declined a count above the soft limit. Not an error:
    /// no message is shown and previous output stays untouched.
    Cancelled,
}

/// Smallest power of two greater than or equal to `count`, floored at 2.
///
/// `count` must not exceed [`MAX_MODULUS`]; [`resolve`] rejects larger
/// counts before deriving, so the derived modulus always respects the
/// generator's cap.
///
/// # Examples
/// ```
/// use lcg_scatter::next_pow2;
///
/// assert_eq!(next_pow2(1), 2);
/// assert_eq!(next_pow2(10), 16);
/// assert_eq!(next_pow2(16), 16);
/// ```
pub fn next_pow2(count: u64) -> u64 {
    count.max(2).next_power_of_two()
}

/// Parse one raw field as a base-10 integer, sign still unchecked.
///
/// Anything non-integer (empty, text, a fractional part) is a parse
/// error with the one shared user-facing message. Sign and magnitude
/// checks happen later so that rule order is preserved.
fn parse_int(text: &str) -> Result<i128, ParamError> {
    text.trim().parse().map_err(|_| ParamError::Parse)
}

/// Rule 3 check: reject negatives, then narrow to `u64`.
fn check_non_negative(value: i128, field: &'static str) -> Result<u64, ParamError> {
    if value < 0 {
        return Err(ParamError::Negative { field });
    }
    u64::try_from(value).map_err(|_| ParamError::TooLarge { field })
}

fn parse_field(text: &str, field: &'static str) -> Result<u64, ParamError> {
    check_non_negative(parse_int(text)?, field)
}

/// Validate raw fields into a [`Resolution`].
///
/// `gate` is invoked at most once, and only when the parsed count
/// exceeds [`SOFT_COUNT_LIMIT`]. All other rules run first, so a
/// cancelled run is one that *would* have been valid.
pub fn resolve(
    raw: &RawParams,
    source: ModulusSource,
    gate: impl FnOnce(u64) -> GateDecision,
) -> Result<Resolution, ParamError> {
    // Rule 1: all fields are integers.
    let seed_signed = parse_int(&raw.seed)?;
    let multiplier_signed = parse_int(&raw.multiplier)?;
    let increment_signed = parse_int(&raw.increment)?;
    let count_signed = parse_int(&raw.count)?;

    // Rule 2
    if count_signed < 1 {
        return Err(ParamError::CountTooSmall);
    }
    let count = u64::try_from(count_signed).map_err(|_| ParamError::TooLarge { field: "count" })?;

    // Rule 3
    let seed = check_non_negative(seed_signed, "seed")?;
    let multiplier = check_non_negative(multiplier_signed, "multiplier")?;
    let increment = check_non_negative(increment_signed, "increment")?;

    // Rules 3 (fixed-modulus range) and 4 (derivation).
    let modulus = match source {
        ModulusSource::Fixed(m) => {
            if m <= 1 {
                return Err(ParamError::ModulusTooSmall { modulus: m });
            }
            m
        }
        ModulusSource::DerivedFromCount => {
            if count > MAX_MODULUS {
                return Err(ParamError::TooLarge { field: "count" });
            }
            next_pow2(count)
        }
    };

    // Rule 5 lives in the params constructor.
    let params = GeneratorParams::new(multiplier, increment, modulus, seed)?;

    // Rule 6: the cancelable soft limit.
    if count > SOFT_COUNT_LIMIT {
        if let GateDecision::Cancel = gate(count) {
            return Ok(Resolution::Cancelled);
        }
    }

    Ok(Resolution::Ready { params, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_gate(count: u64) -> GateDecision {
        panic!("gate must not fire for count {count}");
    }

    fn ready(res: Resolution) -> (GeneratorParams, u64) {
        match res {
            Resolution::Ready { params, count } => (params, count),
            Resolution::Cancelled => panic!("expected Ready, got Cancelled"),
        }
    }

    #[test]
    fn test_next_pow2_table() {
        for (n, expected) in [(1, 2), (2, 2), (3, 4), (10, 16), (16, 16), (17, 32), (100, 128)] {
            assert_eq!(next_pow2(n), expected, "next_pow2({n})");
        }
    }

    #[test]
    fn test_next_pow2_is_minimal() {
        for n in 1..=4096u64 {
            let p = next_pow2(n);
            assert!(p.is_power_of_two(), "next_pow2({n}) = {p} not a power of two");
            assert!(p >= n);
            if n > 2 {
                assert!(p / 2 < n, "next_pow2({n}) = {p} is not minimal");
            } else {
                assert_eq!(p, 2);
            }
        }
    }

    #[test]
    fn test_derived_modulus() {
        let raw = RawParams::new("1", "5", "3", "10");
        let (params, count) =
            ready(resolve(&raw, ModulusSource::DerivedFromCount, no_gate).unwrap());
        assert_eq!(params.modulus(), 16);
        assert_eq!(count, 10);
    }

    #[test]
    fn test_derived_modulus_floor_of_two() {
        let raw = RawParams::new("0", "5", "3", "1");
        let (params, _) = ready(resolve(&raw, ModulusSource::DerivedFromCount, no_gate).unwrap());
        assert_eq!(params.modulus(), 2);
    }

    #[test]
    fn test_seed_rejected_against_derived_modulus() {
        // count=10 derives m=16, so seed 16 is out of range and the
        // message must surface the derived value.
        let raw = RawParams::new("16", "5", "3", "10");
        let err = resolve(&raw, ModulusSource::DerivedFromCount, no_gate).unwrap_err();
        assert_eq!(
            err,
            ParamError::SeedOutOfRange {
                seed: 16,
                modulus: 16
            }
        );
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_fixed_modulus_honored() {
        // A fixed modulus need not be a power of two.
        let raw = RawParams::new("9", "5", "3", "4");
        let (params, _) = ready(resolve(&raw, ModulusSource::Fixed(10), no_gate).unwrap());
        assert_eq!(params.modulus(), 10);

        let raw = RawParams::new("10", "5", "3", "4");
        assert_eq!(
            resolve(&raw, ModulusSource::Fixed(10), no_gate),
            Err(ParamError::SeedOutOfRange {
                seed: 10,
                modulus: 10
            })
        );
    }

    #[test]
    fn test_fixed_modulus_range() {
        let raw = RawParams::new("0", "5", "3", "4");
        for m in [0, 1] {
            assert_eq!(
                resolve(&raw, ModulusSource::Fixed(m), no_gate),
                Err(ParamError::ModulusTooSmall { modulus: m })
            );
        }
    }

    #[test]
    fn test_oversized_count_and_modulus() {
        // Counts above the modulus cap cannot derive a valid modulus.
        // Derivation fails before the soft-count gate can fire.
        let raw = RawParams::new("1", "5", "3", (MAX_MODULUS + 1).to_string());
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::TooLarge { field: "count" })
        );

        // A fixed modulus over the cap is rejected by the constructor.
        let raw = RawParams::new("1", "5", "3", "4");
        assert_eq!(
            resolve(&raw, ModulusSource::Fixed(MAX_MODULUS + 1), no_gate),
            Err(ParamError::TooLarge { field: "modulus" })
        );
    }

    #[test]
    fn test_modulus_from_field() {
        assert_eq!(
            ModulusSource::from_field("16").unwrap(),
            ModulusSource::Fixed(16)
        );
        assert_eq!(ModulusSource::from_field("16.5"), Err(ParamError::Parse));
        assert_eq!(
            ModulusSource::from_field("-2"),
            Err(ParamError::Negative { field: "modulus" })
        );
    }

    #[test]
    fn test_non_integer_fields_are_parse_errors() {
        for bad in ["", "abc", "3.5", "3.0", "1e3", "0x10"] {
            let raw = RawParams::new(bad, "5", "3", "4");
            assert_eq!(
                resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
                Err(ParamError::Parse),
                "seed text {bad:?} should be a parse error"
            );
        }
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let raw = RawParams::new(" 1 ", "5", "3", " 5");
        assert!(resolve(&raw, ModulusSource::DerivedFromCount, no_gate).is_ok());
    }

    #[test]
    fn test_negative_fields_are_range_errors() {
        let raw = RawParams::new("-1", "5", "3", "4");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::Negative { field: "seed" })
        );

        let raw = RawParams::new("1", "-5", "3", "4");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::Negative { field: "multiplier" })
        );

        let raw = RawParams::new("1", "5", "-3", "4");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::Negative { field: "increment" })
        );
    }

    #[test]
    fn test_count_below_one() {
        for bad in ["0", "-5"] {
            let raw = RawParams::new("1", "5", "3", bad);
            assert_eq!(
                resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
                Err(ParamError::CountTooSmall),
                "count {bad:?}"
            );
        }
    }

    #[test]
    fn test_gate_not_invoked_at_limit() {
        let raw = RawParams::new("1", "5", "3", "100");
        // no_gate panics if called
        assert!(resolve(&raw, ModulusSource::DerivedFromCount, no_gate).is_ok());
    }

    #[test]
    fn test_gate_invoked_above_limit() {
        let raw = RawParams::new("1", "5", "3", "150");
        let mut seen = None;
        let res = resolve(&raw, ModulusSource::DerivedFromCount, |count| {
            seen = Some(count);
            GateDecision::Proceed
        })
        .unwrap();
        assert_eq!(seen, Some(150));
        let (params, count) = ready(res);
        assert_eq!(count, 150);
        assert_eq!(params.modulus(), 256);
    }

    #[test]
    fn test_gate_cancel_is_not_an_error() {
        let raw = RawParams::new("1", "5", "3", "150");
        let res = resolve(&raw, ModulusSource::DerivedFromCount, |_| GateDecision::Cancel);
        assert_eq!(res, Ok(Resolution::Cancelled));
    }

    #[test]
    fn test_rule_order_parse_before_count() {
        // A broken seed field must win over a broken count range.
        let raw = RawParams::new("abc", "5", "3", "0");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::Parse)
        );
    }

    #[test]
    fn test_rule_order_count_before_negativity() {
        // Rule 2 (count >= 1) is checked before rule 3 (sign of the
        // remaining fields), so a bad count wins over a negative seed.
        let raw = RawParams::new("-1", "5", "3", "0");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::CountTooSmall)
        );
    }

    #[test]
    fn test_gate_fires_only_for_valid_params() {
        // Invalid seed with an over-limit count: validation fails
        // before the gate can fire.
        let raw = RawParams::new("1024", "5", "3", "150");
        assert_eq!(
            resolve(&raw, ModulusSource::DerivedFromCount, no_gate),
            Err(ParamError::SeedOutOfRange {
                seed: 1024,
                modulus: 256
            })
        );
    }
}
