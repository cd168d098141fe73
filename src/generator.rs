// SPDX-License-Identifier: LGPL-3.0-or-later

//! Linear Congruential Generator over a caller-chosen modulus.
//!
//! The generator follows the textbook recurrence
//! `x[i] = (multiplier * x[i-1] + increment) mod modulus` and emits the
//! states *after* the seed: the first emitted value is `x[1]`, the seed
//! itself is never part of the output. Each raw value is also reported
//! normalized as `raw / modulus`, which lands in `[0, 1)`.
//!
//! Unlike a fixed-word LCG that wraps at a power-of-two word size (see
//! the randomizer in lsp-dsp-units), the modulus here is caller-chosen,
//! so the step is reduced explicitly and computed in `u128`
//! intermediates. `a * x + c` fits in 128 bits for any `u64` operands,
//! so the recurrence itself is exact. The modulus is capped at
//! [`MAX_MODULUS`] (2^53): below that bound both `raw` and `modulus`
//! are exactly representable in `f64` and the correctly rounded
//! quotient of `raw < modulus` stays strictly below 1.0, which keeps
//! every normalized value inside `[0, 1)`. Larger moduli would let
//! `raw / modulus` round up to exactly 1.0.

use crate::error::ParamError;

/// Largest accepted modulus, 2^53. Keeps `raw / modulus` strictly
/// below 1.0 in `f64` arithmetic.
pub const MAX_MODULUS: u64 = 1 << 53;

/// Validated LCG parameters.
///
/// Immutable once constructed; one value is built per run and passed by
/// value through the generator and the plot mapper, never read back
/// from any display state. Construction enforces `1 < modulus <=`
/// [`MAX_MODULUS`] and `seed < modulus`; everything downstream relies
/// on that.
///
/// # Examples
/// ```
/// use lcg_scatter::GeneratorParams;
///
/// let params = GeneratorParams::new(5, 3, 16, 1).unwrap();
/// assert_eq!(params.modulus(), 16);
///
/// assert!(GeneratorParams::new(5, 3, 16, 16).is_err()); // seed >= modulus
/// assert!(GeneratorParams::new(5, 3, 1, 0).is_err()); // modulus <= 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    multiplier: u64,
    increment: u64,
    modulus: u64,
    seed: u64,
}

impl GeneratorParams {
    /// Build validated parameters.
    ///
    /// # Errors
    /// [`ParamError::ModulusTooSmall`] if `modulus <= 1`,
    /// [`ParamError::TooLarge`] if `modulus >` [`MAX_MODULUS`],
    /// [`ParamError::SeedOutOfRange`] if `seed >= modulus`.
    pub fn new(
        multiplier: u64,
        increment: u64,
        modulus: u64,
        seed: u64,
    ) -> Result<Self, ParamError> {
        if modulus <= 1 {
            return Err(ParamError::ModulusTooSmall { modulus });
        }
        if modulus > MAX_MODULUS {
            return Err(ParamError::TooLarge { field: "modulus" });
        }
        if seed >= modulus {
            return Err(ParamError::SeedOutOfRange { seed, modulus });
        }
        Ok(Self {
            multiplier,
            increment,
            modulus,
            seed,
        })
    }

    /// The multiplier `a` of the recurrence.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The increment `c` of the recurrence.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// The modulus `m`; exclusive upper bound of every raw output and
    /// the normalization divisor.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The seed `x[0]`.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// One generator output: the raw state and its normalized counterpart.
///
/// `normalized = raw / modulus`, always in `[0, 1)`. Sequence order is
/// generation order and is preserved into the table and the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Raw LCG state, in `[0, modulus)`.
    pub raw: u64,
    /// `raw / modulus`, in `[0, 1)`.
    pub normalized: f64,
}

/// Linear Congruential Generator.
///
/// # Examples
/// ```
/// use lcg_scatter::{GeneratorParams, Lcg};
///
/// let params = GeneratorParams::new(5, 3, 16, 1).unwrap();
/// let mut lcg = Lcg::new(params);
///
/// let samples = lcg.generate(5);
/// let raw: Vec<u64> = samples.iter().map(|s| s.raw).collect();
/// assert_eq!(raw, [8, 11, 10, 5, 12]);
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    params: GeneratorParams,
    state: u64,
}

impl Lcg {
    /// Create a generator positioned at the seed.
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params,
            state: params.seed(),
        }
    }

    /// The parameters this generator was built with.
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Advance the recurrence one step and return the new state.
    fn step(&mut self) -> u64 {
        let next = (u128::from(self.params.multiplier) * u128::from(self.state)
            + u128::from(self.params.increment))
            % u128::from(self.params.modulus);
        // Reduction by a u64 modulus always fits back into u64.
        self.state = next as u64;
        self.state
    }

    /// Produce the next sample. The first call after construction
    /// returns `x[1]`, not the seed.
    pub fn next_sample(&mut self) -> Sample {
        let raw = self.step();
        Sample {
            raw,
            normalized: raw as f64 / self.params.modulus as f64,
        }
    }

    /// Produce `n` samples in generation order.
    ///
    /// Always returns exactly `n` samples; `n = 0` yields an empty
    /// vector. There are no failure modes once the parameters exist.
    pub fn generate(&mut self, n: u64) -> Vec<Sample> {
        let mut out = Vec::with_capacity(n as usize);
        for _ in 0..n {
            out.push(self.next_sample());
        }
        out
    }
}
