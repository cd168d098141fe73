// SPDX-License-Identifier: LGPL-3.0-or-later

//! # lcg-scatter
//!
//! A didactic linear congruential generator (LCG) with table and
//! scatter-plot output. Plotting successive normalized values against
//! their index is a standard way to make LCG lattice artifacts visible,
//! which is exactly what this crate computes the coordinates for.
//!
//! The crate covers the pure computation only:
//!
//! - **Generator**: the recurrence `x[i] = (a * x[i-1] + c) mod m` and
//!   normalization of each output into `[0, 1)`
//! - **Parameter validation**: parsing raw text fields, range checks,
//!   and automatic modulus derivation as the next power of two above
//!   the requested sample count
//! - **Plot mapping**: deterministic placement of a normalized sequence
//!   into a rectangular drawing region
//!
//! Form reading, event wiring, and canvas drawing are the caller's
//! concern; the crate hands back samples, coordinates, and preformatted
//! table labels.
//!
//! This is a textbook weak generator kept weak on purpose. Do not use
//! it where randomness quality matters.
//!
//! # Examples
//! ```
//! use lcg_scatter::{run_once, GateDecision, ModulusSource, PlotRegion, RawParams, RunOutcome};
//!
//! let raw = RawParams::new("1", "5", "3", "5");
//! let region = PlotRegion::new(640.0, 480.0);
//!
//! let outcome = run_once(&raw, ModulusSource::DerivedFromCount, &region, |_| {
//!     GateDecision::Proceed
//! })
//! .unwrap();
//!
//! match outcome {
//!     RunOutcome::Completed(output) => {
//!         assert_eq!(output.samples.len(), 5);
//!         assert_eq!(output.points.len(), 5);
//!     }
//!     RunOutcome::Cancelled => unreachable!("no gate below 100 samples"),
//! }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod params;
pub mod plot;
pub mod run;

// Re-export commonly used types
pub use error::ParamError;
pub use generator::{GeneratorParams, Lcg, Sample, MAX_MODULUS};
pub use params::{
    next_pow2, resolve, GateDecision, ModulusSource, RawParams, Resolution, SOFT_COUNT_LIMIT,
};
pub use plot::{PlotPoint, PlotRegion};
pub use run::{run_once, RunOutcome, RunOutput};
