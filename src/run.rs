// SPDX-License-Identifier: LGPL-3.0-or-later

//! One full submission: validate, generate, map.
//!
//! A run is synchronous and self-contained. Nothing persists between
//! runs; every submission builds fresh parameters from the raw fields
//! and produces a fresh sample sequence and point set. A declined
//! confirmation gate aborts before generation with no output and no
//! side effects, which the adapter must treat as "leave everything as
//! it was".

use crate::error::ParamError;
use crate::generator::{GeneratorParams, Lcg, Sample};
use crate::params::{resolve, GateDecision, ModulusSource, RawParams, Resolution};
use crate::plot::{PlotPoint, PlotRegion};

/// Everything a completed run hands to the adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// The validated parameters, including the possibly derived modulus
    /// for the display echo.
    pub params: GeneratorParams,
    /// Generated samples, in generation order.
    pub samples: Vec<Sample>,
    /// One plot point per sample, same order.
    pub points: Vec<PlotPoint>,
}

/// Result of a run that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The run generated output.
    Completed(RunOutput),
    /// The user declined the soft-count gate. No output was produced
    /// and no displayed state may change.
    Cancelled,
}

/// Execute one submission end to end.
///
/// On `Err`, the adapter clears previous results and shows the message;
/// on [`RunOutcome::Cancelled`], it changes nothing at all.
///
/// # Examples
/// ```
/// use lcg_scatter::{run_once, GateDecision, ModulusSource, PlotRegion, RawParams, RunOutcome};
///
/// let raw = RawParams::new("1", "5", "3", "5");
/// let region = PlotRegion::new(640.0, 480.0);
/// let outcome = run_once(&raw, ModulusSource::DerivedFromCount, &region, |_| {
///     GateDecision::Proceed
/// })
/// .unwrap();
///
/// let output = match outcome {
///     RunOutcome::Completed(output) => output,
///     RunOutcome::Cancelled => unreachable!(),
/// };
/// assert_eq!(output.params.modulus(), 8); // next_pow2(5)
/// assert_eq!(output.samples.len(), output.points.len());
/// ```
pub fn run_once(
    raw: &RawParams,
    source: ModulusSource,
    region: &PlotRegion,
    gate: impl FnOnce(u64) -> GateDecision,
) -> Result<RunOutcome, ParamError> {
    let (params, count) = match resolve(raw, source, gate)? {
        Resolution::Ready { params, count } => (params, count),
        Resolution::Cancelled => return Ok(RunOutcome::Cancelled),
    };

    let mut lcg = Lcg::new(params);
    let samples = lcg.generate(count);
    let points = region.map(&samples);

    Ok(RunOutcome::Completed(RunOutput {
        params,
        samples,
        points,
    }))
}
