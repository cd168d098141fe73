// SPDX-License-Identifier: LGPL-3.0-or-later

//! Mapping of normalized sample sequences onto a drawing region.
//!
//! The mapper is independent of any particular rendering surface: it
//! only knows a total width/height and four margins, and spits out one
//! device-coordinate point per sample, in sample order. Samples are
//! spaced evenly left to right by index, and the normalized value is
//! inverted vertically so that larger values plot *higher* on a y-down
//! pixel surface.

use crate::generator::Sample;

/// One plot coordinate in device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Horizontal device coordinate.
    pub x: f64,
    /// Vertical device coordinate (y grows downward).
    pub y: f64,
}

/// Rectangular drawing region: total size plus inner margins.
///
/// # Examples
/// ```
/// use lcg_scatter::{PlotRegion, Sample};
///
/// let mut region = PlotRegion::new(640.0, 480.0);
/// region.set_margins(20.0, 20.0, 10.0, 10.0);
///
/// let samples = [
///     Sample { raw: 0, normalized: 0.0 },
///     Sample { raw: 8, normalized: 0.5 },
/// ];
/// let points = region.map(&samples);
///
/// assert_eq!(points[0].x, 20.0); // first point sits on the left margin
/// assert_eq!(points[1].x, 620.0); // last point sits on the right margin
/// assert_eq!(points[0].y, 470.0); // normalized 0 plots at the bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRegion {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlotRegion {
    /// Create a region with the given total size and zero margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
        }
    }

    /// Set the inner margins.
    pub fn set_margins(&mut self, left: f64, right: f64, top: f64, bottom: f64) {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
    }

    /// Total width of the region.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total height of the region.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map samples to device coordinates, one point per sample, index
    /// order preserved.
    ///
    /// For `n` samples, point `i` gets
    /// `x = left + (i / max(n-1, 1)) * (width - left - right)`, so a
    /// single sample sits on the left margin and the last of many sits
    /// on the right one. `y = top + (1 - normalized) * (height - top -
    /// bottom)` flips the value axis to the usual mathematical
    /// orientation. An empty sequence maps to no points; clearing and
    /// axis redraws stay with the caller.
    pub fn map(&self, samples: &[Sample]) -> Vec<PlotPoint> {
        let span_x = self.width - self.left - self.right;
        let span_y = self.height - self.top - self.bottom;
        // max(n-1, 1) guards the n = 1 division.
        let denom = samples.len().saturating_sub(1).max(1) as f64;

        samples
            .iter()
            .enumerate()
            .map(|(i, s)| PlotPoint {
                x: self.left + (i as f64 / denom) * span_x,
                y: self.top + (1.0 - s.normalized) * span_y,
            })
            .collect()
    }
}
