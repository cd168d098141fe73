// SPDX-License-Identifier: LGPL-3.0-or-later

//! Label formatting for the external table/echo adapters.
//!
//! The crate never renders anything itself; these helpers only build
//! the strings the display adapter shows. Indices are 1-based in the
//! labels, normalized values are printed with 5 decimal places.

use crate::generator::Sample;

/// Raw-value label for the sample at 0-based position `index`.
pub fn raw_label(index: usize, sample: &Sample) -> String {
    format!("X{}: {}", index + 1, sample.raw)
}

/// Normalized-value label for the sample at 0-based position `index`.
pub fn normalized_label(index: usize, sample: &Sample) -> String {
    format!("u{}: {:.5}", index + 1, sample.normalized)
}

/// Build the full table: one `(raw, normalized)` label pair per sample,
/// in sequence order.
pub fn table_rows(samples: &[Sample]) -> Vec<(String, String)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| (raw_label(i, s), normalized_label(i, s)))
        .collect()
}

/// The derived-modulus echo for the read-only display field. This is
/// presentation only; the authoritative value lives in the params.
pub fn modulus_echo(modulus: u64) -> String {
    modulus.to_string()
}
