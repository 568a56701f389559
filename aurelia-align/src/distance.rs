//! Pairwise distance measures over equal-length sequences.

use aurelia_core::{AureliaError, Result};

/// Number of positions at which two equal-length sequences differ.
///
/// Case-insensitive. Both inputs must be non-empty and the same length.
///
/// # Errors
///
/// [`AureliaError::EmptySequence`] when either input is empty;
/// [`AureliaError::LengthMismatch`] (carrying both lengths) otherwise when
/// they differ.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.is_empty() || b.is_empty() {
        return Err(AureliaError::EmptySequence);
    }
    if a.len() != b.len() {
        return Err(AureliaError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b)
        .filter(|(x, y)| x.to_ascii_uppercase() != y.to_ascii_uppercase())
        .count())
}

/// Proportion of differing sites between two equal-length sequences,
/// in [0.0, 1.0].
pub fn p_distance(a: &[u8], b: &[u8]) -> Result<f64> {
    let diffs = hamming_distance(a, b)?;
    Ok(diffs as f64 / a.len() as f64)
}
