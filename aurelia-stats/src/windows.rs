//! Windowed GC profiles.
//!
//! The numeric series behind a GC-content plot: one percentage per
//! non-overlapping window. Rendering belongs to external presentation
//! collaborators.

use aurelia_core::{AureliaError, Result};
use aurelia_seq::validate::{validate, SequenceKind};

use crate::composition::NucleotideCounts;

/// GC percentage of each non-overlapping window of `window` bases.
///
/// The final window may be shorter than `window`; it is still included.
/// Validates as IUPAC DNA.
///
/// # Errors
///
/// [`AureliaError::InvalidParameter`] if `window` is zero.
pub fn gc_content_windows(seq: &[u8], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(AureliaError::InvalidParameter(
            "window size must be at least 1".into(),
        ));
    }
    validate(seq, SequenceKind::Dna, true)?;

    Ok(seq
        .chunks(window)
        .map(|chunk| NucleotideCounts::from_slice(chunk).gc_content())
        .collect())
}
