//! Melting temperature estimation.
//!
//! Piecewise over sequence length: the Wallace rule for short
//! oligonucleotides, a GC-count formula with length correction for longer
//! sequences.

use aurelia_core::Result;
use aurelia_seq::validate::{validate, SequenceKind};

use crate::composition::NucleotideCounts;

/// Sequence length at which the GC-based formula takes over.
const WALLACE_RULE_MAX_LEN: usize = 14;

/// Estimated melting temperature in °C.
///
/// Validates as strict DNA. For lengths below 14 the Wallace rule applies:
/// `Tm = 2·(A+T) + 4·(G+C)`. For longer sequences:
/// `Tm = 64.9 + 41·(gc_count − 16.4)/len`, where `gc_count` is the absolute
/// G+C count, not a fraction. The mixed units in the long branch are a known
/// quirk kept for output compatibility; do not "fix" the algebra.
pub fn melting_temp(seq: &[u8]) -> Result<f64> {
    validate(seq, SequenceKind::Dna, false)?;
    let counts = NucleotideCounts::from_slice(seq);
    let len = seq.len();

    if len < WALLACE_RULE_MAX_LEN {
        Ok(2.0 * counts.at() as f64 + 4.0 * counts.gc() as f64)
    } else {
        Ok(64.9 + 41.0 * (counts.gc() as f64 - 16.4) / len as f64)
    }
}
