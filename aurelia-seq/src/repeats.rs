//! Repeat detection: exhaustive direct repeats and adjacent tandem pairs.
//!
//! Both scans are intentionally exhaustive — every candidate pattern at
//! every offset — which makes [`find_repeats`] O(n³) or worse in sequence
//! length. Correct by construction; callers bound input size for production
//! use.

use std::collections::BTreeMap;

use aurelia_core::{AureliaError, Result};

use crate::motif::kmp;
use crate::validate::{validate, SequenceKind};

/// Largest tandem window size considered by [`find_tandem_repeats`].
const MAX_TANDEM_WINDOW: usize = 20;

/// A pair of immediately adjacent copies of the same pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TandemRepeat {
    /// The repeated unit.
    pub pattern: String,
    /// Offset of the first copy.
    pub start: usize,
    /// Length of the repeated unit.
    pub length: usize,
    /// Number of consecutive copies detected. Always 2: runs of three or
    /// more adjacent copies surface as overlapping pair records, not as a
    /// higher count.
    pub copies: usize,
}

/// Find every pattern that occurs more than once in `seq`.
///
/// For every pattern length from `min_length` up to `len/2` (inclusive) and
/// every start offset, the pattern's full occurrence list is computed with
/// the same exact-match routine as motif search. A pattern appears as a key
/// only if it occurs at least twice; its offsets are sorted ascending.
///
/// # Errors
///
/// Fails validation as strict DNA, and rejects `min_length == 0`
/// ([`AureliaError::InvalidParameter`]) — a zero-length pattern matches
/// everywhere.
pub fn find_repeats(seq: &[u8], min_length: usize) -> Result<BTreeMap<String, Vec<usize>>> {
    validate(seq, SequenceKind::Dna, false)?;
    if min_length == 0 {
        return Err(AureliaError::InvalidParameter(
            "minimum repeat length must be at least 1".into(),
        ));
    }

    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    let len = seq.len();

    let mut repeats: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for pattern_len in min_length..=len / 2 {
        for start in 0..=len - pattern_len {
            let pattern = &seq[start..start + pattern_len];
            // Each distinct pattern is scanned once.
            let key = std::str::from_utf8(pattern).expect("validated ASCII").to_string();
            if repeats.contains_key(&key) {
                continue;
            }
            let occurrences = kmp(&seq, pattern);
            if occurrences.len() > 1 {
                repeats.insert(key, occurrences);
            }
        }
    }
    Ok(repeats)
}

/// Find immediately adjacent repeats of the same pattern.
///
/// For each window size `w` from 2 through `min(20, len/2)`, every offset
/// whose next `w` bytes repeat the current window is recorded as a
/// [`TandemRepeat`] with `copies == 2`.
pub fn find_tandem_repeats(seq: &[u8]) -> Result<Vec<TandemRepeat>> {
    validate(seq, SequenceKind::Dna, false)?;
    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    let len = seq.len();

    let mut results = Vec::new();
    for window in 2..=MAX_TANDEM_WINDOW.min(len / 2) {
        for start in 0..=len.saturating_sub(2 * window) {
            let first = &seq[start..start + window];
            let second = &seq[start + window..start + 2 * window];
            if first == second {
                results.push(TandemRepeat {
                    pattern: std::str::from_utf8(first).expect("validated ASCII").to_string(),
                    start,
                    length: window,
                    copies: 2,
                });
            }
        }
    }
    Ok(results)
}
