//! Exact motif search.
//!
//! Knuth-Morris-Pratt over validated, uppercased sequences. Every
//! overlapping occurrence is reported — the scan window slides by one
//! position, never by the motif length.

use aurelia_core::Result;

use crate::validate::{validate, SequenceKind};

/// Knuth-Morris-Pratt exact pattern matching.
///
/// Builds a failure (partial match) table in O(m), then scans in O(n).
/// Returns the starting positions of all (overlapping) occurrences,
/// ascending.
pub(crate) fn kmp(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return vec![];
    }

    // Failure function.
    let mut fail = vec![0usize; m];
    let mut k = 0usize;
    for i in 1..m {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }

    // Search phase.
    let mut results = Vec::new();
    let mut q = 0usize;
    for i in 0..n {
        while q > 0 && pattern[q] != text[i] {
            q = fail[q - 1];
        }
        if pattern[q] == text[i] {
            q += 1;
        }
        if q == m {
            results.push(i + 1 - m);
            q = fail[q - 1];
        }
    }
    results
}

/// Find all occurrences of `motif` in `seq` as exact contiguous substrings.
///
/// Both operands are validated independently as strict DNA before searching;
/// both are uppercased. Overlapping matches are all reported. A motif longer
/// than the sequence yields an empty list.
pub fn find_motif(seq: &[u8], motif: &[u8]) -> Result<Vec<usize>> {
    validate(seq, SequenceKind::Dna, false)?;
    validate(motif, SequenceKind::Dna, false)?;

    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    let motif: Vec<u8> = motif.iter().map(|b| b.to_ascii_uppercase()).collect();
    Ok(kmp(&seq, &motif))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            1..=max_len,
        )
    }

    proptest! {
        #[test]
        fn matches_brute_force_cross_check(
            seq in dna_seq(200),
            motif in dna_seq(8),
        ) {
            prop_assume!(motif.len() <= seq.len());
            let found = find_motif(&seq, &motif).unwrap();
            let brute: Vec<usize> = (0..=seq.len() - motif.len())
                .filter(|&i| seq[i..i + motif.len()] == motif[..])
                .collect();
            prop_assert_eq!(found, brute);
        }

        #[test]
        fn every_offset_is_a_real_match(
            seq in dna_seq(200),
            motif in dna_seq(6),
        ) {
            prop_assume!(motif.len() <= seq.len());
            for offset in find_motif(&seq, &motif).unwrap() {
                prop_assert_eq!(&seq[offset..offset + motif.len()], &motif[..]);
            }
        }
    }
}
