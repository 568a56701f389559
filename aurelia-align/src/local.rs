//! Smith-Waterman local alignment.
//!
//! Dynamic programming over a `(m+1) × (n+1)` score grid with interior
//! cells floored at zero and traceback from the highest-scoring cell.
//!
//! One deliberate divergence from the textbook formulation: row 0 and
//! column 0 are initialized to the gap-penalty ramp
//! `gap_open + (k−1)·gap_extend` instead of being clamped to zero. The
//! boundary cells price an all-gap alignment prefix; because gap penalties
//! are negative they never win the max, so the reported score is still
//! non-negative. The zero-clamped boundary is the historical variant and is
//! not implemented.

use aurelia_core::{Result, Scored};

use crate::matrix::{Matrix, PointerMatrix, ScoreMatrix, TracePointer};
use crate::params::AlignParams;

/// The aligned region produced by traceback, gaps as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedPair {
    /// First sequence with gap symbols inserted.
    pub seq1: Vec<u8>,
    /// Second sequence with gap symbols inserted.
    pub seq2: Vec<u8>,
    /// Start of the aligned region in the first sequence (0-based, inclusive).
    pub start1: usize,
    /// End of the aligned region in the first sequence (exclusive).
    pub end1: usize,
    /// Start of the aligned region in the second sequence (0-based, inclusive).
    pub start2: usize,
    /// End of the aligned region in the second sequence (exclusive).
    pub end2: usize,
}

impl AlignedPair {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }
}

/// Result of a local alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalAlignment {
    /// Best local score: the maximum over all score-matrix cells. Never
    /// negative.
    pub score: f64,
    /// The traceback alignment; `None` when the best score is zero.
    pub alignment: Option<AlignedPair>,
    /// The filled `(m+1) × (n+1)` score grid.
    pub score_matrix: ScoreMatrix,
    /// The traceback-pointer grid, same shape.
    pub pointer_matrix: PointerMatrix,
}

impl Scored for LocalAlignment {
    fn score(&self) -> f64 {
        self.score
    }
}

fn fill(
    seq1: &[u8],
    seq2: &[u8],
    params: &AlignParams,
) -> (ScoreMatrix, PointerMatrix, f64, usize, usize) {
    let m = seq1.len();
    let n = seq2.len();

    let mut score: ScoreMatrix = Matrix::new(m + 1, n + 1);
    let mut pointer: PointerMatrix = Matrix::new(m + 1, n + 1);

    // Gap-penalty ramp along both boundaries; (0,0) stays 0.
    for j in 1..=n {
        score[(0, j)] = params.gap_open + (j - 1) as f64 * params.gap_extend;
    }
    for i in 1..=m {
        score[(i, 0)] = params.gap_open + (i - 1) as f64 * params.gap_extend;
    }

    // Track the first maximal cell in row-major order; (0,0) holds 0, so
    // the reported score is the matrix maximum and never negative.
    let mut best = 0.0f64;
    let mut best_i = 0usize;
    let mut best_j = 0usize;

    for i in 1..=m {
        for j in 1..=n {
            let diagonal = score[(i - 1, j - 1)] + params.score_pair(seq1[i - 1], seq2[j - 1]);
            let up = score[(i - 1, j)] + params.gap_extend;
            let left = score[(i, j - 1)] + params.gap_extend;

            let cell = 0.0f64.max(diagonal).max(up).max(left);
            score[(i, j)] = cell;

            // Tie-break priority: zero, then diagonal > up > left.
            pointer[(i, j)] = if cell == 0.0 {
                TracePointer::None
            } else if cell == diagonal {
                TracePointer::Diagonal
            } else if cell == up {
                TracePointer::Up
            } else {
                TracePointer::Left
            };

            if cell > best {
                best = cell;
                best_i = i;
                best_j = j;
            }
        }
    }

    (score, pointer, best, best_i, best_j)
}

/// Local alignment with full traceback.
///
/// The score matrix and pointer matrix are returned alongside the score and
/// the aligned region. Empty input on either side yields score 0 with no
/// alignment; the matrices are still shaped `(m+1) × (n+1)`.
pub fn local_align(seq1: &[u8], seq2: &[u8], params: &AlignParams) -> Result<LocalAlignment> {
    let (score_matrix, pointer_matrix, best, best_i, best_j) = fill(seq1, seq2, params);

    let alignment = if best > 0.0 {
        let mut aligned1 = Vec::new();
        let mut aligned2 = Vec::new();
        let mut i = best_i;
        let mut j = best_j;

        // Follow pointers until a cell with no pointer or zero score.
        while pointer_matrix[(i, j)] != TracePointer::None && score_matrix[(i, j)] > 0.0 {
            match pointer_matrix[(i, j)] {
                TracePointer::Diagonal => {
                    aligned1.push(seq1[i - 1]);
                    aligned2.push(seq2[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                TracePointer::Up => {
                    aligned1.push(seq1[i - 1]);
                    aligned2.push(b'-');
                    i -= 1;
                }
                TracePointer::Left => {
                    aligned1.push(b'-');
                    aligned2.push(seq2[j - 1]);
                    j -= 1;
                }
                TracePointer::None => unreachable!("loop condition excludes None"),
            }
        }

        aligned1.reverse();
        aligned2.reverse();

        Some(AlignedPair {
            seq1: aligned1,
            seq2: aligned2,
            start1: i,
            end1: best_i,
            start2: j,
            end2: best_j,
        })
    } else {
        None
    };

    Ok(LocalAlignment {
        score: best,
        alignment,
        score_matrix,
        pointer_matrix,
    })
}

/// Score-only local alignment; skips traceback and matrix retention.
pub fn local_align_score(seq1: &[u8], seq2: &[u8], params: &AlignParams) -> Result<f64> {
    let (_, _, best, _, _) = fill(seq1, seq2, params);
    Ok(best)
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
        fn score_never_negative(q in dna_seq(40), t in dna_seq(40)) {
            let params = AlignParams::default();
            let result = local_align(&q, &t, &params).unwrap();
            prop_assert!(result.score >= 0.0);
        }

        #[test]
        fn score_is_deterministic(q in dna_seq(40), t in dna_seq(40)) {
            let params = AlignParams::default();
            let r1 = local_align(&q, &t, &params).unwrap();
            let r2 = local_align(&q, &t, &params).unwrap();
            prop_assert_eq!(r1.score, r2.score);
            prop_assert_eq!(r1.alignment, r2.alignment);
        }

        #[test]
        fn self_alignment_is_perfect(seq in dna_seq(40)) {
            let params = AlignParams::default();
            let result = local_align(&seq, &seq, &params).unwrap();
            prop_assert_eq!(result.score, seq.len() as f64 * params.match_score);
        }

        #[test]
        fn aligned_rows_equal_length(q in dna_seq(40), t in dna_seq(40)) {
            let params = AlignParams::default();
            if let Some(aligned) = local_align(&q, &t, &params).unwrap().alignment {
                prop_assert_eq!(aligned.seq1.len(), aligned.seq2.len());
                prop_assert!(!aligned.is_empty());
            }
        }

        #[test]
        fn alignment_columns_bounded(q in dna_seq(40), t in dna_seq(40)) {
            let params = AlignParams::default();
            if let Some(aligned) = local_align(&q, &t, &params).unwrap().alignment {
                prop_assert!(aligned.len() <= q.len() + t.len());
            }
        }
    }
}
