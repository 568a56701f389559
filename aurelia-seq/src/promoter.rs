//! Promoter-region prediction via a fixed TATA-box weight matrix.
//!
//! Scores every 4-base window against a position weight matrix for the
//! TATA-box consensus and reports windows above threshold, best first.

use aurelia_core::{Result, Scored};

use crate::validate::{validate, SequenceKind};

/// Per-position weights for the TATA-box motif.
///
/// Rows are motif positions (consensus T, A, T, A); columns are bases in
/// the order A, C, G, T.
const TATA_BOX_PWM: [[f64; 4]; 4] = [
    [0.1, 0.05, 0.05, 0.8],
    [0.9, 0.03, 0.02, 0.05],
    [0.1, 0.05, 0.05, 0.8],
    [0.9, 0.03, 0.02, 0.05],
];

/// Minimum window score for a site to be reported.
const SCORE_THRESHOLD: f64 = 2.5;

/// Column index for a base in [`TATA_BOX_PWM`]; `None` for ambiguity codes.
fn base_column(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// A candidate promoter site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromoterSite {
    /// Window start offset (0-based).
    pub position: usize,
    /// PWM score of the window.
    pub score: f64,
}

impl Scored for PromoterSite {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Score every 4-mer window against the TATA-box matrix.
///
/// Validates as IUPAC DNA; windows containing ambiguity codes are skipped.
/// Sites scoring above 2.5 are returned sorted by descending score (ties
/// keep ascending position).
pub fn predict_promoters(seq: &[u8]) -> Result<Vec<PromoterSite>> {
    validate(seq, SequenceKind::Dna, true)?;
    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();

    let width = TATA_BOX_PWM.len();
    let mut sites = Vec::new();
    if seq.len() < width {
        return Ok(sites);
    }

    'windows: for (position, window) in seq.windows(width).enumerate() {
        let mut score = 0.0;
        for (row, &base) in window.iter().enumerate() {
            match base_column(base) {
                Some(col) => score += TATA_BOX_PWM[row][col],
                None => continue 'windows,
            }
        }
        if score > SCORE_THRESHOLD {
            sites.push(PromoterSite { position, score });
        }
    }

    // Stable: equal scores keep ascending position.
    sites.sort_by(|a, b| b.score.partial_cmp(&a.score).expect("finite scores"));
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tata_box_scores_highest() {
        let sites = predict_promoters(b"TATAATGCGTATA").unwrap();
        assert!(!sites.is_empty());
        // Two perfect TATA windows (positions 0 and 9) tie; stable sort keeps
        // the earlier one first.
        assert_eq!(sites[0].position, 0);
        assert!(sites.iter().any(|s| s.position == 9));
        for pair in sites.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn threshold_filters_weak_windows() {
        // GGGG scores 0.05+0.02+0.05+0.05 per position — far below 2.5.
        let sites = predict_promoters(b"GGGGGGGG").unwrap();
        assert!(sites.is_empty());
    }

    #[test]
    fn ambiguous_windows_skipped() {
        let with_n = predict_promoters(b"TANATATA").unwrap();
        assert!(with_n.iter().all(|s| s.position >= 3));
    }

    #[test]
    fn short_sequence_yields_nothing() {
        assert!(predict_promoters(b"TAT").unwrap().is_empty());
    }

    #[test]
    fn invalid_sequence_rejected() {
        assert!(predict_promoters(b"TAXA").is_err());
    }
}
