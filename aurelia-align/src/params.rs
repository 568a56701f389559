//! Alignment scoring parameters.

use aurelia_core::{AureliaError, Result};

/// The four scoring knobs for local alignment, immutable for the lifetime
/// of one alignment call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignParams {
    pub match_score: f64,
    pub mismatch_score: f64,
    pub gap_open: f64,
    pub gap_extend: f64,
}

impl AlignParams {
    /// Create a parameter set, checking each knob's sign.
    ///
    /// # Errors
    ///
    /// [`AureliaError::InvalidParameter`] unless `match_score` is positive
    /// and `mismatch_score`, `gap_open`, `gap_extend` are all negative.
    pub fn new(
        match_score: f64,
        mismatch_score: f64,
        gap_open: f64,
        gap_extend: f64,
    ) -> Result<Self> {
        if !(match_score > 0.0) {
            return Err(AureliaError::InvalidParameter(
                "match_score must be positive".into(),
            ));
        }
        if !(mismatch_score < 0.0) {
            return Err(AureliaError::InvalidParameter(
                "mismatch_score must be negative".into(),
            ));
        }
        if !(gap_open < 0.0) {
            return Err(AureliaError::InvalidParameter(
                "gap_open must be negative".into(),
            ));
        }
        if !(gap_extend < 0.0) {
            return Err(AureliaError::InvalidParameter(
                "gap_extend must be negative".into(),
            ));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        })
    }

    /// Score a pair of bases. Case-insensitive.
    pub fn score_pair(&self, a: u8, b: u8) -> f64 {
        if a.to_ascii_uppercase() == b.to_ascii_uppercase() {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl Default for AlignParams {
    /// Default scoring: +2 match, −1 mismatch, −10 gap open, −0.5 gap extend.
    fn default() -> Self {
        Self {
            match_score: 2.0,
            mismatch_score: -1.0,
            gap_open: -10.0,
            gap_extend: -0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let params = AlignParams::default();
        assert_eq!(params.match_score, 2.0);
        assert_eq!(params.mismatch_score, -1.0);
        assert_eq!(params.gap_open, -10.0);
        assert_eq!(params.gap_extend, -0.5);
    }

    #[test]
    fn sign_checks() {
        assert!(AlignParams::new(2.0, -1.0, -10.0, -0.5).is_ok());
        assert!(AlignParams::new(0.0, -1.0, -10.0, -0.5).is_err());
        assert!(AlignParams::new(2.0, 1.0, -10.0, -0.5).is_err());
        assert!(AlignParams::new(2.0, -1.0, 0.0, -0.5).is_err());
        assert!(AlignParams::new(2.0, -1.0, -10.0, 0.5).is_err());
    }

    #[test]
    fn nan_rejected() {
        assert!(AlignParams::new(f64::NAN, -1.0, -10.0, -0.5).is_err());
    }

    #[test]
    fn score_pair_case_insensitive() {
        let params = AlignParams::default();
        assert_eq!(params.score_pair(b'A', b'a'), 2.0);
        assert_eq!(params.score_pair(b'A', b'T'), -1.0);
    }
}
