//! Sequence transformations: reverse complement, transcription, translation.
//!
//! The free functions here are the operation-level API: each validates its
//! input first (strict or IUPAC, per the `allow_ambiguous` flag), uppercases,
//! and then transforms. The typed sequences in [`crate::types`] share the
//! same raw helpers and skip re-validation because construction already
//! gated them.

use aurelia_core::Result;

use crate::codon;
use crate::validate::{validate, SequenceKind};

/// Complement a DNA base. Only the four canonical bases are mapped
/// (A↔T, G↔C); every other symbol passes through unchanged.
pub(crate) fn dna_complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}

/// Complement an RNA base (A↔U, G↔C); other symbols pass through unchanged.
pub(crate) fn rna_complement(b: u8) -> u8 {
    match b {
        b'A' => b'U',
        b'U' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}

pub(crate) fn raw_reverse_complement(seq: &[u8], complement: fn(u8) -> u8) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn uppercased(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|b| b.to_ascii_uppercase()).collect()
}

/// Reverse complement of a DNA sequence.
///
/// Validates first; with `allow_ambiguous`, IUPAC codes are accepted and pass
/// through the complement table unchanged (the involution property holds
/// either way).
pub fn reverse_complement(seq: &[u8], allow_ambiguous: bool) -> Result<Vec<u8>> {
    validate(seq, SequenceKind::Dna, allow_ambiguous)?;
    Ok(raw_reverse_complement(&uppercased(seq), dna_complement))
}

/// Transcribe DNA to RNA: every `T` becomes `U`, nothing else changes.
pub fn transcribe(seq: &[u8], allow_ambiguous: bool) -> Result<Vec<u8>> {
    validate(seq, SequenceKind::Dna, allow_ambiguous)?;
    Ok(uppercased(seq)
        .into_iter()
        .map(|b| if b == b'T' { b'U' } else { b })
        .collect())
}

/// Translate RNA to protein through the standard genetic code.
///
/// Codons are read non-overlapping from offset 0. Codons outside the
/// 64-entry table (ambiguity codes) emit the placeholder `X`; translation
/// halts at the first stop codon without emitting a residue; a trailing
/// partial codon is silently dropped.
pub fn translate(seq: &[u8], allow_ambiguous: bool) -> Result<Vec<u8>> {
    validate(seq, SequenceKind::Rna, allow_ambiguous)?;
    Ok(codon::translate_sequence(&uppercased(seq)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complement_basic() {
        assert_eq!(reverse_complement(b"ATGC", false).unwrap(), b"GCAT");
        assert_eq!(reverse_complement(b"AAAA", false).unwrap(), b"TTTT");
    }

    #[test]
    fn reverse_complement_rejects_invalid() {
        assert!(reverse_complement(b"ATGX", false).is_err());
        assert!(reverse_complement(b"", false).is_err());
    }

    #[test]
    fn reverse_complement_ambiguity_passes_through() {
        // N is self-positioned: reversed, not complemented.
        assert_eq!(reverse_complement(b"ATGN", true).unwrap(), b"NCAT");
        assert!(reverse_complement(b"ATGN", false).is_err());
    }

    #[test]
    fn reverse_complement_involution() {
        let seq = b"GATTACAGATTACA";
        let once = reverse_complement(seq, false).unwrap();
        let twice = reverse_complement(&once, false).unwrap();
        assert_eq!(twice, seq);
    }

    #[test]
    fn transcribe_replaces_t_with_u() {
        assert_eq!(transcribe(b"ATCG", false).unwrap(), b"AUCG");
        assert_eq!(transcribe(b"TTTT", false).unwrap(), b"UUUU");
    }

    #[test]
    fn transcribe_preserves_length() {
        let out = transcribe(b"ATGGCCATT", false).unwrap();
        assert_eq!(out.len(), 9);
        assert!(!out.contains(&b'T'));
    }

    #[test]
    fn translate_basic() {
        // AUG=M, UUU=F, UAA=stop
        assert_eq!(translate(b"AUGUUUUAA", false).unwrap(), b"MF");
    }

    #[test]
    fn translate_requires_rna() {
        assert!(translate(b"ATGTTT", false).is_err());
    }

    #[test]
    fn translate_lowercase_input() {
        assert_eq!(translate(b"auguuu", false).unwrap(), b"MF");
    }
}
