//! Concrete sequence type aliases and their transformations.
//!
//! - [`DnaSequence`] — reverse complement, transcription, translation
//! - [`RnaSequence`] — reverse complement, reverse transcription, translation
//! - [`ProteinSequence`] — translation output
//!
//! The IUPAC aliases are the defaults; [`StrictDnaSequence`] and
//! [`StrictRnaSequence`] reject ambiguity codes at construction.

use aurelia_core::Result;

use crate::alphabet::{
    DnaAlphabet, IupacDnaAlphabet, IupacRnaAlphabet, ProteinAlphabet, RnaAlphabet,
};
use crate::codon;
use crate::kmer::KmerIter;
use crate::seq::ValidatedSeq;
use crate::transform::{dna_complement, raw_reverse_complement, rna_complement};

/// A validated DNA sequence (IUPAC alphabet).
pub type DnaSequence = ValidatedSeq<IupacDnaAlphabet>;

/// A validated RNA sequence (IUPAC alphabet).
pub type RnaSequence = ValidatedSeq<IupacRnaAlphabet>;

/// A validated DNA sequence restricted to the four canonical bases.
pub type StrictDnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence restricted to the four canonical bases.
pub type StrictRnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated protein/amino acid sequence.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

impl DnaSequence {
    /// Return the reverse complement.
    ///
    /// Only the canonical bases are complemented; ambiguity codes keep their
    /// symbol and change position.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence::from_validated(raw_reverse_complement(self, dna_complement))
    }

    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        RnaSequence::from_validated(rna)
    }

    /// Translate DNA to protein (transcribes first, then translates).
    pub fn translate(&self) -> Result<ProteinSequence> {
        self.transcribe().translate()
    }

    /// Iterate over k-mers of length `k`.
    pub fn kmers(&self, k: usize) -> Result<KmerIter<'_>> {
        KmerIter::new(self, k)
    }
}

impl RnaSequence {
    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> RnaSequence {
        RnaSequence::from_validated(raw_reverse_complement(self, rna_complement))
    }

    /// Reverse-transcribe RNA to DNA (U → T).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        DnaSequence::from_validated(dna)
    }

    /// Translate to protein using the standard genetic code.
    ///
    /// Ambiguous codons become `X`; translation stops at the first stop
    /// codon; a trailing partial codon is dropped.
    ///
    /// # Errors
    ///
    /// [`aurelia_core::AureliaError::EmptySequence`] when no residues
    /// precede the first stop codon (e.g. the sequence starts with `UAA`).
    /// Use [`crate::transform::translate`] for a plain byte result.
    pub fn translate(&self) -> Result<ProteinSequence> {
        ProteinSequence::new(codon::translate_sequence(self))
    }

    /// Iterate over k-mers of length `k`.
    pub fn kmers(&self, k: usize) -> Result<KmerIter<'_>> {
        KmerIter::new(self, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revcomp_palindromic() {
        let seq = DnaSequence::new(b"ACGT").unwrap();
        assert_eq!(seq.reverse_complement().as_ref(), b"ACGT");
    }

    #[test]
    fn revcomp_asymmetric() {
        let seq = DnaSequence::new(b"AACG").unwrap();
        assert_eq!(seq.reverse_complement().as_ref(), b"CGTT");
    }

    #[test]
    fn revcomp_involution_with_ambiguity() {
        let seq = DnaSequence::new(b"ATGCRYN").unwrap();
        let twice = seq.reverse_complement().reverse_complement();
        assert_eq!(twice, seq);
    }

    #[test]
    fn transcription_roundtrip() {
        let dna = DnaSequence::new(b"ATCGATCG").unwrap();
        let roundtrip = dna.transcribe().reverse_transcribe();
        assert_eq!(dna, roundtrip);
    }

    #[test]
    fn dna_translate_goes_through_rna() {
        let dna = DnaSequence::new(b"ATGAAAGCTTAA").unwrap();
        let protein = dna.translate().unwrap();
        assert_eq!(protein.as_ref(), b"MKA");
    }

    #[test]
    fn rna_revcomp_uses_u() {
        let rna = RnaSequence::new(b"AUGC").unwrap();
        assert_eq!(rna.reverse_complement().as_ref(), b"GCAU");
    }

    #[test]
    fn strict_alias_rejects_ambiguity() {
        assert!(StrictDnaSequence::new(b"ATGCN").is_err());
        assert!(DnaSequence::new(b"ATGCN").is_ok());
    }
}
