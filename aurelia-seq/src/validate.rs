//! Sequence validation against strict and IUPAC nucleotide alphabets.
//!
//! [`check`] produces a [`ValidationResult`] value carrying the verdict, the
//! full offending-character set, and a display message; [`validate`] is the
//! gate form that converts a failed check into an [`AureliaError`]. Every
//! analysis operation in the workspace validates its input first and aborts
//! without partial computation on failure.

use aurelia_core::{AureliaError, Result};

use crate::alphabet::{Alphabet, DnaAlphabet, IupacDnaAlphabet, IupacRnaAlphabet, RnaAlphabet};

/// Which nucleic acid a sequence claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    Dna,
    Rna,
}

impl SequenceKind {
    /// The alphabet name used in error messages, after ambiguity resolution.
    fn alphabet_name(self, allow_ambiguous: bool) -> &'static str {
        match (self, allow_ambiguous) {
            (SequenceKind::Dna, false) => DnaAlphabet::NAME,
            (SequenceKind::Dna, true) => IupacDnaAlphabet::NAME,
            (SequenceKind::Rna, false) => RnaAlphabet::NAME,
            (SequenceKind::Rna, true) => IupacRnaAlphabet::NAME,
        }
    }

    fn is_valid_byte(self, allow_ambiguous: bool, b: u8) -> bool {
        match (self, allow_ambiguous) {
            (SequenceKind::Dna, false) => DnaAlphabet::is_valid(b),
            (SequenceKind::Dna, true) => IupacDnaAlphabet::is_valid(b),
            (SequenceKind::Rna, false) => RnaAlphabet::is_valid(b),
            (SequenceKind::Rna, true) => IupacRnaAlphabet::is_valid(b),
        }
    }
}

/// Outcome of a validation check. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    /// Whether the sequence passed.
    pub is_valid: bool,
    /// Every distinct offending character, sorted. Empty on success and on
    /// empty input.
    pub invalid_symbols: Vec<char>,
    /// Human-readable description of the verdict.
    pub message: String,
    /// Alphabet the sequence was checked against.
    #[cfg_attr(feature = "serde", serde(skip))]
    alphabet: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    empty: bool,
}

impl ValidationResult {
    /// Convert the verdict into a `Result`, preserving the offending set.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else if self.empty {
            Err(AureliaError::EmptySequence)
        } else {
            Err(AureliaError::InvalidSymbol {
                alphabet: self.alphabet,
                symbols: self.invalid_symbols,
            })
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_valid { "VALID" } else { "INVALID" };
        write!(f, "{}: {}", verdict, self.message)
    }
}

/// Check a sequence against the resolved alphabet.
///
/// Case-insensitive: bytes are uppercased before comparison. All offending
/// characters are collected (deduplicated, sorted), not just the first.
pub fn check(sequence: &[u8], kind: SequenceKind, allow_ambiguous: bool) -> ValidationResult {
    let alphabet = kind.alphabet_name(allow_ambiguous);

    if sequence.is_empty() {
        return ValidationResult {
            is_valid: false,
            invalid_symbols: Vec::new(),
            message: "empty sequence".into(),
            alphabet,
            empty: true,
        };
    }

    let mut offenders: Vec<char> = sequence
        .iter()
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| !kind.is_valid_byte(allow_ambiguous, b))
        .map(char::from)
        .collect();
    offenders.sort_unstable();
    offenders.dedup();

    if offenders.is_empty() {
        ValidationResult {
            is_valid: true,
            invalid_symbols: Vec::new(),
            message: "sequence is valid".into(),
            alphabet,
            empty: false,
        }
    } else {
        let listed: Vec<String> = offenders.iter().map(|c| c.to_string()).collect();
        ValidationResult {
            is_valid: false,
            invalid_symbols: offenders,
            message: format!("invalid {} bases found: {}", alphabet, listed.join(",")),
            alphabet,
            empty: false,
        }
    }
}

/// Validate a sequence, failing with the matching [`AureliaError`].
pub fn validate(sequence: &[u8], kind: SequenceKind, allow_ambiguous: bool) -> Result<()> {
    check(sequence, kind, allow_ambiguous).into_result()
}

/// Validate both operands of a paired operation independently.
pub fn validate_pair(
    a: &[u8],
    b: &[u8],
    kind: SequenceKind,
    allow_ambiguous: bool,
) -> Result<()> {
    validate(a, kind, allow_ambiguous)?;
    validate(b, kind, allow_ambiguous)
}

/// Validate a strict DNA sequence whose length must be divisible by 3.
pub fn validate_reading_frame(sequence: &[u8]) -> Result<()> {
    validate(sequence, SequenceKind::Dna, false)?;
    if sequence.len() % 3 != 0 {
        return Err(AureliaError::InvalidParameter(format!(
            "sequence length {} is not divisible by 3",
            sequence.len()
        )));
    }
    Ok(())
}
