//! Validated sequence types and discovery algorithms for the Aurelia workspace.
//!
//! Provides strongly-typed, validated nucleotide sequences with strict and
//! IUPAC alphabets, plus the discovery layer:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`IupacDnaAlphabet`], [`RnaAlphabet`],
//!   [`IupacRnaAlphabet`], [`ProteinAlphabet`]
//! - **Validation** — [`check`], [`validate`], [`validate_pair`] with full
//!   offending-character reporting
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`]
//! - **Transformations** — reverse complement, transcription, translation
//! - **ORF finding** — [`find_orfs`]
//! - **Motif search** — [`find_motif`] (all overlapping occurrences)
//! - **Repeat detection** — [`find_repeats`], [`find_tandem_repeats`]
//! - **Promoter scan** — [`predict_promoters`] (TATA-box PWM)
//!
//! # Example
//!
//! ```
//! use aurelia_seq::{DnaSequence, find_motif};
//! use aurelia_core::Sequence;
//!
//! let dna = DnaSequence::new(b"agctatcggctagcg").unwrap();
//! assert_eq!(dna.as_bytes(), b"AGCTATCGGCTAGCG");
//!
//! let rc = dna.reverse_complement();
//! assert_eq!(rc.as_bytes(), b"CGCTAGCCGATAGCT");
//!
//! let hits = find_motif(dna.as_bytes(), b"CG").unwrap();
//! assert_eq!(hits, vec![6, 13]);
//! ```

pub mod alphabet;
pub mod codon;
pub mod kmer;
pub mod motif;
pub mod orf;
pub mod promoter;
pub mod repeats;
pub mod seq;
pub mod transform;
pub mod types;
pub mod validate;

pub use alphabet::{
    Alphabet, DnaAlphabet, IupacDnaAlphabet, IupacRnaAlphabet, ProteinAlphabet, RnaAlphabet,
};
pub use codon::{translate_codon, translate_sequence, CodonProduct};
pub use kmer::KmerIter;
pub use motif::find_motif;
pub use orf::{find_orfs, Orf, DEFAULT_MIN_ORF_LENGTH};
pub use promoter::{predict_promoters, PromoterSite};
pub use repeats::{find_repeats, find_tandem_repeats, TandemRepeat};
pub use seq::ValidatedSeq;
pub use transform::{reverse_complement, transcribe, translate};
pub use types::{
    DnaSequence, ProteinSequence, RnaSequence, StrictDnaSequence, StrictRnaSequence,
};
pub use validate::{check, validate, validate_pair, validate_reading_frame, SequenceKind, ValidationResult};
