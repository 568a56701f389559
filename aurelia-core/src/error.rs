//! Structured error types for the Aurelia workspace.

use thiserror::Error;

/// Unified error type for all Aurelia operations.
///
/// The four variants cover the complete failure taxonomy of the core:
/// every fallible operation fails with one of these before producing any
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AureliaError {
    /// Zero-length input where a non-empty sequence is required.
    #[error("empty sequence")]
    EmptySequence,

    /// One or more characters outside the resolved alphabet.
    ///
    /// Carries the full offending-character set (deduplicated, sorted),
    /// not just the first bad symbol.
    #[error("invalid {} symbols: {}", .alphabet, .symbols.iter().collect::<String>())]
    InvalidSymbol {
        /// Name of the alphabet the sequence was checked against.
        alphabet: &'static str,
        /// Every distinct offending character, sorted.
        symbols: Vec<char>,
    },

    /// Paired-sequence operation given unequal-length inputs.
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A caller-supplied parameter is outside its accepted domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience alias used throughout the Aurelia workspace.
pub type Result<T> = std::result::Result<T, AureliaError>;
