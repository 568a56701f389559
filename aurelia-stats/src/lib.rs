//! Composition statistics for the Aurelia sequence-analysis workspace.
//!
//! - **Composition** — [`comprehensive_stats`]: GC content, per-symbol
//!   counts, molecular weight, di-/trinucleotide frequencies, Shannon
//!   entropy (bits)
//! - **Mergeable counts** — [`NucleotideCounts`] for chunk-parallel
//!   accumulation (`parallel` feature adds
//!   [`comprehensive_stats_parallel`])
//! - **Melting temperature** — [`melting_temp`], piecewise at 14 bases
//! - **GC profiles** — [`gc_content_windows`]
//! - **Memoization** — [`StatsEngine`], a bounded content-addressed cache
//!
//! # Example
//!
//! ```
//! use aurelia_stats::{comprehensive_stats, melting_temp};
//!
//! let stats = comprehensive_stats(b"AGCTATCGGCTAGCG").unwrap();
//! assert_eq!(stats.length, 15);
//! assert!(stats.gc_content > 50.0);
//!
//! assert_eq!(melting_temp(b"ATGC").unwrap(), 12.0);
//! ```

pub mod composition;
pub mod melting;
pub mod memo;
pub mod windows;

pub use composition::{
    comprehensive_stats, gc_content, kmer_frequencies, NucleotideCounts, SequenceStats,
};
#[cfg(feature = "parallel")]
pub use composition::comprehensive_stats_parallel;
pub use melting::melting_temp;
pub use memo::StatsEngine;
pub use windows::gc_content_windows;
