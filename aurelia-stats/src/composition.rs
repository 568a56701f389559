//! Composition statistics: base counts, GC content, molecular weight,
//! k-mer frequencies, and Shannon entropy.
//!
//! [`NucleotideCounts`] is the mergeable unit: per-chunk counts add
//! pointwise, and every derived metric (GC content, molecular weight,
//! entropy, frequencies) is recomputed from merged raw counts — never
//! averaged across chunks.

use std::collections::BTreeMap;

use aurelia_core::{AureliaError, Result, Summarizable};
use aurelia_seq::validate::{validate, SequenceKind};

/// Monomer weight in Daltons (dAMP).
const WEIGHT_A: f64 = 331.2218;
/// Monomer weight in Daltons (dTMP).
const WEIGHT_T: f64 = 322.2085;
/// Monomer weight in Daltons (dGMP).
const WEIGHT_G: f64 = 347.2212;
/// Monomer weight in Daltons (dCMP).
const WEIGHT_C: f64 = 307.1971;
/// Water mass lost per phosphodiester bond.
const BACKBONE_WATER_LOSS: f64 = 61.96;

fn base_weight(b: u8) -> f64 {
    match b {
        b'A' => WEIGHT_A,
        b'T' => WEIGHT_T,
        b'G' => WEIGHT_G,
        b'C' => WEIGHT_C,
        // Ambiguity codes carry no weight
        _ => 0.0,
    }
}

/// Per-symbol counts over a sequence.
///
/// The unit of chunk-parallel statistics: counts from disjoint chunks merge
/// by pointwise addition, and merge order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NucleotideCounts {
    counts: BTreeMap<char, u64>,
    total: u64,
}

impl NucleotideCounts {
    /// Count symbols in a slice. Input is uppercased first.
    pub fn from_slice(seq: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &b in seq {
            *counts.entry(char::from(b.to_ascii_uppercase())).or_insert(0) += 1;
        }
        Self {
            total: seq.len() as u64,
            counts,
        }
    }

    /// Merge another count table into this one (pointwise addition).
    pub fn merge(&mut self, other: &NucleotideCounts) {
        for (&symbol, &n) in &other.counts {
            *self.counts.entry(symbol).or_insert(0) += n;
        }
        self.total += other.total;
    }

    /// Count for one symbol.
    pub fn count(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Total symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count of unambiguous G plus C.
    pub fn gc(&self) -> u64 {
        self.count('G') + self.count('C')
    }

    /// Count of unambiguous A plus T.
    pub fn at(&self) -> u64 {
        self.count('A') + self.count('T')
    }

    /// GC content as a percentage in [0, 100]. Zero for empty counts.
    pub fn gc_content(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.gc() as f64 / self.total as f64 * 100.0
    }

    /// Estimated molecular weight in Daltons.
    ///
    /// Sum of monomer weights minus one water mass per phosphodiester bond
    /// (applied only when more than one base is present). Ambiguity codes
    /// contribute no weight.
    pub fn molecular_weight(&self) -> f64 {
        let mut weight: f64 = self
            .counts
            .iter()
            .map(|(&symbol, &n)| base_weight(symbol as u8) * n as f64)
            .sum();
        if self.total > 1 {
            weight -= (self.total - 1) as f64 * BACKBONE_WATER_LOSS;
        }
        weight
    }

    /// Shannon entropy in bits over the empirical symbol distribution.
    ///
    /// `−Σ p·log2(p)` for each symbol with `p > 0`; 0.0 for empty counts.
    /// Doubles as the sequence-complexity metric.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        let mut entropy = 0.0;
        for &n in self.counts.values() {
            if n > 0 {
                let p = n as f64 / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }

    /// Iterate over `(symbol, count)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&s, &n)| (s, n))
    }

    /// Clone the underlying symbol→count map.
    pub fn to_map(&self) -> BTreeMap<char, u64> {
        self.counts.clone()
    }
}

/// Aggregate composition statistics for one sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceStats {
    /// Sequence length in bases.
    pub length: usize,
    /// GC percentage in [0, 100].
    pub gc_content: f64,
    /// Per-symbol counts.
    pub nucleotide_counts: BTreeMap<char, u64>,
    /// Estimated molecular weight in Daltons.
    pub molecular_weight: f64,
    /// Relative dinucleotide frequencies (sum to 1 when non-empty).
    pub dinucleotide_frequencies: BTreeMap<String, f64>,
    /// Relative trinucleotide frequencies (sum to 1 when non-empty).
    pub trinucleotide_frequencies: BTreeMap<String, f64>,
    /// Shannon entropy in bits; the complexity metric.
    pub entropy: f64,
}

impl Summarizable for SequenceStats {
    fn summary(&self) -> String {
        format!(
            "{} bp, GC {:.2}%, {:.2} Da, entropy {:.3} bits",
            self.length, self.gc_content, self.molecular_weight, self.entropy,
        )
    }
}

/// GC content of a sequence as a percentage in [0, 100].
///
/// Empty input is defined as 0.0 (never a division by zero); non-empty
/// input is validated as IUPAC DNA first.
pub fn gc_content(seq: &[u8]) -> Result<f64> {
    if seq.is_empty() {
        return Ok(0.0);
    }
    validate(seq, SequenceKind::Dna, true)?;
    Ok(NucleotideCounts::from_slice(seq).gc_content())
}

/// Count k-mer windows with start positions in `range`.
fn kmer_counts_in_range(
    seq: &[u8],
    k: usize,
    range: std::ops::Range<usize>,
) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    let last_start = seq.len().saturating_sub(k - 1);
    for start in range.start..range.end.min(last_start) {
        let window = std::str::from_utf8(&seq[start..start + k])
            .expect("validated ASCII")
            .to_string();
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

fn frequencies_from_counts(counts: BTreeMap<String, u64>) -> BTreeMap<String, f64> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .into_iter()
        .map(|(kmer, n)| (kmer, n as f64 / total as f64))
        .collect()
}

/// Relative k-mer frequencies over all windows of size `k`.
///
/// Validates as IUPAC DNA. Returns an empty map when the sequence is
/// shorter than `k`.
///
/// # Errors
///
/// [`AureliaError::InvalidParameter`] if `k` is zero.
pub fn kmer_frequencies(seq: &[u8], k: usize) -> Result<BTreeMap<String, f64>> {
    validate(seq, SequenceKind::Dna, true)?;
    if k == 0 {
        return Err(AureliaError::InvalidParameter(
            "k-mer size must be at least 1".into(),
        ));
    }
    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    if seq.len() < k {
        return Ok(BTreeMap::new());
    }
    Ok(frequencies_from_counts(kmer_counts_in_range(
        &seq,
        k,
        0..seq.len(),
    )))
}

fn stats_from_parts(
    length: usize,
    counts: NucleotideCounts,
    dinuc: BTreeMap<String, u64>,
    trinuc: BTreeMap<String, u64>,
) -> SequenceStats {
    SequenceStats {
        length,
        gc_content: counts.gc_content(),
        molecular_weight: counts.molecular_weight(),
        entropy: counts.entropy(),
        nucleotide_counts: counts.to_map(),
        dinucleotide_frequencies: frequencies_from_counts(dinuc),
        trinucleotide_frequencies: frequencies_from_counts(trinuc),
    }
}

/// Compute the full composition statistics for a sequence.
///
/// Validates as IUPAC DNA (empty input is rejected). Single pass for the
/// symbol counts plus one window scan per k-mer size.
pub fn comprehensive_stats(seq: &[u8]) -> Result<SequenceStats> {
    validate(seq, SequenceKind::Dna, true)?;
    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();

    let counts = NucleotideCounts::from_slice(&seq);
    let dinuc = kmer_counts_in_range(&seq, 2, 0..seq.len());
    let trinuc = kmer_counts_in_range(&seq, 3, 0..seq.len());
    Ok(stats_from_parts(seq.len(), counts, dinuc, trinuc))
}

/// Chunk-parallel variant of [`comprehensive_stats`].
///
/// The sequence is split into window-start ranges of `chunk_size`; per-chunk
/// counts are merged by summation and every derived metric is recomputed
/// from the merged counts, so the output is identical to the sequential
/// path.
///
/// # Errors
///
/// [`AureliaError::InvalidParameter`] if `chunk_size` is zero; validation
/// errors as in [`comprehensive_stats`].
#[cfg(feature = "parallel")]
pub fn comprehensive_stats_parallel(seq: &[u8], chunk_size: usize) -> Result<SequenceStats> {
    use rayon::prelude::*;

    if chunk_size == 0 {
        return Err(AureliaError::InvalidParameter(
            "chunk size must be at least 1".into(),
        ));
    }
    validate(seq, SequenceKind::Dna, true)?;
    let seq: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
    let len = seq.len();

    let ranges: Vec<std::ops::Range<usize>> = (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect();

    let (counts, dinuc, trinuc) = ranges
        .par_iter()
        .map(|range| {
            (
                NucleotideCounts::from_slice(&seq[range.clone()]),
                kmer_counts_in_range(&seq, 2, range.clone()),
                kmer_counts_in_range(&seq, 3, range.clone()),
            )
        })
        .reduce(
            || (NucleotideCounts::default(), BTreeMap::new(), BTreeMap::new()),
            |(mut counts_a, mut dinuc_a, mut trinuc_a), (counts_b, dinuc_b, trinuc_b)| {
                counts_a.merge(&counts_b);
                for (kmer, n) in dinuc_b {
                    *dinuc_a.entry(kmer).or_insert(0) += n;
                }
                for (kmer, n) in trinuc_b {
                    *trinuc_a.entry(kmer).or_insert(0) += n;
                }
                (counts_a, dinuc_a, trinuc_a)
            },
        );

    Ok(stats_from_parts(len, counts, dinuc, trinuc))
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
        fn gc_content_in_unit_range(seq in dna_seq(200)) {
            let gc = gc_content(&seq).unwrap();
            prop_assert!((0.0..=100.0).contains(&gc));
        }

        #[test]
        fn entropy_bounded_by_two_bits(seq in dna_seq(200)) {
            let stats = comprehensive_stats(&seq).unwrap();
            prop_assert!(stats.entropy >= 0.0);
            // Four-symbol alphabet caps entropy at 2 bits.
            prop_assert!(stats.entropy <= 2.0 + 1e-10);
        }

        #[test]
        fn split_counts_merge_to_whole(seq in dna_seq(200), split in 0usize..200) {
            let split = split.min(seq.len());
            let mut left = NucleotideCounts::from_slice(&seq[..split]);
            let right = NucleotideCounts::from_slice(&seq[split..]);
            left.merge(&right);
            prop_assert_eq!(left, NucleotideCounts::from_slice(&seq));
        }
    }
}
