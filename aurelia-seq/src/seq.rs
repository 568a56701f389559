//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every
//! byte, collecting the full offending set on failure. The inner data is
//! always uppercase, so `Deref<Target = [u8]>` is zero-cost and safe to pass
//! to downstream `&[u8]` APIs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use aurelia_core::{AureliaError, ContentAddressable, Result, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<IupacDnaAlphabet>` is a DNA sequence,
/// `ValidatedSeq<IupacRnaAlphabet>` is RNA, etc. The inner bytes are always
/// uppercase.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    ///
    /// # Errors
    ///
    /// [`AureliaError::EmptySequence`] for empty input;
    /// [`AureliaError::InvalidSymbol`] listing every distinct offending
    /// character otherwise.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();

        if data.is_empty() {
            return Err(AureliaError::EmptySequence);
        }

        let mut offenders: Vec<char> = data
            .iter()
            .filter(|&&b| !A::is_valid(b))
            .map(|&b| char::from(b))
            .collect();
        if !offenders.is_empty() {
            offenders.sort_unstable();
            offenders.dedup();
            return Err(AureliaError::InvalidSymbol {
                alphabet: A::NAME,
                symbols: offenders,
            });
        }

        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        aurelia_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "{}(\"{}\")", A::NAME, s)
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, IupacDnaAlphabet};

    type StrictDna = ValidatedSeq<DnaAlphabet>;
    type Dna = ValidatedSeq<IupacDnaAlphabet>;

    #[test]
    fn stores_uppercase() {
        let seq = StrictDna::new(b"acgt").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(StrictDna::new(b"").unwrap_err(), AureliaError::EmptySequence);
    }

    #[test]
    fn rejects_invalid_bytes_with_full_set() {
        let err = StrictDna::new(b"ACGXZX").unwrap_err();
        match err {
            AureliaError::InvalidSymbol { symbols, .. } => {
                assert_eq!(symbols, vec!['X', 'Z'])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn iupac_accepts_ambiguity() {
        let seq = Dna::new(b"ACGTN").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGTN");
    }

    #[test]
    fn deref_to_slice() {
        let seq = StrictDna::new(b"ACGT").unwrap();
        let slice: &[u8] = &seq;
        assert_eq!(slice, b"ACGT");
        assert_eq!(seq[0], b'A');
    }

    #[test]
    fn content_hash_ignores_case() {
        let seq1 = StrictDna::new(b"ACGT").unwrap();
        let seq2 = StrictDna::new(b"acgt").unwrap();
        assert_eq!(seq1.content_hash(), seq2.content_hash());
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let seq = StrictDna::new(b"ACGTACGTACGTACGTACGTACGT").unwrap();
        assert!(seq.summary().ends_with("..."));
    }
}
