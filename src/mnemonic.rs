use std::error::Error as StdError;
use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::entropy::generate_entropy;
use crate::seed::{derive_seed, Seed};
use crate::wordlist;

// Each word encodes 11 bits of the combined entropy+checksum stream.
const WORD_BITS: usize = 11;

/// Entropy strength of a mnemonic, expressed as the resulting word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl MnemonicStrength {
    pub fn entropy_bits(&self) -> usize {
        match self {
            MnemonicStrength::Words12 => 128,
            MnemonicStrength::Words15 => 160,
            MnemonicStrength::Words18 => 192,
            MnemonicStrength::Words21 => 224,
            MnemonicStrength::Words24 => 256,
        }
    }

    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() / 8
    }

    /// Checksum length in bits: one bit per 32 bits of entropy.
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn word_count(&self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / WORD_BITS
    }

    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(MnemonicStrength::Words12),
            160 => Some(MnemonicStrength::Words15),
            192 => Some(MnemonicStrength::Words18),
            224 => Some(MnemonicStrength::Words21),
            256 => Some(MnemonicStrength::Words24),
            _ => None,
        }
    }

    pub fn from_word_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(MnemonicStrength::Words12),
            15 => Some(MnemonicStrength::Words15),
            18 => Some(MnemonicStrength::Words18),
            21 => Some(MnemonicStrength::Words21),
            24 => Some(MnemonicStrength::Words24),
            _ => None,
        }
    }
}

impl Default for MnemonicStrength {
    // 12 words (128 bits), the host module's historical default.
    fn default() -> Self {
        MnemonicStrength::Words12
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MnemonicError {
    InvalidEntropyLength(usize),
    EntropyUnavailable,
    InvalidWordCount(usize),
    UnknownWord(String),
    ChecksumMismatch,
}

impl fmt::Display for MnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MnemonicError::InvalidEntropyLength(bits) => write!(
                f,
                "Entropy length must be 128, 160, 192, 224 or 256 bits, not {}",
                bits
            ),
            MnemonicError::EntropyUnavailable => {
                write!(f, "System randomness facility is unavailable")
            }
            MnemonicError::InvalidWordCount(count) => write!(
                f,
                "Mnemonic must contain 12, 15, 18, 21 or 24 words, not {}",
                count
            ),
            MnemonicError::UnknownWord(word) => {
                write!(f, "Word '{}' is not in the word list", word)
            }
            MnemonicError::ChecksumMismatch => write!(f, "Mnemonic checksum does not match"),
        }
    }
}

impl StdError for MnemonicError {}

/// A validated mnemonic: an ordered sequence of word-list indices whose
/// trailing checksum bits match the SHA-256 digest of the leading entropy.
///
/// Only constructed through [`Mnemonic::generate`], [`Mnemonic::from_entropy`]
/// or [`Mnemonic::from_phrase`], so the checksum invariant always holds.
/// Word indices are wiped when the value is dropped.
#[derive(Clone)]
pub struct Mnemonic {
    strength: MnemonicStrength,
    indices: Vec<u16>,
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words)", self.indices.len())
    }
}

impl Mnemonic {
    /// Generates a fresh mnemonic from OS entropy of the given strength.
    pub fn generate(strength: MnemonicStrength) -> Result<Self, MnemonicError> {
        let mut entropy = generate_entropy(strength.entropy_bytes())?;
        let mnemonic = Self::from_entropy(&entropy);
        entropy.zeroize();
        mnemonic
    }

    /// Encodes the given entropy bytes as a mnemonic.
    ///
    /// Deterministic: fixed entropy always produces the same word sequence.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, MnemonicError> {
        let strength = MnemonicStrength::from_entropy_bits(entropy.len() * 8)
            .ok_or(MnemonicError::InvalidEntropyLength(entropy.len() * 8))?;

        // Entropy bits followed by the checksum bits, MSB-first. The checksum
        // is at most 8 bits, so a single appended byte always holds it.
        let mut data = Vec::with_capacity(entropy.len() + 1);
        data.extend_from_slice(entropy);
        data.push(checksum_byte(entropy, strength.checksum_bits()));

        let indices = (0..strength.word_count())
            .map(|word| index_at_bit(&data, word * WORD_BITS))
            .collect();
        data.zeroize();

        Ok(Mnemonic { strength, indices })
    }

    /// Parses and validates a whitespace-separated phrase.
    ///
    /// Word lookup is exact and case-sensitive; a word outside the list is
    /// rejected rather than corrected.
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let strength = MnemonicStrength::from_word_count(words.len())
            .ok_or(MnemonicError::InvalidWordCount(words.len()))?;

        let mut indices = Vec::with_capacity(words.len());
        for word in words {
            match wordlist::index_of(word) {
                Some(index) => indices.push(index),
                None => {
                    indices.zeroize();
                    return Err(MnemonicError::UnknownWord(word.to_string()));
                }
            }
        }

        let mut data = pack_indices(&indices);
        let entropy_bytes = strength.entropy_bytes();
        let expected = checksum_byte(&data[..entropy_bytes], strength.checksum_bits());
        let actual = data[entropy_bytes];
        data.zeroize();

        if expected != actual {
            indices.zeroize();
            return Err(MnemonicError::ChecksumMismatch);
        }

        Ok(Mnemonic { strength, indices })
    }

    pub fn strength(&self) -> MnemonicStrength {
        self.strength
    }

    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// The words of this mnemonic, in order.
    pub fn words(&self) -> Vec<&'static str> {
        self.indices
            .iter()
            .filter_map(|&index| wordlist::word_at(index))
            .collect()
    }

    /// Renders the phrase with single spaces, preserving word order.
    pub fn phrase(&self) -> String {
        let mut phrase = String::new();
        for (i, &index) in self.indices.iter().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            if let Some(word) = wordlist::word_at(index) {
                phrase.push_str(word);
            }
        }
        phrase
    }

    /// Recovers the entropy bytes this mnemonic encodes.
    pub fn to_entropy(&self) -> Vec<u8> {
        let mut data = pack_indices(&self.indices);
        data.truncate(self.strength.entropy_bytes());
        data
    }

    /// Stretches this mnemonic into a 64-byte seed.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let mut phrase = self.phrase();
        let seed = derive_seed(&phrase, passphrase);
        phrase.zeroize();
        seed
    }
}

impl Drop for Mnemonic {
    fn drop(&mut self) {
        self.indices.zeroize();
    }
}

// Leading `bits` bits of SHA-256 over the entropy, left-aligned in one byte.
fn checksum_byte(entropy: &[u8], bits: usize) -> u8 {
    let digest = Sha256::digest(entropy);
    digest[0] & (0xffu8 << (8 - bits))
}

// Reads the 11 bits starting at `bit_offset` as an MSB-first integer.
fn index_at_bit(data: &[u8], bit_offset: usize) -> u16 {
    let mut index = 0u16;
    for bit in bit_offset..bit_offset + WORD_BITS {
        index <<= 1;
        if data[bit / 8] & (1 << (7 - bit % 8)) != 0 {
            index |= 1;
        }
    }
    index
}

// Packs 11-bit indices back into a contiguous MSB-first byte stream. Unused
// trailing bits of the last byte stay zero, so the checksum comparison is a
// plain byte equality.
fn pack_indices(indices: &[u16]) -> Vec<u8> {
    let total_bits = indices.len() * WORD_BITS;
    let mut data = vec![0u8; (total_bits + 7) / 8];
    for (word, &index) in indices.iter().enumerate() {
        for i in 0..WORD_BITS {
            if index & (1 << (WORD_BITS - 1 - i)) != 0 {
                let bit = word * WORD_BITS + i;
                data[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_entropy_vector() {
        let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_reference_vectors() {
        // (entropy hex, expected phrase) pairs from the standard test suite.
        let vectors = [
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            ),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "legal winner thank year wave sausage worth useful legal winner thank year wave sausage wise",
            ),
            (
                "000000000000000000000000000000000000000000000000",
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
            ),
            (
                "8080808080808080808080808080808080808080808080808080808080808080",
                "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
            ),
            (
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
            ),
            (
                "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
                "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
            ),
            (
                "9f6a2878b2520799a44ef18bc7df394e7061a224d2c33cd015b157d746869863",
                "panda eyebrow bullet gorilla call smoke muffin taste mesh discover soft ostrich alcohol speed nation flash devote level hobby quick inner drive ghost inside",
            ),
        ];

        for (entropy_hex, expected) in vectors {
            let entropy = hex::decode(entropy_hex).unwrap();
            let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
            assert_eq!(mnemonic.phrase(), expected, "entropy {}", entropy_hex);

            let parsed = Mnemonic::from_phrase(expected).unwrap();
            assert_eq!(parsed.to_entropy(), entropy, "entropy {}", entropy_hex);
        }
    }

    #[test]
    fn test_invalid_entropy_lengths_rejected() {
        for len in [0, 4, 15, 17, 19, 31, 33, 64] {
            let entropy = vec![0u8; len];
            let result = Mnemonic::from_entropy(&entropy);
            assert!(matches!(
                result,
                Err(MnemonicError::InvalidEntropyLength(bits)) if bits == len * 8
            ));
        }
    }

    #[test]
    fn test_generate_all_strengths() {
        let cases = [
            (MnemonicStrength::Words12, 12),
            (MnemonicStrength::Words15, 15),
            (MnemonicStrength::Words18, 18),
            (MnemonicStrength::Words21, 21),
            (MnemonicStrength::Words24, 24),
        ];
        for (strength, expected_words) in cases {
            let mnemonic = Mnemonic::generate(strength).unwrap();
            assert_eq!(mnemonic.word_count(), expected_words);
            assert_eq!(mnemonic.strength(), strength);
            assert!(Mnemonic::from_phrase(&mnemonic.phrase()).is_ok());
        }
    }

    #[test]
    fn test_generate_is_random() {
        let a = Mnemonic::generate(MnemonicStrength::Words24).unwrap();
        let b = Mnemonic::generate(MnemonicStrength::Words24).unwrap();
        assert_ne!(a.phrase(), b.phrase());
    }

    #[test]
    fn test_word_count_rejected() {
        for count in [0, 1, 5, 11, 13, 16, 23, 25] {
            let phrase = vec!["abandon"; count].join(" ");
            assert_eq!(
                Mnemonic::from_phrase(&phrase).unwrap_err(),
                MnemonicError::InvalidWordCount(count)
            );
        }
    }

    #[test]
    fn test_unknown_word_rejected() {
        let phrase =
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon notaword";
        assert_eq!(
            Mnemonic::from_phrase(phrase).unwrap_err(),
            MnemonicError::UnknownWord("notaword".to_string())
        );
    }

    #[test]
    fn test_uppercase_word_rejected() {
        // Lookup is case-sensitive; the caller's input is not normalized.
        let phrase =
            "Abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert_eq!(
            Mnemonic::from_phrase(phrase).unwrap_err(),
            MnemonicError::UnknownWord("Abandon".to_string())
        );
    }

    #[test]
    fn test_checksum_mismatch_rejected() {
        // 12 repetitions of "abandon" decode cleanly but fail the checksum.
        let phrase = vec!["abandon"; 12].join(" ");
        assert_eq!(
            Mnemonic::from_phrase(&phrase).unwrap_err(),
            MnemonicError::ChecksumMismatch
        );
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        let phrase =
            "  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about ";
        let mnemonic = Mnemonic::from_phrase(phrase).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
    }

    #[test]
    fn test_entropy_roundtrip() {
        let entropy: Vec<u8> = (0u8..32).collect();
        for len in [16, 20, 24, 28, 32] {
            let mnemonic = Mnemonic::from_entropy(&entropy[..len]).unwrap();
            assert_eq!(mnemonic.to_entropy(), &entropy[..len]);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let entropy = [0xabu8; 20];
        let a = Mnemonic::from_entropy(&entropy).unwrap();
        let b = Mnemonic::from_entropy(&entropy).unwrap();
        assert_eq!(a.phrase(), b.phrase());
    }

    #[test]
    fn test_words_match_phrase() {
        let mnemonic = Mnemonic::from_entropy(&[0x55u8; 16]).unwrap();
        assert_eq!(mnemonic.words().join(" "), mnemonic.phrase());
    }

    #[test]
    fn test_default_strength_is_12_words() {
        assert_eq!(MnemonicStrength::default().word_count(), 12);
    }
}
