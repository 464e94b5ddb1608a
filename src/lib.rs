pub mod buffer;
pub mod entropy;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;
mod words;

pub use buffer::{from_numeric_array, to_numeric_array, utf8_from_bytes, BufferError};
pub use entropy::generate_entropy;
pub use mnemonic::{Mnemonic, MnemonicError, MnemonicStrength};
pub use seed::{derive_seed, Seed, SEED_LENGTH};

/// Generates a new random mnemonic phrase from `entropy_bits` of OS entropy.
pub fn generate_mnemonic(entropy_bits: usize) -> Result<String, MnemonicError> {
    let strength = MnemonicStrength::from_entropy_bits(entropy_bits)
        .ok_or(MnemonicError::InvalidEntropyLength(entropy_bits))?;
    Ok(Mnemonic::generate(strength)?.phrase())
}

/// Encodes caller-supplied entropy bytes as a mnemonic phrase.
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<String, MnemonicError> {
    Ok(Mnemonic::from_entropy(entropy)?.phrase())
}

/// Derives the 64-byte seed for a phrase and passphrase.
///
/// Does not validate the phrase; pair with [`validate_mnemonic`] when the
/// input comes from a user.
pub fn seed_from_mnemonic(phrase: &str, passphrase: &str) -> Seed {
    derive_seed(phrase, passphrase)
}

/// Validates a phrase and recovers the entropy bytes it encodes.
pub fn entropy_from_mnemonic(phrase: &str) -> Result<Vec<u8>, MnemonicError> {
    Ok(Mnemonic::from_phrase(phrase)?.to_entropy())
}

/// Checks whether a phrase is well-formed: legal word count, every word in
/// the list, checksum intact. Total; never panics or errors.
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::from_phrase(phrase).is_ok()
}
