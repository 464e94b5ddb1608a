use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

/// Seed length fixed by the derivation scheme.
pub const SEED_LENGTH: usize = 64;

// Key-stretching parameters from the standard.
const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte master seed. Wiped on drop; `Debug` does not reveal the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(64 bytes)")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Stretches a mnemonic phrase and optional passphrase into a 64-byte seed.
///
/// PBKDF2-HMAC-SHA512 over the NFKD-normalized phrase, salted with
/// `"mnemonic"` plus the NFKD-normalized passphrase. Deliberately performs
/// no checksum validation: the standard derives a seed from any string, so
/// callers that care about phrase integrity must validate first.
pub fn derive_seed(phrase: &str, passphrase: &str) -> Seed {
    let mut password: String = phrase.nfkd().collect();
    let mut salt: String = SALT_PREFIX.chars().chain(passphrase.chars()).nfkd().collect();

    let mut seed = [0u8; SEED_LENGTH];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);

    password.zeroize();
    salt.zeroize();

    Seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTOR_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_reference_seed_empty_passphrase() {
        let seed = derive_seed(VECTOR_PHRASE, "");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_reference_seed_with_passphrase() {
        let seed = derive_seed(VECTOR_PHRASE, "TREZOR");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_seed(VECTOR_PHRASE, "passphrase");
        let b = derive_seed(VECTOR_PHRASE, "passphrase");
        assert_eq!(a, b);
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let a = derive_seed(VECTOR_PHRASE, "");
        let b = derive_seed(VECTOR_PHRASE, "TREZOR");
        assert_ne!(a, b);
    }

    #[test]
    fn test_derives_even_for_invalid_phrase() {
        // Checksum-invalid input still derives a stable seed; validation is
        // a separate operation by design.
        let phrase = vec!["abandon"; 12].join(" ");
        let a = derive_seed(&phrase, "");
        let b = derive_seed(&phrase, "");
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), SEED_LENGTH);
        assert_ne!(a, derive_seed(VECTOR_PHRASE, ""));
    }

    #[test]
    fn test_seed_accessors_agree() {
        let seed = derive_seed(VECTOR_PHRASE, "");
        assert_eq!(seed.to_vec(), seed.as_bytes().to_vec());
        assert_eq!(seed.as_ref(), &seed.as_bytes()[..]);
    }

    #[test]
    fn test_debug_is_redacted() {
        let seed = derive_seed(VECTOR_PHRASE, "");
        assert_eq!(format!("{:?}", seed), "Seed(64 bytes)");
    }
}
