use rand::rngs::OsRng;
use rand_core::RngCore;

use crate::mnemonic::MnemonicError;

/// Draws `byte_length` bytes from the operating system RNG.
///
/// A failure means the system randomness facility is unavailable; this is
/// fatal for the current operation and there is no fallback source.
pub fn generate_entropy(byte_length: usize) -> Result<Vec<u8>, MnemonicError> {
    let mut bytes = vec![0u8; byte_length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| MnemonicError::EntropyUnavailable)?;
    Ok(bytes)
}
