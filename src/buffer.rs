use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum BufferError {
    ValueOutOfRange(i32),
    InvalidEncoding,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ValueOutOfRange(value) => {
                write!(f, "Array element {} is outside 0-255", value)
            }
            BufferError::InvalidEncoding => write!(f, "Byte buffer is not valid UTF-8"),
        }
    }
}

impl StdError for BufferError {}

/// Widens bytes into the numeric-array form used by hosts that cannot pass
/// raw binary buffers. Carries no cryptographic meaning.
pub fn to_numeric_array(bytes: &[u8]) -> Vec<i32> {
    bytes.iter().map(|&byte| i32::from(byte)).collect()
}

/// Narrows a host numeric array back into bytes.
///
/// Fails on the first element outside 0-255; no clamping or truncation.
pub fn from_numeric_array(values: &[i32]) -> Result<Vec<u8>, BufferError> {
    values
        .iter()
        .map(|&value| u8::try_from(value).map_err(|_| BufferError::ValueOutOfRange(value)))
        .collect()
}

/// Decodes a byte buffer arriving from the host boundary into a string.
pub fn utf8_from_bytes(bytes: Vec<u8>) -> Result<String, BufferError> {
    String::from_utf8(bytes).map_err(|_| BufferError::InvalidEncoding)
}
