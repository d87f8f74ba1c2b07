/// Errors reported by the validation gate in front of encode/decode.
///
/// Once validation passes the transform always completes, so these are the
/// only failures a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The buffer reference was absent.
    #[error("buffer pointer is null")]
    NullPointer,

    /// The key was zero or negative.
    #[error("invalid key {0} (must be > 0)")]
    InvalidKey(i32),

    /// The payload is longer than the configured maximum.
    #[error("payload too long ({len} bytes, max {max})")]
    InvalidLength { len: usize, max: usize },
}

impl CipherError {
    /// Stable numeric status code shared with the C ABI (`0` is success).
    pub fn status_code(&self) -> i32 {
        match self {
            CipherError::NullPointer => -1,
            CipherError::InvalidKey(_) => -2,
            CipherError::InvalidLength { .. } => -3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
