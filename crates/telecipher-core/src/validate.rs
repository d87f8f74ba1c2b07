use tracing::debug;

use crate::error::{CipherError, Result};

/// Maximum payload length accepted by encode/decode.
pub const MAX_INPUT_LEN: usize = 10_000;

/// Logical length of a buffer: bytes before the first NUL, or the whole slice.
pub fn payload_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// Gate run before both directions of the transform.
///
/// Checks, in order: buffer present, `key > 0`, logical length within
/// `max_len`. Returns the logical length on success. Has no side effects.
pub fn validate(buf: Option<&[u8]>, key: i32, max_len: usize) -> Result<usize> {
    let Some(buf) = buf else {
        debug!("rejecting absent buffer");
        return Err(CipherError::NullPointer);
    };
    if key <= 0 {
        debug!(key, "rejecting non-positive key");
        return Err(CipherError::InvalidKey(key));
    }
    let len = payload_len(buf);
    if len > max_len {
        debug!(len, max = max_len, "rejecting oversized payload");
        return Err(CipherError::InvalidLength { len, max: max_len });
    }
    Ok(len)
}
