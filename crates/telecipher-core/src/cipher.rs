use tracing::trace;

use crate::error::{CipherError, Result};
use crate::rotation::{rotate_forward, rotate_inverse};
use crate::table::{substitute_forward, substitute_inverse};
use crate::validate::{validate, MAX_INPUT_LEN};

/// Configuration for the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    /// Maximum logical payload length. Default and upper bound: 10 000 bytes.
    pub max_input_len: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            max_input_len: MAX_INPUT_LEN,
        }
    }
}

/// Encode `buf` in place with `key`.
///
/// Stage 1 rotates both halves forward `key` times, stage 2 substitutes every
/// alphabet byte. Only the bytes before the first NUL are transformed and the
/// length never changes.
///
/// ```
/// let mut buf = *b"ABCDEF";
/// telecipher_core::encode(&mut buf, 3).unwrap();
/// assert_eq!(&buf, b"42,0=1");
/// ```
pub fn encode(buf: &mut [u8], key: i32) -> Result<()> {
    encode_with_config(Some(buf), key, &CipherConfig::default())
}

/// Decode `buf` in place with `key`. Exact mirror of [`encode`].
///
/// A different key than the one used to encode yields garbled output, not an error.
pub fn decode(buf: &mut [u8], key: i32) -> Result<()> {
    decode_with_config(Some(buf), key, &CipherConfig::default())
}

/// [`encode`] for a buffer that may be absent. `None` fails with `NullPointer`.
pub fn encode_opt(buf: Option<&mut [u8]>, key: i32) -> Result<()> {
    encode_with_config(buf, key, &CipherConfig::default())
}

/// [`decode`] for a buffer that may be absent. `None` fails with `NullPointer`.
pub fn decode_opt(buf: Option<&mut [u8]>, key: i32) -> Result<()> {
    decode_with_config(buf, key, &CipherConfig::default())
}

fn encode_with_config(buf: Option<&mut [u8]>, key: i32, config: &CipherConfig) -> Result<()> {
    let (payload, iterations) = gate(buf, key, config)?;
    trace!(len = payload.len(), key, "encoding payload");
    rotate_forward(payload, iterations);
    substitute_forward(payload);
    Ok(())
}

fn decode_with_config(buf: Option<&mut [u8]>, key: i32, config: &CipherConfig) -> Result<()> {
    let (payload, iterations) = gate(buf, key, config)?;
    trace!(len = payload.len(), key, "decoding payload");
    rotate_inverse(payload, iterations);
    substitute_inverse(payload);
    Ok(())
}

/// Validate and narrow the buffer to its logical payload.
fn gate<'a>(
    buf: Option<&'a mut [u8]>,
    key: i32,
    config: &CipherConfig,
) -> Result<(&'a mut [u8], u32)> {
    let len = validate(buf.as_deref(), key, config.max_input_len)?;
    let buf = buf.ok_or(CipherError::NullPointer)?;
    // validate() rejected key <= 0
    Ok((&mut buf[..len], key.unsigned_abs()))
}

/// A fixed key bound to a configuration.
///
/// The key is checked once at construction, so a pipeline holding a `Cipher`
/// can only fail on buffer length afterwards.
///
/// ```
/// use telecipher_core::Cipher;
///
/// let cipher = Cipher::new(5).unwrap();
/// let mut buf = *b"0123456789ABCDEF";
/// cipher.encode(&mut buf).unwrap();
/// cipher.decode(&mut buf).unwrap();
/// assert_eq!(&buf, b"0123456789ABCDEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    key: i32,
    config: CipherConfig,
}

impl Cipher {
    /// Create a cipher with default configuration.
    pub fn new(key: i32) -> Result<Self> {
        Self::with_config(key, CipherConfig::default())
    }

    /// Create a cipher with explicit configuration.
    ///
    /// `config.max_input_len` may lower the limit but never raise it past
    /// [`MAX_INPUT_LEN`].
    pub fn with_config(key: i32, config: CipherConfig) -> Result<Self> {
        if key <= 0 {
            return Err(CipherError::InvalidKey(key));
        }
        if config.max_input_len > MAX_INPUT_LEN {
            return Err(CipherError::InvalidLength {
                len: config.max_input_len,
                max: MAX_INPUT_LEN,
            });
        }
        Ok(Self { key, config })
    }

    /// The rotation key.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Current configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encode `buf` in place.
    pub fn encode(&self, buf: &mut [u8]) -> Result<()> {
        encode_with_config(Some(buf), self.key, &self.config)
    }

    /// Decode `buf` in place.
    pub fn decode(&self, buf: &mut [u8]) -> Result<()> {
        decode_with_config(Some(buf), self.key, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &[u8] = b"0123456789ABCDEF:,=;";

    fn roundtrip(plain: &[u8], key: i32) {
        let mut buf = plain.to_vec();
        encode(&mut buf, key).unwrap();
        assert_eq!(buf.len(), plain.len());
        decode(&mut buf, key).unwrap();
        assert_eq!(buf, plain, "key={key}");
    }

    #[test]
    fn test_roundtrip_basic() {
        roundtrip(b"ABCDEF", 3);
    }

    #[test]
    fn test_roundtrip_key1() {
        roundtrip(b"1234ABCD", 1);
    }

    #[test]
    fn test_roundtrip_long() {
        roundtrip(b"0123456789ABCDEF", 5);
    }

    #[test]
    fn test_known_ciphertexts() {
        let mut buf = *b"ABCDEF";
        encode(&mut buf, 3).unwrap();
        assert_eq!(&buf, b"42,0=1");

        let mut buf = *b"1234ABCD";
        encode(&mut buf, 1).unwrap();
        assert_eq!(&buf, b"CD;:4,02");
    }

    #[test]
    fn test_encode_changes_input() {
        let mut buf = *b"ABCDEF";
        encode(&mut buf, 2).unwrap();
        assert_ne!(&buf, b"ABCDEF");
    }

    #[test]
    fn test_roundtrip_alphabet_windows() {
        // every contiguous window of the doubled alphabet, many keys
        let doubled: Vec<u8> = ALPHABET.iter().chain(ALPHABET.iter()).copied().collect();
        for start in 0..ALPHABET.len() {
            for len in 0..=ALPHABET.len() {
                for key in [1, 2, 3, 4, 9, 10, 19, 20, 21, 1000, i32::MAX] {
                    roundtrip(&doubled[start..start + len], key);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_max_length() {
        let plain: Vec<u8> = ALPHABET.iter().copied().cycle().take(MAX_INPUT_LEN).collect();
        roundtrip(&plain, 4_999);
    }

    #[test]
    fn test_bytes_outside_alphabet_still_rotate() {
        let mut buf = *b"abcdef";
        encode(&mut buf, 1).unwrap();
        assert_eq!(&buf, b"bacefd");
        decode(&mut buf, 1).unwrap();
        assert_eq!(&buf, b"abcdef");
    }

    #[test]
    fn test_sentinel_bounds_transform() {
        let mut buf = *b"ABCDEF\0ABC";
        encode(&mut buf, 3).unwrap();
        assert_eq!(&buf, b"42,0=1\0ABC");
        decode(&mut buf, 3).unwrap();
        assert_eq!(&buf, b"ABCDEF\0ABC");
    }

    #[test]
    fn test_wrong_key_garbles_silently() {
        let mut buf = *b"0123456789ABCDEF";
        encode(&mut buf, 2).unwrap();
        decode(&mut buf, 3).unwrap();
        assert_ne!(&buf, b"0123456789ABCDEF");
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(encode_opt(None, 1), Err(CipherError::NullPointer));
        assert_eq!(decode_opt(None, 1), Err(CipherError::NullPointer));

        let mut buf = *b"ABCD";
        assert_eq!(encode(&mut buf, 0), Err(CipherError::InvalidKey(0)));
        assert_eq!(encode(&mut buf, -3), Err(CipherError::InvalidKey(-3)));
        assert_eq!(decode(&mut buf, 0), Err(CipherError::InvalidKey(0)));
        assert_eq!(&buf, b"ABCD");

        let mut big = vec![b'A'; MAX_INPUT_LEN + 1];
        assert!(matches!(
            encode(&mut big, 1),
            Err(CipherError::InvalidLength { .. })
        ));
        assert!(big.iter().all(|&b| b == b'A'));
    }

    #[test]
    fn test_opt_variants_transform() {
        let mut buf = *b"ABCDEF";
        encode_opt(Some(&mut buf[..]), 3).unwrap();
        assert_eq!(&buf, b"42,0=1");
        decode_opt(Some(&mut buf[..]), 3).unwrap();
        assert_eq!(&buf, b"ABCDEF");
    }

    #[test]
    fn test_cipher_rejects_bad_key() {
        assert_eq!(Cipher::new(0), Err(CipherError::InvalidKey(0)));
        assert_eq!(Cipher::new(-1), Err(CipherError::InvalidKey(-1)));
    }

    #[test]
    fn test_cipher_custom_limit() {
        let cipher = Cipher::with_config(2, CipherConfig { max_input_len: 4 }).unwrap();
        assert_eq!(cipher.key(), 2);
        assert_eq!(cipher.config().max_input_len, 4);

        let mut ok = *b"ABCD";
        cipher.encode(&mut ok).unwrap();
        cipher.decode(&mut ok).unwrap();
        assert_eq!(&ok, b"ABCD");

        let mut too_long = *b"ABCDE";
        assert_eq!(
            cipher.encode(&mut too_long),
            Err(CipherError::InvalidLength { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_cipher_limit_cannot_exceed_maximum() {
        let raised = CipherConfig {
            max_input_len: 50_000,
        };
        assert_eq!(
            Cipher::with_config(1, raised),
            Err(CipherError::InvalidLength {
                len: 50_000,
                max: MAX_INPUT_LEN
            })
        );

        let at_max = Cipher::with_config(1, CipherConfig::default()).unwrap();
        let mut over = vec![b'A'; MAX_INPUT_LEN + 1];
        assert!(matches!(
            at_max.encode(&mut over),
            Err(CipherError::InvalidLength { .. })
        ));
        assert!(over.iter().all(|&b| b == b'A'));
    }

    #[test]
    fn test_large_key_matches_reduced_key() {
        // 21 bytes: both halves have length 10
        let plain = b"0123456789ABCDEF:,=;0";
        for (large, reduced) in [(i32::MAX, 7), (70_000, 10), (65_543, 3)] {
            let mut a = *plain;
            let mut b = *plain;
            encode(&mut a, large).unwrap();
            encode(&mut b, reduced).unwrap();
            assert_eq!(a, b, "key={large}");
            decode(&mut a, large).unwrap();
            assert_eq!(&a, plain);
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CipherError::NullPointer.status_code(), -1);
        assert_eq!(CipherError::InvalidKey(0).status_code(), -2);
        assert_eq!(
            CipherError::InvalidLength { len: 1, max: 0 }.status_code(),
            -3
        );
    }
}
