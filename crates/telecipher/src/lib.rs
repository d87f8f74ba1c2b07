//! Reversible fixed-key scrambling for short telemetry payloads.
//!
//! telecipher scrambles uppercase-hex telemetry strings in place before they
//! go out over a low-power link, and restores them on the receiving side with
//! the same key. It is obfuscation, not encryption.
//!
//! # Crate Structure
//!
//! - [`cipher`] — The in-place transform (rotation + substitution), validation and case normalization
//!
//! The C ABI lives in the separate `telecipher-ffi` crate. The `telecipher`
//! binary (behind the `cli` feature) wraps the same transform for bench tooling.
//!
//! ```
//! let mut buf = *b"1234ABCD";
//! telecipher::encode(&mut buf, 1).unwrap();
//! telecipher::decode(&mut buf, 1).unwrap();
//! assert_eq!(&buf, b"1234ABCD");
//! ```

/// Re-export transform types.
pub mod cipher {
    pub use telecipher_core::*;
}

pub use telecipher_core::{
    decode, encode, to_uppercase, Cipher, CipherConfig, CipherError, MAX_INPUT_LEN, TABLE_SIZE,
};
