//! In-place split-shift and substitution transform for telemetry payloads.
//!
//! Lightweight, reversible scrambling of short uppercase-hex telemetry
//! strings before they leave a low-power device. Not cryptography: the table
//! and rotation are fixed and invertible by inspection.
//!
//! Encoding runs two stages on a caller-owned buffer:
//! - Rotation: each half of the buffer (around its middle byte) is rotated
//!   left `key` times
//! - Substitution: each byte of the 20-symbol alphabet is swapped through a
//!   fixed table
//!
//! Decoding runs the inverse stages in mirror order. No allocation, no
//! length change.

pub mod case;
pub mod cipher;
pub mod error;
pub mod rotation;
pub mod table;
pub mod validate;

pub use case::to_uppercase;
pub use cipher::{decode, decode_opt, encode, encode_opt, Cipher, CipherConfig};
pub use error::{CipherError, Result};
pub use rotation::{rotate_forward, rotate_inverse};
pub use table::{
    forward_lookup, inverse_lookup, is_alphabet, substitute_forward, substitute_inverse,
    SUBSTITUTION_TABLE, TABLE_SIZE,
};
pub use validate::{payload_len, validate, MAX_INPUT_LEN};
