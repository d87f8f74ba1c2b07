use std::os::raw::c_int;

/// Status returned by every transform export. Matches `CipherError::status_code`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcStatus {
    Success = 0,
    NullPointer = -1,
    InvalidKey = -2,
    InvalidLength = -3,
    Internal = -99,
}

#[allow(dead_code)]
pub const TC_SUCCESS: TcStatus = TcStatus::Success;
#[allow(dead_code)]
pub const TC_ERR_NULL_POINTER: TcStatus = TcStatus::NullPointer;
#[allow(dead_code)]
pub const TC_ERR_INVALID_KEY: TcStatus = TcStatus::InvalidKey;
#[allow(dead_code)]
pub const TC_ERR_INVALID_LENGTH: TcStatus = TcStatus::InvalidLength;
#[allow(dead_code)]
pub const TC_ERR_INTERNAL: TcStatus = TcStatus::Internal;

pub const TC_MAX_INPUT_LEN: usize = telecipher_core::MAX_INPUT_LEN;
pub const TC_TABLE_SIZE: usize = telecipher_core::TABLE_SIZE;

/// Key type on the C side.
pub type TcKey = c_int;
