use std::os::raw::c_char;

use telecipher_core::{decode_opt, encode_opt, to_uppercase, CipherError};

use crate::buffer::{bytes_buf, c_string_buf};
use crate::error;
use crate::types::{TcKey, TcStatus};

fn status_of(result: Result<(), CipherError>) -> TcStatus {
    match result {
        Ok(()) => TcStatus::Success,
        Err(err) => error::map_cipher_error(&err),
    }
}

/// Encode a NUL-terminated string in place.
///
/// # Safety
/// `text` must be null or a valid, writable NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn tc_encode(text: *mut c_char, key: TcKey) -> TcStatus {
    crate::ffi_boundary(TcStatus::Internal, || {
        error::clear_error_state();
        // SAFETY: Pointer validity is guaranteed by the caller.
        let buf = unsafe { c_string_buf(text) };
        status_of(encode_opt(buf, key))
    })
}

/// Decode a NUL-terminated string in place.
///
/// # Safety
/// `text` must be null or a valid, writable NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn tc_decode(text: *mut c_char, key: TcKey) -> TcStatus {
    crate::ffi_boundary(TcStatus::Internal, || {
        error::clear_error_state();
        // SAFETY: Pointer validity is guaranteed by the caller.
        let buf = unsafe { c_string_buf(text) };
        status_of(decode_opt(buf, key))
    })
}

/// Encode `len` bytes at `data` in place. A NUL inside the range ends the payload.
///
/// # Safety
/// `data` must be null or writable for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn tc_encode_n(data: *mut u8, len: usize, key: TcKey) -> TcStatus {
    crate::ffi_boundary(TcStatus::Internal, || {
        error::clear_error_state();
        // SAFETY: Pointer validity is guaranteed by the caller.
        let buf = unsafe { bytes_buf(data, len) };
        status_of(encode_opt(buf, key))
    })
}

/// Decode `len` bytes at `data` in place.
///
/// # Safety
/// `data` must be null or writable for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn tc_decode_n(data: *mut u8, len: usize, key: TcKey) -> TcStatus {
    crate::ffi_boundary(TcStatus::Internal, || {
        error::clear_error_state();
        // SAFETY: Pointer validity is guaranteed by the caller.
        let buf = unsafe { bytes_buf(data, len) };
        status_of(decode_opt(buf, key))
    })
}

/// Uppercase ASCII letters of a NUL-terminated string in place.
///
/// A null pointer is ignored and does not set an error.
///
/// # Safety
/// `text` must be null or a valid, writable NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn tc_to_uppercase(text: *mut c_char) {
    crate::ffi_boundary((), || {
        // SAFETY: Pointer validity is guaranteed by the caller.
        if let Some(buf) = unsafe { c_string_buf(text) } {
            to_uppercase(buf);
        }
    });
}
