//! telecipher-ffi: C-ABI exports for the telecipher transform.

mod buffer;
mod cipher;
mod error;
mod types;

use std::panic::AssertUnwindSafe;

pub use cipher::{tc_decode, tc_decode_n, tc_encode, tc_encode_n, tc_to_uppercase};
pub use types::{
    TcKey, TcStatus, TC_ERR_INTERNAL, TC_ERR_INVALID_KEY, TC_ERR_INVALID_LENGTH,
    TC_ERR_NULL_POINTER, TC_MAX_INPUT_LEN, TC_SUCCESS, TC_TABLE_SIZE,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

/// Maximum payload length accepted by the transform.
#[no_mangle]
pub extern "C" fn tc_max_input_len() -> usize {
    TC_MAX_INPUT_LEN
}

/// Reset the calling thread's last-error message.
#[no_mangle]
pub extern "C" fn tc_clear_error() {
    ffi_boundary((), || {
        error::clear_error_state();
    });
}

/// Message for the last failed call on this thread (empty after a success).
///
/// The pointer stays valid until the next telecipher call on the same thread.
#[no_mangle]
pub extern "C" fn tc_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}
