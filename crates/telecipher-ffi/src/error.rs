use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;

use telecipher_core::CipherError;

use crate::types::TcStatus;

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::default();
    });
}

pub(crate) fn set_error_message(message: impl Into<String>) {
    let message = CString::new(message.into().replace('\0', "?")).unwrap_or_default();
    LAST_ERROR.with(|state| *state.borrow_mut() = message);
}

pub(crate) fn set_panic_error() {
    set_error_message("panic across FFI boundary");
}

pub(crate) fn map_cipher_error(err: &CipherError) -> TcStatus {
    set_error_message(err.to_string());
    match err {
        CipherError::NullPointer => TcStatus::NullPointer,
        CipherError::InvalidKey(_) => TcStatus::InvalidKey,
        CipherError::InvalidLength { .. } => TcStatus::InvalidLength,
    }
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|state| state.borrow().as_ptr())
}
