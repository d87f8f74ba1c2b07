use std::ffi::CStr;
use std::os::raw::c_char;

/// Borrow a NUL-terminated C string as a mutable byte slice (sentinel excluded).
///
/// Returns `None` for a null pointer; the caller decides whether that is an error.
///
/// # Safety
/// `value` must be null or point to a valid, writable NUL-terminated C string
/// that nothing else accesses for the duration of the call.
pub(crate) unsafe fn c_string_buf<'a>(value: *mut c_char) -> Option<&'a mut [u8]> {
    if value.is_null() {
        return None;
    }

    let len = {
        // SAFETY: The caller guarantees `value` points to a valid NUL-terminated C string.
        unsafe { CStr::from_ptr(value) }.to_bytes().len()
    };

    // SAFETY: `len` bytes before the NUL are readable and writable per the caller contract.
    Some(unsafe { std::slice::from_raw_parts_mut(value.cast::<u8>(), len) })
}

/// Convert a byte pointer + length into a mutable slice. Null maps to `None`.
///
/// # Safety
/// If non-null, `data` must be writable for `len` bytes for the call duration.
pub(crate) unsafe fn bytes_buf<'a>(data: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if data.is_null() {
        return None;
    }

    // SAFETY: Pointer and length are owned by the caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts_mut(data, len) })
}
