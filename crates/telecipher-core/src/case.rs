use crate::validate::payload_len;

/// Uppercase ASCII letters in place, up to the NUL sentinel.
///
/// Not part of the transform. Callers run it first so lowercase hex reaches
/// the substitution table. Bytes that are not ASCII lowercase are unchanged.
pub fn to_uppercase(buf: &mut [u8]) {
    let len = payload_len(buf);
    buf[..len].make_ascii_uppercase();
}
