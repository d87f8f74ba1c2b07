//! Fixed substitution table.
//!
//! Twenty pairs over the telemetry alphabet: the uppercase hex digits
//! `0-9`, `A-F` and the separators `:` `,` `=` `;`. Both columns are
//! permutations of that alphabet, so the mapping is a bijection and every
//! symbol has exactly one forward and one inverse image.

/// Number of pairs in [`SUBSTITUTION_TABLE`].
pub const TABLE_SIZE: usize = 20;

/// `(plain, encoded)` pairs.
pub const SUBSTITUTION_TABLE: [(u8, u8); TABLE_SIZE] = [
    (b'0', b'B'),
    (b'1', b';'),
    (b'2', b'C'),
    (b'3', b'D'),
    (b'4', b':'),
    (b'5', b'F'),
    (b'6', b'E'),
    (b'7', b'9'),
    (b'8', b'3'),
    (b'9', b'8'),
    (b'A', b'2'),
    (b'B', b'4'),
    (b'C', b','),
    (b'D', b'0'),
    (b'E', b'='),
    (b'F', b'1'),
    (b':', b'A'),
    (b',', b'7'),
    (b'=', b'5'),
    (b';', b'6'),
];

/// Map a plain symbol to its encoded form.
///
/// Returns `None` for bytes outside the alphabet.
pub fn forward_lookup(symbol: u8) -> Option<u8> {
    SUBSTITUTION_TABLE
        .iter()
        .find(|(plain, _)| *plain == symbol)
        .map(|&(_, encoded)| encoded)
}

/// Map an encoded symbol back to its plain form.
pub fn inverse_lookup(symbol: u8) -> Option<u8> {
    SUBSTITUTION_TABLE
        .iter()
        .find(|(_, encoded)| *encoded == symbol)
        .map(|&(plain, _)| plain)
}

/// Returns true if the byte belongs to the 20-symbol alphabet.
pub fn is_alphabet(symbol: u8) -> bool {
    forward_lookup(symbol).is_some()
}

/// Replace every byte with its encoded form. Bytes outside the alphabet are left as-is.
pub fn substitute_forward(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        if let Some(encoded) = forward_lookup(*byte) {
            *byte = encoded;
        }
    }
}

/// Replace every byte with its plain form. Bytes outside the alphabet are left as-is.
pub fn substitute_inverse(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        if let Some(plain) = inverse_lookup(*byte) {
            *byte = plain;
        }
    }
}
