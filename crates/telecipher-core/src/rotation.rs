//! Split-shift rotation stage.
//!
//! The buffer is split around `mid = (len - 1) / 2`:
//!
//! ```text
//! ┌──────────────────┬─────┬──────────────────────┐
//! │ lower [0, mid)   │ mid │ upper [mid + 1, len) │
//! └──────────────────┴─────┴──────────────────────┘
//! ```
//!
//! One forward iteration rotates each half left by one position; one inverse
//! iteration rotates each half right by one. The byte at `mid` never moves.
//! Each iteration is a fixed permutation of its half, so `n` iterations on a
//! half of length `h` land on the same arrangement as `n % h` iterations.
//! Any byte value is rotated; this stage does not look at content.

/// Split `buf` into its lower and upper halves, skipping the middle byte.
///
/// Returns `None` when there is nothing to rotate.
fn halves(buf: &mut [u8]) -> Option<(&mut [u8], &mut [u8])> {
    if buf.len() <= 1 {
        return None;
    }
    let mid = (buf.len() - 1) / 2;
    let (lower, rest) = buf.split_at_mut(mid);
    Some((lower, &mut rest[1..]))
}

// Reduce in u64 so a 16-bit usize never truncates the key.
fn effective(iterations: u32, half_len: usize) -> usize {
    if half_len == 0 {
        0
    } else {
        (u64::from(iterations) % half_len as u64) as usize
    }
}

/// Apply `iterations` forward (left) rotations to both halves of `buf`.
pub fn rotate_forward(buf: &mut [u8], iterations: u32) {
    if let Some((lower, upper)) = halves(buf) {
        let lower_steps = effective(iterations, lower.len());
        let upper_steps = effective(iterations, upper.len());
        lower.rotate_left(lower_steps);
        upper.rotate_left(upper_steps);
    }
}

/// Apply `iterations` inverse (right) rotations to both halves of `buf`.
pub fn rotate_inverse(buf: &mut [u8], iterations: u32) {
    if let Some((lower, upper)) = halves(buf) {
        let lower_steps = effective(iterations, lower.len());
        let upper_steps = effective(iterations, upper.len());
        upper.rotate_right(upper_steps);
        lower.rotate_right(lower_steps);
    }
}
