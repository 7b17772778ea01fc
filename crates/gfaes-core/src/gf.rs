//! Arithmetic in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1` (0x11B).

/// Low byte of the reduction polynomial; `x^8` is congruent to it.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies a field element by `x` (i.e. by `0x02`).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
///
/// Shift-and-add over the eight bits of `b`, reducing `a` whenever its high
/// bit is shifted out.
pub const fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Returns the multiplicative inverse of `byte`.
///
/// Zero has no inverse; it maps to zero, which is the convention the S-box
/// relies on.
pub fn inverse(byte: u8) -> u8 {
    if byte == 0 {
        return 0;
    }
    (1..=u8::MAX)
        .find(|&candidate| multiply(byte, candidate) == 1)
        .unwrap_or(0)
}
