//! Forward S-box derived from field inversion and the AES affine map.

use std::sync::OnceLock;

use crate::gf;

const AFFINE_CONSTANT: u8 = 0x63;

static TABLE: OnceLock<[u8; 256]> = OnceLock::new();

/// Substitutes a single byte.
#[inline]
pub fn substitute(byte: u8) -> u8 {
    table()[byte as usize]
}

/// Returns the full substitution table, building it on first use.
pub fn table() -> &'static [u8; 256] {
    TABLE.get_or_init(|| {
        tracing::trace!("building substitution table");
        let mut table = [0u8; 256];
        for (input, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
            *slot = derive(input);
        }
        table
    })
}

/// Computes the substitution of `byte` without consulting the table.
pub fn derive(byte: u8) -> u8 {
    affine(gf::inverse(byte))
}

// Bit i of the output is b_i ^ b_{i+4} ^ b_{i+5} ^ b_{i+6} ^ b_{i+7} ^ c_i,
// indices taken mod 8.
fn affine(byte: u8) -> u8 {
    let mut out = 0u8;
    for i in 0..8 {
        let bit = (byte >> i)
            ^ (byte >> ((i + 4) % 8))
            ^ (byte >> ((i + 5) % 8))
            ^ (byte >> ((i + 6) % 8))
            ^ (byte >> ((i + 7) % 8))
            ^ (AFFINE_CONSTANT >> i);
        out |= (bit & 1) << i;
    }
    out
}
