//! Key types for AES-128.

use crate::error::{check_len, Error, Result};
use crate::state::State;

/// Length of an AES-128 key in bytes.
pub const KEY_LEN: usize = 16;

/// Number of round keys produced by the schedule (rounds 0 through 10).
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_LEN]);

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        check_len("key", bytes, KEY_LEN)?;
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }
}

/// Expanded round keys for AES-128, each laid out like a [`State`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [State; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }

    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        let key = Aes128Key::try_from(&[1u8; 16][..]).expect("16 bytes");
        assert_eq!(key, Aes128Key::from([1u8; 16]));
        let err = Aes128Key::try_from(&b"short"[..]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                input: "key",
                expected: 16,
                actual: 5
            }
        );
        assert!(Aes128Key::try_from(&[0u8; 32][..]).is_err());
    }
}
