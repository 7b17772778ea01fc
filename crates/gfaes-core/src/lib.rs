//! Forward AES-128 built directly on GF(2^8) arithmetic.
//!
//! The crate is organised leaves first:
//! - [`gf`]: multiplication and inversion in GF(2^8).
//! - [`sbox`]: the substitution table derived from field inversion and an affine map.
//! - [`round`]: SubBytes, ShiftRows, MixColumns and AddRoundKey over a [`State`].
//! - [`schedule`]: expansion of a 16-byte key into 11 round keys.
//! - the cipher itself, which sequences the above into ten rounds and can
//!   report every intermediate state through a [`RoundObserver`].
//!
//! Only encryption is provided. The implementation aims for clarity and
//! testability rather than constant-time guarantees; it should not be treated
//! as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
pub mod schedule;
mod state;
mod trace;

pub use crate::block::{Block, Word, BLOCK_LEN};
pub use crate::cipher::{
    encrypt, encrypt_block, encrypt_block_traced, encrypt_block_with, encrypt_state, ROUNDS,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, KEY_LEN, ROUND_KEY_COUNT};
pub use crate::schedule::expand_key;
pub use crate::state::State;
pub use crate::trace::{RoundObserver, Tee, Trace, TracingObserver};
