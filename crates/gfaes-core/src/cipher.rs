//! AES-128 block encryption.

use crate::block::Block;
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::expand_key;
use crate::state::State;
use crate::trace::{RoundObserver, Trace};

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// One of rounds 1 through 9.
#[inline]
pub(crate) fn full_round(state: &mut State, round_key: &State) {
    sub_bytes(state);
    shift_rows(state);
    mix_columns(state);
    add_round_key(state, round_key);
}

/// Round 10. MixColumns is not applied.
#[inline]
pub(crate) fn final_round(state: &mut State, round_key: &State) {
    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_key);
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_block_with(block, round_keys, &mut |_: usize, _: &State| {})
}

/// Encrypts a block, reporting the state after each round to `observer`.
pub fn encrypt_block_with<O>(block: &Block, round_keys: &RoundKeys, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let mut state = State::from_block(*block);

    add_round_key(&mut state, round_keys.get(0));
    observer.observe(0, &state);

    for round in 1..ROUNDS {
        full_round(&mut state, round_keys.get(round));
        observer.observe(round, &state);
    }

    final_round(&mut state, round_keys.get(ROUNDS));
    observer.observe(ROUNDS, &state);

    state.to_block()
}

/// Encrypts a block and returns the ciphertext together with every round's state.
pub fn encrypt_block_traced(block: &Block, round_keys: &RoundKeys) -> (Block, Trace) {
    let mut trace = Trace::new();
    let ciphertext = encrypt_block_with(block, round_keys, &mut trace);
    (ciphertext, trace)
}

/// Expands `key` and encrypts a plaintext state.
pub fn encrypt_state(plaintext: &State, key: &Aes128Key) -> State {
    let round_keys = expand_key(key);
    State::from_block(encrypt_block(plaintext.as_bytes(), &round_keys))
}

/// Encrypts a plaintext block under a key, both given as byte slices.
///
/// Both slices must be exactly 16 bytes; otherwise an
/// [`Error::InvalidLength`](crate::Error::InvalidLength) is returned before
/// any round runs.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let state = State::try_from(plaintext)?;
    Ok(encrypt_state(&state, &key).to_block())
}
