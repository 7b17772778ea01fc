//! AES round transformations.

use crate::gf::multiply;
use crate::sbox::substitute;
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.as_bytes_mut().iter_mut() {
        *byte = substitute(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` cells.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut cells = state.row(row);
        cells.rotate_left(row);
        state.set_row(row, cells);
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = multiply(0x02, a0) ^ multiply(0x03, a1) ^ a2 ^ a3;
    col[1] = a0 ^ multiply(0x02, a1) ^ multiply(0x03, a2) ^ a3;
    col[2] = a0 ^ a1 ^ multiply(0x02, a2) ^ multiply(0x03, a3);
    col[3] = multiply(0x03, a0) ^ a1 ^ a2 ^ multiply(0x02, a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_assign(round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn state_from_hex(hex: &str) -> State {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).expect("hex digit");
        }
        State::from_block(block)
    }

    #[test]
    fn mix_column_reference_vectors() {
        let vectors = [
            ([0xdb, 0x13, 0x53, 0x45], [0x8e, 0x4d, 0xa1, 0xbc]),
            ([0xf2, 0x0a, 0x22, 0x5c], [0x9f, 0xdc, 0x58, 0x9d]),
            ([0x01, 0x01, 0x01, 0x01], [0x01, 0x01, 0x01, 0x01]),
            ([0xc6, 0xc6, 0xc6, 0xc6], [0xc6, 0xc6, 0xc6, 0xc6]),
            ([0xd4, 0xd4, 0xd4, 0xd5], [0xd5, 0xd5, 0xd7, 0xd6]),
            ([0x2d, 0x26, 0x31, 0x4c], [0x4d, 0x7e, 0xbd, 0xf8]),
        ];
        for (input, expected) in vectors {
            let mut column = input;
            mix_single_column(&mut column);
            assert_eq!(column, expected, "input {input:02x?}");
        }
    }

    #[test]
    fn mix_columns_treats_columns_independently() {
        let mut state = State::default();
        state.set_column(2, [0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0; 4]);
        assert_eq!(state.column(1), [0; 4]);
        assert_eq!(state.column(2), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(state.column(3), [0; 4]);
    }

    #[test]
    fn shift_rows_rotates_each_row() {
        let mut block = [0u8; 16];
        for (i, b) in block.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut state = State::from_block(block);
        shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        assert_eq!(state.row(0), [0, 4, 8, 12]);
        assert_eq!(state.row(3), [15, 3, 7, 11]);
    }

    #[test]
    fn sub_bytes_applies_sbox_cellwise() {
        let mut state = State::from_block([0x53; 16]);
        state.set(2, 1, 0x00);
        sub_bytes(&mut state);
        assert_eq!(state.get(0, 0), 0xed);
        assert_eq!(state.get(2, 1), 0x63);
    }

    #[test]
    fn fips_round_one_steps() {
        // FIPS-197 Appendix B, round 1.
        let mut state = state_from_hex("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state);
        assert_eq!(state, state_from_hex("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut state);
        assert_eq!(state, state_from_hex("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut state);
        assert_eq!(state, state_from_hex("046681e5e0cb199a48f8d37a2806264c"));
        add_round_key(&mut state, &state_from_hex("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(state, state_from_hex("a49c7ff2689f352b6b5bea43026a5049"));
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let mut rng = ChaCha20Rng::from_seed([30u8; 32]);
        for _ in 0..32 {
            let mut block = [0u8; 16];
            let mut key = [0u8; 16];
            rng.fill_bytes(&mut block);
            rng.fill_bytes(&mut key);
            let original = State::from_block(block);
            let round_key = State::from_block(key);
            let mut state = original;
            add_round_key(&mut state, &round_key);
            add_round_key(&mut state, &round_key);
            assert_eq!(state, original);
        }
    }
}
