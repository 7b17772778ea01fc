//! AES-128 key schedule.

use crate::block::{xor_words, Word};
use crate::gf::xtime;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::substitute;
use crate::state::State;

/// Round constants for rounds 1 through 10, each the field doubling of the last.
pub const RCON: [u8; 10] = round_constants();

const fn round_constants() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut value = 0x01;
    let mut i = 0;
    while i < rcon.len() {
        rcon[i] = value;
        value = xtime(value);
        i += 1;
    }
    rcon
}

/// Rotates a column up by one cell.
fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(substitute)
}

/// Derives the word folded into column 0 of round key `round` from the last
/// column of the previous round key.
pub fn schedule_core(previous_last: Word, round: usize) -> Word {
    let mut word = sub_word(rot_word(previous_last));
    word[0] ^= RCON[round - 1];
    word
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [State::default(); ROUND_KEY_COUNT];
    round_keys[0] = State::from_block(key.0);

    for round in 1..ROUND_KEY_COUNT {
        let previous = round_keys[round - 1];
        let mut next = State::default();

        let core = schedule_core(previous.column(3), round);
        next.set_column(0, xor_words(&previous.column(0), &core));
        for col in 1..4 {
            let word = xor_words(&previous.column(col), &next.column(col - 1));
            next.set_column(col, word);
        }

        round_keys[round] = next;
    }

    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn round_constants_match_table() {
        assert_eq!(
            RCON,
            [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
        );
    }

    #[test]
    fn first_round_key_is_master_key() {
        let rks = expand_key(&Aes128Key::from(FIPS_KEY));
        assert_eq!(rks.get(0).to_block(), FIPS_KEY);
        assert_eq!(rks.get(0).get(1, 2), FIPS_KEY[1 + 4 * 2]);
    }

    #[test]
    fn matches_fips_expansion() {
        let rks = expand_key(&Aes128Key::from(FIPS_KEY));
        assert_eq!(
            rks.get(1).to_block(),
            [
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ]
        );
        assert_eq!(
            rks.get(10).to_block(),
            [
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6
            ]
        );
    }

    #[test]
    fn zero_key_expansion() {
        let rks = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(rks.get(1).column(0), [0x62, 0x63, 0x63, 0x63]);
        assert_eq!(rks.get(1).column(3), [0x62, 0x63, 0x63, 0x63]);
        assert_eq!(rks.get(2).column(0), [0x9b, 0x98, 0x98, 0xc9]);
    }

    #[test]
    fn expansion_is_deterministic() {
        let mut rng = ChaCha20Rng::from_seed([40u8; 32]);
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let key = Aes128Key::from(key);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn recurrence_holds_for_every_round() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        for _ in 0..16 {
            let mut key = [0u8; 16];
            rng.fill_bytes(&mut key);
            let rks = expand_key(&Aes128Key::from(key));
            for round in 1..ROUND_KEY_COUNT {
                let prev = rks.get(round - 1);
                let cur = rks.get(round);
                let last = prev.column(3);
                let mut word = [
                    substitute(last[1]),
                    substitute(last[2]),
                    substitute(last[3]),
                    substitute(last[0]),
                ];
                word[0] ^= RCON[round - 1];
                assert_eq!(
                    cur.column(0),
                    xor_words(&prev.column(0), &word),
                    "round {round} column 0"
                );
                for col in 1..4 {
                    assert_eq!(
                        cur.column(col),
                        xor_words(&cur.column(col - 1), &prev.column(col)),
                        "round {round} column {col}"
                    );
                }
            }
        }
    }

    #[test]
    fn rot_word_moves_first_byte_last() {
        assert_eq!(rot_word([1, 2, 3, 4]), [2, 3, 4, 1]);
    }
}
