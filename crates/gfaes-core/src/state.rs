//! The 4×4 byte matrix the round transforms operate on.

use core::fmt;

use crate::block::{xor_in_place, Block, Word, BLOCK_LEN};
use crate::error::{check_len, Error, Result};

/// AES state: 4 rows by 4 columns, stored column-major.
///
/// Byte `i` of the underlying block sits at row `i % 4`, column `i / 4`, so the
/// block and the byte stream it was read from share the same order. Cell
/// accessors panic on coordinates outside `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State(Block);

impl State {
    /// Wraps a block without reordering.
    pub const fn from_block(block: Block) -> Self {
        Self(block)
    }

    /// Returns the underlying block in stream order.
    pub const fn to_block(&self) -> Block {
        self.0
    }

    /// Borrows the bytes in stream order.
    pub fn as_bytes(&self) -> &Block {
        &self.0
    }

    /// Mutably borrows the bytes in stream order.
    pub fn as_bytes_mut(&mut self) -> &mut Block {
        &mut self.0
    }

    /// Returns the cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[index(row, col)]
    }

    /// Overwrites the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[index(row, col)] = value;
    }

    /// Returns column `col` top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> Word {
        let base = index(0, col);
        [self.0[base], self.0[base + 1], self.0[base + 2], self.0[base + 3]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, word: Word) {
        let base = index(0, col);
        self.0[base..base + 4].copy_from_slice(&word);
    }

    /// Returns row `row` left to right.
    #[inline]
    pub fn row(&self, row: usize) -> Word {
        [
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        ]
    }

    /// Overwrites row `row`.
    #[inline]
    pub fn set_row(&mut self, row: usize, word: Word) {
        for (col, value) in word.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// XORs `rhs` into `self` cell by cell.
    #[inline]
    pub fn xor_assign(&mut self, rhs: &State) {
        xor_in_place(&mut self.0, &rhs.0);
    }
}

#[inline]
const fn index(row: usize, col: usize) -> usize {
    assert!(row < 4 && col < 4, "state coordinates out of range");
    row + 4 * col
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self(block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.0
    }
}

impl TryFrom<&[u8]> for State {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        check_len("block", bytes, BLOCK_LEN)?;
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(bytes);
        Ok(Self(block))
    }
}

/// Renders the matrix as four rows of lowercase hex bytes.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let [a, b, c, d] = self.row(row);
            write!(f, "{a:02x} {b:02x} {c:02x} {d:02x}")?;
            if row < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Renders the bytes in stream order as one hex string.
impl fmt::LowerHex for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
