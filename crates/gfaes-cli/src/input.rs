//! Turning user input into 16-byte blocks and keys.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use gfaes_core::{Aes128Key, Block, State, BLOCK_LEN};

/// Fill byte used when text input is shorter than a block (an ASCII space).
pub const DEFAULT_PAD_BYTE: u8 = b' ';

/// How free-form text is shaped into a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockInput {
    /// Byte appended until the input reaches 16 bytes.
    pub pad_byte: u8,
}

impl Default for BlockInput {
    fn default() -> Self {
        Self {
            pad_byte: DEFAULT_PAD_BYTE,
        }
    }
}

impl BlockInput {
    /// Pads short input with `pad_byte` and truncates long input to 16 bytes.
    ///
    /// An empty line is valid and becomes a block of padding.
    pub fn fit(&self, what: &str, bytes: &[u8]) -> Block {
        if bytes.len() > BLOCK_LEN {
            tracing::warn!(
                input = what,
                dropped = bytes.len() - BLOCK_LEN,
                "truncating to 16 bytes"
            );
        }
        let mut block = [self.pad_byte; BLOCK_LEN];
        let take = bytes.len().min(BLOCK_LEN);
        block[..take].copy_from_slice(&bytes[..take]);
        block
    }
}

/// Decodes a plaintext block from exactly 32 hex characters.
pub fn parse_hex_block(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode plaintext hex")?;
    let state = State::try_from(bytes.as_slice()).context("plaintext must be 16 bytes")?;
    Ok(state.to_block())
}

/// Decodes an AES-128 key from exactly 32 hex characters.
pub fn parse_hex_key(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 16 bytes")
}

/// Parses a single byte written in hex, with or without a `0x` prefix.
pub fn parse_byte(value: &str) -> Result<u8, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(digits, 16).map_err(|err| format!("invalid byte `{value}`: {err}"))
}

/// Writes `prompt`, then reads one line without its line terminator.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}").context("write prompt")?;
    writer.flush().context("flush prompt")?;
    let mut line = String::new();
    let read = reader.read_line(&mut line).context("read input line")?;
    if read == 0 {
        bail!("no input provided");
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
