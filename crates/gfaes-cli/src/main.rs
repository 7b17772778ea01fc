//! Command-line interface for `gfaes`.

#![forbid(unsafe_code)]

mod input;

use std::io;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use gfaes_core::{
    encrypt_block, encrypt_block_with, expand_key, sbox, Aes128Key, Block, State, Tee, Trace,
    TracingObserver, ROUNDS,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

use crate::input::{parse_byte, parse_hex_block, parse_hex_key, prompt_line, BlockInput};

/// AES-128 encryption with per-round state tracing.
#[derive(Parser)]
#[command(
    name = "gfaes",
    version,
    author,
    about = "AES-128 encryption over GF(2^8) with per-round state tracing"
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block and print the state after every round.
    Encrypt {
        /// Plaintext as text; padded or truncated to 16 bytes. Prompted for if omitted.
        #[arg(long, value_name = "TEXT", conflicts_with = "plaintext_hex")]
        plaintext: Option<String>,
        /// Plaintext as exactly 32 hex characters.
        #[arg(long, value_name = "HEX")]
        plaintext_hex: Option<String>,
        /// Key as text; padded or truncated to 16 bytes. Prompted for if omitted.
        #[arg(long, value_name = "TEXT", conflicts_with = "key_hex")]
        key: Option<String>,
        /// AES-128 key as exactly 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// Fill byte (hex) for text shorter than 16 bytes.
        #[arg(long, value_name = "HEX", default_value = "20", value_parser = parse_byte)]
        pad_byte: u8,
        /// Print only the ciphertext hex.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// One hex line per round key instead of 4x4 grids.
        #[arg(long, default_value_t = false)]
        flat: bool,
    },
    /// Print the substitution table.
    Sbox,
    /// Run the built-in known-answer vectors.
    Check,
    /// Encrypt a random block under a random key and print the trace.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Encrypt {
            plaintext,
            plaintext_hex,
            key,
            key_hex,
            pad_byte,
            quiet,
        } => {
            let input = BlockInput { pad_byte };
            let block = resolve_block(plaintext, plaintext_hex, &input)?;
            let key = resolve_key(key, key_hex, &input)?;
            cmd_encrypt(&block, &key, quiet)
        }
        Commands::Expand { key_hex, flat } => cmd_expand(&key_hex, flat),
        Commands::Sbox => cmd_sbox(),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_block(text: Option<String>, hex: Option<String>, input: &BlockInput) -> Result<Block> {
    if let Some(hex) = hex {
        return parse_hex_block(&hex);
    }
    let text = match text {
        Some(text) => text,
        None => read_prompted("Enter plaintext (exactly 16 characters): ")?,
    };
    Ok(input.fit("plaintext", text.as_bytes()))
}

fn resolve_key(text: Option<String>, hex: Option<String>, input: &BlockInput) -> Result<Aes128Key> {
    if let Some(hex) = hex {
        return parse_hex_key(&hex);
    }
    let text = match text {
        Some(text) => text,
        None => read_prompted("Enter key (exactly 16 characters): ")?,
    };
    Ok(Aes128Key::from(input.fit("key", text.as_bytes())))
}

fn read_prompted(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    prompt_line(&mut reader, &mut stdout, prompt)
}

fn cmd_encrypt(block: &Block, key: &Aes128Key, quiet: bool) -> Result<()> {
    let round_keys = expand_key(key);
    let mut trace = Trace::new();
    let mut logger = TracingObserver;
    let ciphertext = encrypt_block_with(block, &round_keys, &mut Tee(&mut trace, &mut logger));

    if quiet {
        println!("{}", hex::encode(ciphertext));
        return Ok(());
    }

    print_grid("Original plaintext", &State::from_block(*block));
    for (round, state) in trace.iter() {
        print_grid(&round_label(round), state);
    }
    print_grid("Final ciphertext", &State::from_block(ciphertext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_expand(key_hex: &str, flat: bool) -> Result<()> {
    let key = parse_hex_key(key_hex)?;
    let round_keys = expand_key(&key);
    for (round, round_key) in round_keys.iter().enumerate() {
        if flat {
            println!("{round:2}: {round_key:x}");
        } else {
            print_grid(&format!("Round key {round}"), round_key);
        }
    }
    Ok(())
}

fn cmd_sbox() -> Result<()> {
    let table = sbox::table();
    let header: Vec<String> = (0..16).map(|lo| format!("{lo:02x}")).collect();
    println!("    {}", header.join(" "));
    for (hi, row) in table.chunks_exact(16).enumerate() {
        let cells: Vec<String> = row.iter().map(|b| format!("{b:02x}")).collect();
        println!("{:x}0  {}", hi, cells.join(" "));
    }
    Ok(())
}

/// Known-answer vectors: (name, key, plaintext, ciphertext).
const VECTORS: [(&str, &str, &str, &str); 3] = [
    (
        "zero key, zero block",
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66e94bd4ef8a2c3b884cfa59ca342b2e",
    ),
    (
        "FIPS-197 appendix B",
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "FIPS-197 appendix C.1",
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
];

fn cmd_check() -> Result<()> {
    if sbox::substitute(0x00) != 0x63 {
        bail!("substitution table is corrupt");
    }
    for (name, key_hex, plain_hex, cipher_hex) in VECTORS {
        let round_keys = expand_key(&parse_hex_key(key_hex)?);
        let actual = encrypt_block(&parse_hex_block(plain_hex)?, &round_keys);
        let expected = parse_hex_block(cipher_hex)?;
        if actual != expected {
            bail!(
                "{name}: expected {}, got {}",
                hex::encode(expected),
                hex::encode(actual)
            );
        }
        println!("ok  {name}");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!();
    cmd_encrypt(&block, &Aes128Key::from(key_bytes), false)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

fn round_label(round: usize) -> String {
    match round {
        0 => "Initial AddRoundKey (Round 0)".to_string(),
        ROUNDS => format!("Round {ROUNDS} (Final)"),
        r => format!("Round {r}"),
    }
}

fn print_grid(label: &str, state: &State) {
    println!("{label}:");
    println!("{state}");
    println!();
}
