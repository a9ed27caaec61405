//! Sample text generation for the `sample` command.
//!
//! When the user asks for a sample, we generate text that exercises the whole
//! table rather than only letters.
//!
//! # Design
//!
//! Generated text is built from runs of different kinds:
//! - Word-like runs (lowercase letters separated by spaces)
//! - Numeric runs (digits and arithmetic punctuation)
//! - Whitespace (space, tab, newline, carriage return)
//! - Uniform picks from every table character
//!
//! Every character comes from the lookup table, so the result always encodes.

use asciibin_core::LookupTable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMERIC_ALPHABET: &[u8] = b"0123456789+-*/=.,";
const WHITESPACE: &[u8] = b" \t\n\r";

/// Generate a sample text of exactly `len` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: number of characters to generate
pub fn generate_sample_text(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(len);

    while text.len() < len {
        let run_len = rng.gen_range(1..=12).min(len - text.len());

        // Choose run type randomly
        let run_type: u8 = rng.gen_range(0..10);

        match run_type {
            // 40% word-like
            0..=3 => {
                for i in 0..run_len {
                    if i > 0 && rng.gen_range(0..6) == 0 {
                        text.push(b' ');
                    } else {
                        text.push(pick(&mut rng, WORD_ALPHABET));
                    }
                }
            }

            // 20% numeric
            4..=5 => {
                for _ in 0..run_len {
                    text.push(pick(&mut rng, NUMERIC_ALPHABET));
                }
            }

            // 10% whitespace
            6 => {
                text.push(pick(&mut rng, WHITESPACE));
            }

            // 30% anything in the table
            _ => {
                let entries = LookupTable::standard().entries();
                for _ in 0..run_len {
                    text.push(entries[rng.gen_range(0..entries.len())].character);
                }
            }
        }
    }

    text.into_iter().map(char::from).collect()
}

fn pick(rng: &mut ChaCha8Rng, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
