//! Text <-> binary conversion over the standard lookup table.
//!
//! Every character becomes one fixed-width code of [`CODE_WIDTH`] symbols,
//! so a binary string is just the codes of its text laid end to end:
//!
//! ```text
//! "Hi" -> "1001000" "1101001" -> "10010001101001"
//! ```
//!
//! # Validation Order
//!
//! Decoding checks its input in a fixed order, which decides which error a
//! malformed input reports:
//! 1. length (exactly 7 for one code, a multiple of 7 for a string)
//! 2. alphabet (only '0' and '1')
//! 3. table lookup
//!
//! # All-or-Nothing
//!
//! Batch conversions stop at the first failing unit and return only that
//! error. Partial output is dropped, never returned.

use crate::error::{Error, Result};
use crate::table::{LookupTable, CODE_WIDTH};

fn is_binary_symbol(symbol: &u8) -> bool {
    matches!(symbol, b'0' | b'1')
}

/// Position and value of the first non-binary symbol in `binary[..length]`.
///
/// `length` must not exceed `binary.len()`.
fn first_invalid_symbol(binary: &str, length: usize) -> Option<(usize, char)> {
    let position = binary.as_bytes()[..length]
        .iter()
        .position(|symbol| !is_binary_symbol(symbol))?;

    // Everything before `position` is ASCII, so it sits on a char boundary
    let symbol = binary[position..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Some((position, symbol))
}

/// Check the alphabet of the first `length` symbols of `binary`.
///
/// Returns true iff every one of those symbols is '0' or '1'. A zero
/// `length` is vacuously valid. A `length` past the end of `binary` is
/// invalid because the prefix does not exist.
///
/// This does not check that `length` is a multiple of [`CODE_WIDTH`].
pub fn is_valid_binary_string(binary: &str, length: usize) -> bool {
    binary
        .as_bytes()
        .get(..length)
        .is_some_and(|prefix| prefix.iter().all(is_binary_symbol))
}

/// Number of binary symbols needed to encode `characters` characters.
///
/// # Errors
/// Returns `Error::SizeOverflow` if the product does not fit in `usize`.
pub fn encoded_len(characters: usize) -> Result<usize> {
    characters
        .checked_mul(CODE_WIDTH)
        .ok_or(Error::SizeOverflow {
            characters,
            width: CODE_WIDTH,
        })
}

/// Convert one character to its code.
///
/// # Errors
/// Returns `Error::CharacterNotFound` if the table has no entry for
/// `character`.
pub fn character_to_binary(character: u8) -> Result<&'static str> {
    LookupTable::standard()
        .find_code_for_character(character)
        .ok_or(Error::CharacterNotFound { character })
}

/// Convert one code back to its character.
///
/// # Errors
/// - `Error::InvalidCodeLength` if `code` is not exactly 7 symbols
/// - `Error::InvalidSymbol` if `code` has a symbol other than '0' or '1'
/// - `Error::CodeNotFound` if no table entry uses `code`
pub fn binary_to_character(code: &str) -> Result<u8> {
    if code.len() != CODE_WIDTH {
        return Err(Error::InvalidCodeLength {
            expected: CODE_WIDTH,
            actual: code.len(),
        });
    }

    if let Some((position, symbol)) = first_invalid_symbol(code, CODE_WIDTH) {
        return Err(Error::InvalidSymbol { symbol, position });
    }

    LookupTable::standard()
        .find_character_for_code(code)
        .ok_or_else(|| Error::CodeNotFound {
            code: code.to_owned(),
        })
}

/// Encode a whole text.
///
/// The text is taken byte by byte; a non-ASCII character is rejected at its
/// first byte. The result is exactly `7 * text.len()` symbols, and empty text
/// encodes to an empty string.
///
/// # Errors
/// - `Error::SizeOverflow` / `Error::Allocation` if the output cannot be sized
/// - `Error::CharacterNotFound` for the first unsupported character
pub fn text_to_binary(text: &str) -> Result<String> {
    let required = encoded_len(text.len())?;

    let mut binary = String::new();
    binary.try_reserve_exact(required)?;

    for &character in text.as_bytes() {
        binary.push_str(character_to_binary(character)?);
    }

    debug_assert_eq!(binary.len(), required);
    Ok(binary)
}

/// Decode the first `length` symbols of `binary`.
///
/// `length` is independent of `binary.len()` so a caller can decode a
/// prefix. Zero `length` decodes to an empty string.
///
/// # Errors
/// - `Error::UnalignedLength` if `length` is not a multiple of 7
/// - `Error::LengthOutOfBounds` if `length` exceeds `binary.len()`
/// - `Error::InvalidSymbol` if the prefix has a symbol other than '0' or '1'
/// - `Error::CodeNotFound` for the first code with no table entry
pub fn binary_to_text(binary: &str, length: usize) -> Result<String> {
    if length % CODE_WIDTH != 0 {
        return Err(Error::UnalignedLength {
            length,
            width: CODE_WIDTH,
        });
    }

    if length > binary.len() {
        return Err(Error::LengthOutOfBounds {
            length,
            available: binary.len(),
        });
    }

    if let Some((position, symbol)) = first_invalid_symbol(binary, length) {
        return Err(Error::InvalidSymbol { symbol, position });
    }

    let mut text = String::new();
    text.try_reserve_exact(length / CODE_WIDTH)?;

    // The prefix is pure ASCII, so every chunk boundary is a char boundary
    for start in (0..length).step_by(CODE_WIDTH) {
        let character = binary_to_character(&binary[start..start + CODE_WIDTH])?;
        text.push(char::from(character));
    }

    Ok(text)
}
