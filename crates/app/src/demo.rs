//! Built-in demonstrations of the codec.
//!
//! Each section exercises one part of the public API on fixed inputs and
//! prints the outcome. A conversion that fails is shown with its error
//! message; it does not stop the demo.

use asciibin_core::{
    binary_to_character, binary_to_text, character_to_binary, is_valid_binary_string,
    text_to_binary, CODE_WIDTH,
};

const BANNER: &str = "ASCIIBIN Library Demo";

const SAMPLE_CHARACTERS: [u8; 5] = [b'A', b'!', b'5', b'z', b' '];

const SAMPLE_TEXTS: [&str; 6] = ["Hello, World!", "ASCII", "12345", "!@#$%", "A\nB\tC", ""];

const MALFORMED_CODES: [(&str, &str); 3] = [
    ("1010102", "Invalid binary"),
    ("10101", "Wrong length"),
    ("10101ab", "Invalid chars"),
];

const VALIDATION_INPUTS: [&str; 7] = [
    "1010101", "0000000", "1111111", "1010102", "10101ab", "101010", "10101010",
];

/// Run every demonstration in order.
pub fn run() {
    println!("{BANNER}");
    println!("{}", "=".repeat(BANNER.len()));
    println!();

    single_character_conversion();
    text_conversion();
    error_handling();
    validation();

    println!("Demo completed successfully!");
}

fn single_character_conversion() {
    println!("=== Single Character Conversion Demo ===");

    for &character in &SAMPLE_CHARACTERS {
        let shown = char::from(character);
        match character_to_binary(character) {
            Ok(code) => {
                println!("'{shown}' -> {code}");
                if let Ok(back) = binary_to_character(code) {
                    println!("  {code} -> '{}' ✓", char::from(back));
                }
            }
            Err(e) => {
                log::warn!("encoding {character:#04x} failed: {e}");
                println!("'{shown}' -> Error: {}", e.kind().message());
            }
        }
    }
    println!();
}

fn text_conversion() {
    println!("=== Text String Conversion Demo ===");

    for text in SAMPLE_TEXTS {
        println!("Original: '{text}'");

        match text_to_binary(text) {
            Ok(binary) => {
                log::debug!("encoded {} characters into {} symbols", text.len(), binary.len());
                println!("Binary:   {binary}");

                match binary_to_text(&binary, binary.len()) {
                    Ok(converted) => println!("Converted: '{converted}' ✓"),
                    Err(e) => {
                        log::warn!("decoding failed: {e}");
                        println!("Converted: Error");
                    }
                }
            }
            Err(e) => {
                log::warn!("encoding failed: {e}");
                println!("Binary:   Error");
            }
        }
        println!();
    }
}

fn error_handling() {
    println!("=== Error Handling Demo ===");

    for (code, label) in MALFORMED_CODES {
        let message = match binary_to_character(code) {
            Ok(_) => "Success",
            Err(e) => {
                log::debug!("{code:?} rejected: {e}");
                e.kind().message()
            }
        };
        println!("{label} '{code}': {message}");
    }

    // Delete has no table entry
    match character_to_binary(0x7f) {
        Ok(code) => println!("Unsupported character DEL: {code}"),
        Err(e) => println!("Unsupported character DEL: {}", e.kind().message()),
    }
    println!();
}

fn validation() {
    println!("=== Binary String Validation Demo ===");

    for binary in VALIDATION_INPUTS {
        let (valid, width) = validation_labels(binary);
        println!("'{binary}': {valid} ({width})");
    }
    println!();
}

/// Validator verdict and, separately, whether the string is one code wide.
fn validation_labels(binary: &str) -> (&'static str, &'static str) {
    let valid = if is_valid_binary_string(binary, binary.len()) {
        "Valid"
    } else {
        "Invalid"
    };
    let width = if binary.len() == CODE_WIDTH {
        "one code"
    } else {
        "wrong length"
    };
    (valid, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(BANNER, "ASCIIBIN Library Demo");
        assert_eq!("=".repeat(BANNER.len()), "=====================");
    }

    #[test]
    fn test_validation_labels() {
        assert_eq!(validation_labels("1010101"), ("Valid", "one code"));
        assert_eq!(validation_labels("1010102"), ("Invalid", "one code"));
        assert_eq!(validation_labels("10101ab"), ("Invalid", "one code"));
        // The validator itself does not care about width
        assert_eq!(validation_labels("101010"), ("Valid", "wrong length"));
        assert_eq!(validation_labels("10101010"), ("Valid", "wrong length"));
    }
}
