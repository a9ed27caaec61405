//! Error types for the asciibin codec.
//!
//! All operations return structured errors rather than panicking. Each
//! [`Error`] value also classifies into one of five flat [`ErrorKind`]s with
//! stable ordinals, so callers that only care about the category (or that
//! exchange error codes with other programs) can use [`Error::kind`] and
//! [`error_message`].

use std::collections::TryReserveError;

use thiserror::Error;

/// Flat error classification with stable ordinal values.
///
/// The ordinals are part of the public contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorKind {
    /// No error.
    Success = 0,
    /// A required reference argument was absent.
    ///
    /// The Rust API takes references, so no operation produces this kind;
    /// it is kept so the ordinal space matches other implementations.
    NullPointer = 1,
    /// Malformed input: wrong length, or symbols outside `{'0', '1'}`.
    InvalidInput = 2,
    /// Allocation failure or size overflow.
    Memory = 3,
    /// Well-formed input with no corresponding table entry.
    NotFound = 4,
}

impl ErrorKind {
    /// All kinds in ordinal order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Success,
        ErrorKind::NullPointer,
        ErrorKind::InvalidInput,
        ErrorKind::Memory,
        ErrorKind::NotFound,
    ];

    /// Stable ordinal of this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a kind by ordinal.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// Fixed human-readable description of this kind.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::Success => "Success",
            ErrorKind::NullPointer => "NULL pointer provided",
            ErrorKind::InvalidInput => "Invalid input format",
            ErrorKind::Memory => "Memory allocation failed",
            ErrorKind::NotFound => "Character not found in lookup table",
        }
    }
}

/// Message returned by [`error_message`] for ordinals outside the known set.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Map an error ordinal to its description.
///
/// Any value outside the known set yields [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message(code: i32) -> &'static str {
    ErrorKind::from_code(code).map_or(UNKNOWN_ERROR_MESSAGE, ErrorKind::message)
}

/// Error returned by every fallible codec operation.
///
/// Variants carry enough detail to point at the offending input; use
/// [`Error::kind`] to get the flat classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A single code was not exactly 7 symbols long
    #[error("invalid code length: expected {expected} symbols, got {actual}")]
    InvalidCodeLength { expected: usize, actual: usize },

    /// A binary string contained something other than '0' or '1'
    #[error("invalid binary symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A binary string length was not a multiple of the code width
    #[error("binary length {length} is not a multiple of {width}")]
    UnalignedLength { length: usize, width: usize },

    /// The requested length runs past the end of the supplied string
    #[error("length {length} exceeds the {available} symbols supplied")]
    LengthOutOfBounds { length: usize, available: usize },

    /// A character has no table entry
    #[error("character {character:#04x} not found in lookup table")]
    CharacterNotFound { character: u8 },

    /// A well-formed code has no table entry
    #[error("code {code} not found in lookup table")]
    CodeNotFound { code: String },

    /// Output size computation overflowed `usize`
    #[error("output size overflow: {characters} characters x {width} symbols")]
    SizeOverflow { characters: usize, width: usize },

    /// The output buffer could not be reserved
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    /// Flat classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCodeLength { .. }
            | Error::InvalidSymbol { .. }
            | Error::UnalignedLength { .. }
            | Error::LengthOutOfBounds { .. } => ErrorKind::InvalidInput,
            Error::CharacterNotFound { .. } | Error::CodeNotFound { .. } => ErrorKind::NotFound,
            Error::SizeOverflow { .. } | Error::Allocation(_) => ErrorKind::Memory,
        }
    }

    /// Stable ordinal of [`Error::kind`].
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

/// Lookup table integrity violations, reported by
/// [`LookupTable::validate`](crate::table::LookupTable::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A code is not exactly 7 symbols long
    #[error("entry {index}: code {code:?} has {actual} symbols, expected {expected}")]
    CodeLength {
        index: usize,
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A code contains a symbol outside {'0', '1'}
    #[error("entry {index}: code {code:?} contains a non-binary symbol")]
    CodeAlphabet { index: usize, code: &'static str },

    /// Two entries share a character
    #[error("entries {first} and {second} both map character {character:#04x}")]
    DuplicateCharacter {
        character: u8,
        first: usize,
        second: usize,
    },

    /// Two entries share a code
    #[error("entries {first} and {second} both use code {code}")]
    DuplicateCode {
        code: &'static str,
        first: usize,
        second: usize,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(ErrorKind::Success.code(), 0);
        assert_eq!(ErrorKind::NullPointer.code(), 1);
        assert_eq!(ErrorKind::InvalidInput.code(), 2);
        assert_eq!(ErrorKind::Memory.code(), 3);
        assert_eq!(ErrorKind::NotFound.code(), 4);
    }

    #[test]
    fn test_from_code() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(-1), None);
        assert_eq!(ErrorKind::from_code(5), None);
    }

    #[test]
    fn test_error_message_known() {
        assert_eq!(error_message(0), "Success");
        assert_eq!(error_message(1), "NULL pointer provided");
        assert_eq!(error_message(2), "Invalid input format");
        assert_eq!(error_message(3), "Memory allocation failed");
        assert_eq!(error_message(4), "Character not found in lookup table");
    }

    #[test]
    fn test_error_message_unknown() {
        for code in [-1, 5, 42, i32::MIN, i32::MAX] {
            assert_eq!(error_message(code), UNKNOWN_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_kind_classification() {
        let err = Error::InvalidCodeLength {
            expected: 7,
            actual: 5,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Error::InvalidSymbol {
            symbol: '2',
            position: 6,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Error::UnalignedLength { length: 8, width: 7 };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Error::LengthOutOfBounds {
            length: 14,
            available: 7,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Error::CharacterNotFound { character: 0x7f };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), 4);

        let err = Error::CodeNotFound {
            code: "0000000".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = Error::SizeOverflow {
            characters: usize::MAX,
            width: 7,
        };
        assert_eq!(err.kind(), ErrorKind::Memory);
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSymbol {
            symbol: 'a',
            position: 5,
        };
        assert!(err.to_string().contains("position 5"));

        let err = Error::CharacterNotFound { character: 0x7f };
        assert!(err.to_string().contains("0x7f"));

        let err = Error::CodeNotFound {
            code: "0000000".to_string(),
        };
        assert!(err.to_string().contains("0000000"));
    }
}
