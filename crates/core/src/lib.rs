//! asciibin-core: fixed-width 7-bit text <-> binary codec
//!
//! Every supported character maps to a unique 7-symbol code over `{'0', '1'}`
//! through a static lookup table. This library provides:
//! - Single-character conversion in both directions
//! - Whole-text conversion in both directions
//! - Binary string validation
//! - A flat error taxonomy with stable codes and fixed messages
//!
//! # Architecture
//!
//! - `table`: the static character <-> code table and its two lookups
//! - `codec`: conversion and validation built on the table
//! - `error`: detailed errors and their flat classification
//!
//! # Design Principles
//!
//! - **No panics**: all failures are returned as [`Error`] values
//! - **All-or-nothing**: a failed batch conversion returns no partial output
//! - **Immutable table**: built at compile time, shared without locking
//! - **No I/O**: the library neither prints nor logs
//!
//! # Example
//! ```
//! use asciibin_core::{binary_to_text, text_to_binary, ErrorKind};
//!
//! let binary = text_to_binary("Hi").unwrap();
//! assert_eq!(binary, "10010001101001");
//! assert_eq!(binary_to_text(&binary, binary.len()).unwrap(), "Hi");
//!
//! let err = binary_to_text("1001000", 6).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use codec::{
    binary_to_character, binary_to_text, character_to_binary, encoded_len,
    is_valid_binary_string, text_to_binary,
};
pub use error::{error_message, Error, ErrorKind, Result, TableError, UNKNOWN_ERROR_MESSAGE};
pub use table::{LookupEntry, LookupTable, CODE_WIDTH};
