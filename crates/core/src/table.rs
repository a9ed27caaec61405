//! Static character <-> code lookup table.
//!
//! The table pairs every supported character with a unique 7-symbol code over
//! the alphabet `{'0', '1'}`. It is a `static` built at compile time and is
//! never mutated, so it can be shared freely across threads.
//!
//! # Supported Characters
//!
//! - Printable ASCII, `0x20` (space) through `0x7E` (`~`)
//! - Tab, line feed and carriage return
//!
//! Each code is the character's 7-bit ASCII value, most significant bit first.
//! Entries are ordered by code value.
//!
//! # Example
//! ```
//! use asciibin_core::table::LookupTable;
//!
//! let table = LookupTable::standard();
//! assert_eq!(table.find_code_for_character(b'A'), Some("1000001"));
//! assert_eq!(table.find_character_for_code("1000001"), Some(b'A'));
//! assert_eq!(table.find_code_for_character(0x7f), None);
//! ```

use crate::error::TableError;

/// Number of symbols in every code.
pub const CODE_WIDTH: usize = 7;

/// One immutable (character, code) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupEntry {
    /// Source character (one byte)
    pub character: u8,
    /// Exactly [`CODE_WIDTH`] symbols over `{'0', '1'}`
    pub code: &'static str,
}

impl LookupEntry {
    /// Pair a character with its code.
    pub const fn new(character: u8, code: &'static str) -> Self {
        Self { character, code }
    }
}

/// Read-only view over a fixed sequence of [`LookupEntry`].
///
/// # Invariants
/// - Every character appears in at most one entry
/// - Every code is unique and exactly [`CODE_WIDTH`] binary symbols long
///
/// [`LookupTable::standard`] satisfies these; tables built with
/// [`LookupTable::new`] can be checked with [`LookupTable::validate`].
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    entries: &'static [LookupEntry],
}

static STANDARD_ENTRIES: [LookupEntry; 98] = [
    LookupEntry::new(b'\t', "0001001"),
    LookupEntry::new(b'\n', "0001010"),
    LookupEntry::new(b'\r', "0001101"),
    LookupEntry::new(b' ', "0100000"),
    LookupEntry::new(b'!', "0100001"),
    LookupEntry::new(b'"', "0100010"),
    LookupEntry::new(b'#', "0100011"),
    LookupEntry::new(b'$', "0100100"),
    LookupEntry::new(b'%', "0100101"),
    LookupEntry::new(b'&', "0100110"),
    LookupEntry::new(b'\'', "0100111"),
    LookupEntry::new(b'(', "0101000"),
    LookupEntry::new(b')', "0101001"),
    LookupEntry::new(b'*', "0101010"),
    LookupEntry::new(b'+', "0101011"),
    LookupEntry::new(b',', "0101100"),
    LookupEntry::new(b'-', "0101101"),
    LookupEntry::new(b'.', "0101110"),
    LookupEntry::new(b'/', "0101111"),
    LookupEntry::new(b'0', "0110000"),
    LookupEntry::new(b'1', "0110001"),
    LookupEntry::new(b'2', "0110010"),
    LookupEntry::new(b'3', "0110011"),
    LookupEntry::new(b'4', "0110100"),
    LookupEntry::new(b'5', "0110101"),
    LookupEntry::new(b'6', "0110110"),
    LookupEntry::new(b'7', "0110111"),
    LookupEntry::new(b'8', "0111000"),
    LookupEntry::new(b'9', "0111001"),
    LookupEntry::new(b':', "0111010"),
    LookupEntry::new(b';', "0111011"),
    LookupEntry::new(b'<', "0111100"),
    LookupEntry::new(b'=', "0111101"),
    LookupEntry::new(b'>', "0111110"),
    LookupEntry::new(b'?', "0111111"),
    LookupEntry::new(b'@', "1000000"),
    LookupEntry::new(b'A', "1000001"),
    LookupEntry::new(b'B', "1000010"),
    LookupEntry::new(b'C', "1000011"),
    LookupEntry::new(b'D', "1000100"),
    LookupEntry::new(b'E', "1000101"),
    LookupEntry::new(b'F', "1000110"),
    LookupEntry::new(b'G', "1000111"),
    LookupEntry::new(b'H', "1001000"),
    LookupEntry::new(b'I', "1001001"),
    LookupEntry::new(b'J', "1001010"),
    LookupEntry::new(b'K', "1001011"),
    LookupEntry::new(b'L', "1001100"),
    LookupEntry::new(b'M', "1001101"),
    LookupEntry::new(b'N', "1001110"),
    LookupEntry::new(b'O', "1001111"),
    LookupEntry::new(b'P', "1010000"),
    LookupEntry::new(b'Q', "1010001"),
    LookupEntry::new(b'R', "1010010"),
    LookupEntry::new(b'S', "1010011"),
    LookupEntry::new(b'T', "1010100"),
    LookupEntry::new(b'U', "1010101"),
    LookupEntry::new(b'V', "1010110"),
    LookupEntry::new(b'W', "1010111"),
    LookupEntry::new(b'X', "1011000"),
    LookupEntry::new(b'Y', "1011001"),
    LookupEntry::new(b'Z', "1011010"),
    LookupEntry::new(b'[', "1011011"),
    LookupEntry::new(b'\\', "1011100"),
    LookupEntry::new(b']', "1011101"),
    LookupEntry::new(b'^', "1011110"),
    LookupEntry::new(b'_', "1011111"),
    LookupEntry::new(b'`', "1100000"),
    LookupEntry::new(b'a', "1100001"),
    LookupEntry::new(b'b', "1100010"),
    LookupEntry::new(b'c', "1100011"),
    LookupEntry::new(b'd', "1100100"),
    LookupEntry::new(b'e', "1100101"),
    LookupEntry::new(b'f', "1100110"),
    LookupEntry::new(b'g', "1100111"),
    LookupEntry::new(b'h', "1101000"),
    LookupEntry::new(b'i', "1101001"),
    LookupEntry::new(b'j', "1101010"),
    LookupEntry::new(b'k', "1101011"),
    LookupEntry::new(b'l', "1101100"),
    LookupEntry::new(b'm', "1101101"),
    LookupEntry::new(b'n', "1101110"),
    LookupEntry::new(b'o', "1101111"),
    LookupEntry::new(b'p', "1110000"),
    LookupEntry::new(b'q', "1110001"),
    LookupEntry::new(b'r', "1110010"),
    LookupEntry::new(b's', "1110011"),
    LookupEntry::new(b't', "1110100"),
    LookupEntry::new(b'u', "1110101"),
    LookupEntry::new(b'v', "1110110"),
    LookupEntry::new(b'w', "1110111"),
    LookupEntry::new(b'x', "1111000"),
    LookupEntry::new(b'y', "1111001"),
    LookupEntry::new(b'z', "1111010"),
    LookupEntry::new(b'{', "1111011"),
    LookupEntry::new(b'|', "1111100"),
    LookupEntry::new(b'}', "1111101"),
    LookupEntry::new(b'~', "1111110"),
];

static STANDARD: LookupTable = LookupTable::new(&STANDARD_ENTRIES);

impl LookupTable {
    /// Wrap a static entry sequence.
    pub const fn new(entries: &'static [LookupEntry]) -> Self {
        Self { entries }
    }

    /// The process-wide table used by the codec.
    pub fn standard() -> &'static LookupTable {
        &STANDARD
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &'static [LookupEntry] {
        self.entries
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'static, LookupEntry> {
        self.entries.iter()
    }

    /// Find the code for `character`, if the table has one.
    pub fn find_code_for_character(&self, character: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.character == character)
            .map(|entry| entry.code)
    }

    /// Find the character for `code`, if the table has one.
    ///
    /// This is a plain string comparison; the caller is expected to have
    /// checked the length and alphabet of `code` already.
    pub fn find_character_for_code(&self, code: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.character)
    }

    /// Check the entry invariants, reporting the first violation found.
    ///
    /// # Errors
    /// - `TableError::CodeLength` if a code is not [`CODE_WIDTH`] symbols
    /// - `TableError::CodeAlphabet` if a code has a symbol other than '0'/'1'
    /// - `TableError::DuplicateCharacter` / `TableError::DuplicateCode` if a
    ///   key appears twice
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.code.len() != CODE_WIDTH {
                return Err(TableError::CodeLength {
                    index,
                    code: entry.code,
                    expected: CODE_WIDTH,
                    actual: entry.code.len(),
                });
            }

            if !entry.code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(TableError::CodeAlphabet {
                    index,
                    code: entry.code,
                });
            }

            // Only look backwards so each pair is reported once
            for (first, earlier) in self.entries[..index].iter().enumerate() {
                if earlier.character == entry.character {
                    return Err(TableError::DuplicateCharacter {
                        character: entry.character,
                        first,
                        second: index,
                    });
                }
                if earlier.code == entry.code {
                    return Err(TableError::DuplicateCode {
                        code: entry.code,
                        first,
                        second: index,
                    });
                }
            }
        }

        Ok(())
    }
}

impl IntoIterator for &LookupTable {
    type Item = &'static LookupEntry;
    type IntoIter = std::slice::Iter<'static, LookupEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(LookupTable::standard().validate(), Ok(()));
    }

    #[test]
    fn test_standard_table_size() {
        let table = LookupTable::standard();
        assert_eq!(table.size(), 98);
        assert_eq!(table.entries().len(), table.size());
    }

    #[test]
    fn test_codes_are_ascii_values() {
        for entry in LookupTable::standard() {
            let value = u8::from_str_radix(entry.code, 2).unwrap();
            assert_eq!(value, entry.character);
        }
    }

    #[test]
    fn test_ordered_by_code() {
        let entries = LookupTable::standard().entries();
        for pair in entries.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn test_find_code_for_character() {
        let table = LookupTable::standard();
        assert_eq!(table.find_code_for_character(b'A'), Some("1000001"));
        assert_eq!(table.find_code_for_character(b' '), Some("0100000"));
        assert_eq!(table.find_code_for_character(b'\n'), Some("0001010"));
        assert_eq!(table.find_code_for_character(b'~'), Some("1111110"));
    }

    #[test]
    fn test_find_code_missing() {
        let table = LookupTable::standard();
        assert_eq!(table.find_code_for_character(0x00), None);
        assert_eq!(table.find_code_for_character(0x7f), None);
        assert_eq!(table.find_code_for_character(0xe9), None);
    }

    #[test]
    fn test_find_character_for_code() {
        let table = LookupTable::standard();
        assert_eq!(table.find_character_for_code("1111010"), Some(b'z'));
        assert_eq!(table.find_character_for_code("0110101"), Some(b'5'));
        assert_eq!(table.find_character_for_code("0001001"), Some(b'\t'));
    }

    #[test]
    fn test_find_character_missing() {
        let table = LookupTable::standard();
        assert_eq!(table.find_character_for_code("0000000"), None);
        assert_eq!(table.find_character_for_code("1111111"), None);
        // No alphabet or length checks at this level, only equality
        assert_eq!(table.find_character_for_code("10000012"), None);
        assert_eq!(table.find_character_for_code(""), None);
    }

    #[test]
    fn test_validate_short_code() {
        static ENTRIES: [LookupEntry; 2] = [
            LookupEntry::new(b'a', "1100001"),
            LookupEntry::new(b'b', "110001"),
        ];
        let err = LookupTable::new(&ENTRIES).validate().unwrap_err();
        assert_eq!(
            err,
            TableError::CodeLength {
                index: 1,
                code: "110001",
                expected: 7,
                actual: 6,
            }
        );
    }

    #[test]
    fn test_validate_bad_alphabet() {
        static ENTRIES: [LookupEntry; 1] = [LookupEntry::new(b'a', "11000x1")];
        let err = LookupTable::new(&ENTRIES).validate().unwrap_err();
        assert!(matches!(err, TableError::CodeAlphabet { index: 0, .. }));
    }

    #[test]
    fn test_validate_duplicates() {
        static SAME_CHAR: [LookupEntry; 3] = [
            LookupEntry::new(b'a', "1100001"),
            LookupEntry::new(b'b', "1100010"),
            LookupEntry::new(b'a', "1100011"),
        ];
        let err = LookupTable::new(&SAME_CHAR).validate().unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateCharacter {
                character: b'a',
                first: 0,
                second: 2,
            }
        );

        static SAME_CODE: [LookupEntry; 2] = [
            LookupEntry::new(b'a', "1100001"),
            LookupEntry::new(b'b', "1100001"),
        ];
        let err = LookupTable::new(&SAME_CODE).validate().unwrap_err();
        assert!(matches!(err, TableError::DuplicateCode { first: 0, second: 1, .. }));
    }

    #[test]
    fn test_empty_table() {
        static EMPTY: [LookupEntry; 0] = [];
        let table = LookupTable::new(&EMPTY);
        assert_eq!(table.size(), 0);
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(table.find_code_for_character(b'A'), None);
    }
}
