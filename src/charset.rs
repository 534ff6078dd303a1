// Rust Bech32 Codec
// Written by
//   The Bech32 Codec developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Charset
//!
//! The 32-symbol bech32 alphabet and its inverse.

/// Encoding character set. Maps data value -> char
pub const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31]
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// Returns the character for a 5-bit value.
///
/// # Panics
///
/// If `value` is 32 or larger.
#[inline]
pub fn to_char(value: u8) -> char { CHARSET[usize::from(value)] }

/// Returns the 5-bit value of a charset character, case-insensitively.
///
/// Any character outside ASCII, or inside it without a mapping, yields `None`.
#[inline]
pub fn from_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        -1 => None,
        v => Some(v as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_table_matches_charset() {
        for (value, &c) in CHARSET.iter().enumerate() {
            assert_eq!(from_char(c), Some(value as u8));
            assert_eq!(from_char(c.to_ascii_uppercase()), Some(value as u8));
            assert_eq!(to_char(value as u8), c);
        }
        let mapped = (0u8..128).filter(|&b| from_char(char::from(b)).is_some()).count();
        // 32 lower-case symbols, 23 of them letters with an upper-case twin
        assert_eq!(mapped, 32 + 23);
    }

    #[test]
    fn excluded_characters() {
        for c in ['1', 'b', 'i', 'o', 'B', 'I', 'O', ' ', '\u{7f}', '\u{80}', '\u{ff}', 'é'].iter() {
            assert_eq!(from_char(*c), None, "{:?} should not map", c);
        }
    }
}
