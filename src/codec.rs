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

//! # Bech32 strings
//!
//! Encoding and decoding of the general checksummed base32 format.
//!
//! A bech32 string is at most 90 characters long and consists of:
//!
//! - The human-readable part, 1 to 83 US-ASCII characters in the range
//!   `[33, 126]`.
//! - The separator, which is always "1". Since the HRP may itself contain a
//!   "1", the rightmost one is the separator.
//! - The data part, at least 6 characters from the bech32 charset, the last
//!   six of which are the checksum.
//!
//! The whole string is either upper or lower case. Characters without case
//! (digits, punctuation) never cause a mixed-case error.

use std::fmt;

use crate::charset;
use crate::checksum::{EncodingKind, Engine, CHECKSUM_LENGTH};
use crate::error::{Error, LengthError};

/// Human-readable part and data part separator
const SEP: char = '1';

/// Shortest valid string: a one-character HRP, the separator and a checksum.
pub const MIN_LENGTH: usize = 8;

/// Longest valid string.
pub const MAX_LENGTH: usize = 90;

/// The outputs of a successful [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// The human-readable part, folded to lower case.
    pub hrp: String,
    /// The data symbols (each 0..=31), without the checksum.
    pub data: Vec<u8>,
    /// The checksum variant the string was valid under. Never
    /// [`EncodingKind::None`].
    pub kind: EncodingKind,
}

/// Checks an HRP for encoding, and that it fits with `data_len` symbols.
pub(crate) fn check_encode(hrp: &str, data_len: usize) -> Result<(), Error> {
    if hrp.is_empty() {
        return Err(LengthError::EmptyHrp.into());
    }
    for c in hrp.chars() {
        if !c.is_ascii() || (c as u32) < 33 || (c as u32) > 126 || c.is_ascii_uppercase() {
            return Err(Error::InvalidCharacter(c));
        }
    }
    let len = hrp.len() + 1 + data_len + CHECKSUM_LENGTH;
    if len > MAX_LENGTH {
        return Err(LengthError::StringTooLong(len).into());
    }
    Ok(())
}

/// Encode a bech32 payload to any [`fmt::Write`] sink.
///
/// Nothing is written unless the whole string is valid, so a failed check
/// leaves the writer untouched. A failing writer is reported as
/// [`Error::Fmt`].
///
/// # Panics
///
/// If `kind` is [`EncodingKind::None`].
pub fn encode_to_fmt<W: fmt::Write>(
    w: &mut W,
    data: &[u8],
    hrp: &str,
    kind: EncodingKind,
) -> Result<(), Error> {
    if kind == EncodingKind::None {
        panic!("cannot encode with EncodingKind::None");
    }
    check_encode(hrp, data.len())?;
    if let Some(&bad) = data.iter().find(|&&fe| fe > 31) {
        return Err(Error::InvalidSymbol(bad));
    }

    let mut engine = Engine::new();
    engine.input_hrp(hrp.as_bytes());
    for &fe in data {
        engine.input_fe(fe);
    }
    let checksum = engine.checksum(kind);

    write_parts(w, hrp, data, &checksum)?;
    Ok(())
}

fn write_parts<W: fmt::Write>(w: &mut W, hrp: &str, data: &[u8], checksum: &[u8]) -> fmt::Result {
    w.write_str(hrp)?;
    w.write_char(SEP)?;
    for &fe in data.iter().chain(checksum) {
        w.write_char(charset::to_char(fe))?;
    }
    Ok(())
}

/// Encode data symbols (each 0..=31) under `hrp` with the given checksum
/// variant.
///
/// The HRP must be lower case; callers holding an upper-case HRP should
/// normalise it first and upper-case the result if they want an upper-case
/// string.
///
/// # Panics
///
/// If `kind` is [`EncodingKind::None`].
pub fn encode(data: &[u8], hrp: &str, kind: EncodingKind) -> Result<String, Error> {
    let mut ret = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    encode_to_fmt(&mut ret, data, hrp, kind)?;
    Ok(ret)
}

/// Decode a bech32 or bech32m string into its lower-cased HRP, its data
/// symbols and the checksum variant it is valid under.
pub fn decode(s: &str) -> Result<Decoded, Error> {
    // Ensure overall length is within bounds
    let len = s.len();
    if len < MIN_LENGTH {
        return Err(LengthError::StringTooShort(len).into());
    }
    if len > MAX_LENGTH {
        return Err(LengthError::StringTooLong(len).into());
    }

    // Split at separator
    let sep = s.rfind(SEP).ok_or(Error::MissingSeparator)?;
    let (raw_hrp, raw_data) = (&s[..sep], &s[sep + 1..]);
    if raw_hrp.is_empty() {
        return Err(LengthError::EmptyHrp.into());
    }
    if raw_data.len() < CHECKSUM_LENGTH {
        return Err(LengthError::ChecksumTooShort(raw_data.len()).into());
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut hrp = String::with_capacity(raw_hrp.len());
    for c in raw_hrp.chars() {
        // Valid subset of ASCII
        if !c.is_ascii() || (c as u32) < 33 || (c as u32) > 126 {
            return Err(Error::InvalidCharacter(c));
        }
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        }
        hrp.push(c.to_ascii_lowercase());
    }

    let mut data = Vec::with_capacity(raw_data.len());
    for c in raw_data.chars() {
        let fe = charset::from_char(c).ok_or(Error::InvalidCharacter(c))?;
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        }
        data.push(fe);
    }

    // Ensure no mixed case
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }

    let mut engine = Engine::new();
    engine.input_hrp(hrp.as_bytes());
    for &fe in &data {
        engine.input_fe(fe);
    }
    let kind = engine.classify();
    if kind == EncodingKind::None {
        return Err(Error::ChecksumMismatch);
    }

    // Remove checksum from data payload
    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok(Decoded { hrp, data, kind })
}
