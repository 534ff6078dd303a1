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

//! Contains error types and other error handling tools.

use std::{error, fmt};

use crate::EncodingKind;

/// Formats an error message, leaving the nested error to be reported through
/// [`std::error::Error::source`].
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {
        {
            let _ = &$source;   // Prevents clippy warnings.
            write!($writer, $string $(, $args)*)
        }
    }
}

/// An error encoding or decoding a bech32 string or a segwit address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A character outside the allowed HRP range, an upper-case HRP passed to
    /// an encoder, or a data character outside the bech32 charset.
    InvalidCharacter(char),
    /// A data value that does not fit in the expected number of bits.
    InvalidSymbol(u8),
    /// The string mixes upper and lower case letters.
    MixedCase,
    /// The string does not contain the `1` separator.
    MissingSeparator,
    /// The string, HRP or data part violates a length bound.
    LengthOutOfRange(LengthError),
    /// The checksum matches neither bech32 nor bech32m.
    ChecksumMismatch,
    /// A segwit address with no data symbols at all.
    MissingWitnessVersion,
    /// Witness version must be 0 to 16 inclusive.
    InvalidWitnessVersion(u8),
    /// A v1+ witness program must use bech32m not bech32.
    InvalidWitnessEncoding,
    /// A v0 witness program must use bech32 not bech32m.
    InvalidSegwitV0Encoding,
    /// The witness program must be between 2 and 40 bytes in length.
    InvalidWitnessProgramLength(usize),
    /// A v0 witness program must be either of length 20 or 32.
    InvalidSegwitV0ProgramLength(usize),
    /// Leftover bits of an unpadded conversion are invalid.
    PaddingViolation(PaddingError),
    /// The writer passed to an encoder failed.
    Fmt,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidCharacter(c) => write!(f, "invalid character (code={})", c.escape_unicode()),
            Error::InvalidSymbol(v) => write!(f, "data value {} does not fit in the symbol width", v),
            Error::MixedCase => f.write_str("mixed-case strings not allowed"),
            Error::MissingSeparator => f.write_str("missing human-readable separator, \"1\""),
            Error::LengthOutOfRange(ref e) => write_err!(f, "length out of range"; e),
            Error::ChecksumMismatch => f.write_str("invalid checksum"),
            Error::MissingWitnessVersion => f.write_str("the witness version symbol is missing"),
            Error::InvalidWitnessVersion(v) => write!(f, "invalid witness script version: {}", v),
            Error::InvalidWitnessEncoding => {
                f.write_str("v1+ witness program must use bech32m not bech32")
            }
            Error::InvalidSegwitV0Encoding => {
                f.write_str("v0 witness program must use bech32 not bech32m")
            }
            Error::InvalidWitnessProgramLength(len) => write!(
                f,
                "the witness program must be between 2 and 40 bytes in length, not {}",
                len
            ),
            Error::InvalidSegwitV0ProgramLength(len) => {
                write!(f, "a v0 witness program must be length 20 or 32, not {}", len)
            }
            Error::PaddingViolation(ref e) => write_err!(f, "invalid padding"; e),
            Error::Fmt => f.write_str("writing the encoded string failed"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::LengthOutOfRange(ref e) => Some(e),
            Error::PaddingViolation(ref e) => Some(e),
            Error::InvalidCharacter(_)
            | Error::InvalidSymbol(_)
            | Error::MixedCase
            | Error::MissingSeparator
            | Error::ChecksumMismatch
            | Error::MissingWitnessVersion
            | Error::InvalidWitnessVersion(_)
            | Error::InvalidWitnessEncoding
            | Error::InvalidSegwitV0Encoding
            | Error::InvalidWitnessProgramLength(_)
            | Error::InvalidSegwitV0ProgramLength(_)
            | Error::Fmt => None,
        }
    }
}

impl From<LengthError> for Error {
    #[inline]
    fn from(e: LengthError) -> Self { Error::LengthOutOfRange(e) }
}

impl From<fmt::Error> for Error {
    #[inline]
    fn from(_: fmt::Error) -> Self { Error::Fmt }
}

impl From<PaddingError> for Error {
    #[inline]
    fn from(e: PaddingError) -> Self { Error::PaddingViolation(e) }
}

/// A length bound violated while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LengthError {
    /// The whole string is shorter than 8 characters.
    StringTooShort(usize),
    /// The whole string (or the string an encoder would produce) is longer
    /// than 90 characters.
    StringTooLong(usize),
    /// The human-readable part is empty.
    EmptyHrp,
    /// Fewer than 6 characters follow the separator.
    ChecksumTooShort(usize),
    /// A segwit address carries more than 65 data symbols.
    TooManySymbols(usize),
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LengthError::StringTooShort(n) => {
                write!(f, "string of {} characters is shorter than the minimum of 8", n)
            }
            LengthError::StringTooLong(n) => {
                write!(f, "string of {} characters is longer than the maximum of 90", n)
            }
            LengthError::EmptyHrp => f.write_str("the human-readable part is empty"),
            LengthError::ChecksumTooShort(n) => {
                write!(f, "only {} characters after the separator, the checksum needs 6", n)
            }
            LengthError::TooManySymbols(n) => {
                write!(f, "{} data symbols exceed the segwit maximum of 65", n)
            }
        }
    }
}

impl error::Error for LengthError {}

/// Error validating the padding bits left over by an unpadded conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaddingError {
    /// The data payload has too many bits of padding.
    TooMuch,
    /// The data payload is padded with non-zero bits.
    NonZero,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PaddingError::TooMuch => f.write_str("the data payload has too many bits of padding"),
            PaddingError::NonZero => f.write_str("the data payload is padded with non-zero bits"),
        }
    }
}

impl error::Error for PaddingError {}

/// Error parsing an [`EncodingKind`] from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub(crate) String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown encoding kind {:?}, expected one of {}, {} or {}",
            self.0,
            EncodingKind::None,
            EncodingKind::Bech32,
            EncodingKind::Bech32m,
        )
    }
}

impl error::Error for ParseKindError {}
