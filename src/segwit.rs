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

//! # Segwit addresses
//!
//! Witness version and witness program packing on top of the bech32 codec.
//! Version 0 programs use bech32 ([BIP-173]); versions 1 to 16 use bech32m
//! ([BIP-350]).
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::fmt;
use std::str::FromStr;

use crate::checksum::EncodingKind;
use crate::codec;
use crate::convert;
use crate::error::{Error, LengthError};

/// Highest witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Shortest witness program, in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// Longest witness program, in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Most data symbols a segwit address can carry: the version plus 40 bytes
/// worth of 5-bit groups.
const MAX_DATA_SYMBOLS: usize = 65;

/// Checks the witness version and program length rules.
fn check_witness(version: u8, program_len: usize) -> Result<(), Error> {
    if version > MAX_WITNESS_VERSION {
        return Err(Error::InvalidWitnessVersion(version));
    }
    if program_len < MIN_PROGRAM_LENGTH || program_len > MAX_PROGRAM_LENGTH {
        return Err(Error::InvalidWitnessProgramLength(program_len));
    }
    if version == 0 && program_len != 20 && program_len != 32 {
        return Err(Error::InvalidSegwitV0ProgramLength(program_len));
    }
    Ok(())
}

/// A decoded, or validated, segwit address.
///
/// Every value of this type encodes successfully: [`SegwitAddress::new`]
/// checks the HRP along with the witness, and the checksum variant is always
/// derived from the witness version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegwitAddress {
    hrp: String,
    version: u8,
    program: Vec<u8>,
    kind: EncodingKind,
}

impl SegwitAddress {
    /// Creates an address after checking the HRP, the version and the
    /// program length.
    ///
    /// This is the non-panicking counterpart of [`encode_segwit`].
    pub fn new(hrp: &str, version: u8, program: Vec<u8>) -> Result<SegwitAddress, Error> {
        check_witness(version, program.len())?;
        codec::check_encode(hrp, 1 + symbol_count(program.len()))?;
        Ok(SegwitAddress {
            hrp: hrp.to_owned(),
            version,
            program,
            kind: EncodingKind::for_witness_version(version),
        })
    }

    /// The human-readable part, in lower case.
    #[inline]
    pub fn hrp(&self) -> &str { &self.hrp }

    /// The witness version, 0 to 16 inclusive.
    #[inline]
    pub fn witness_version(&self) -> u8 { self.version }

    /// The witness program.
    #[inline]
    pub fn program(&self) -> &[u8] { &self.program }

    /// The checksum variant, implied by the witness version.
    #[inline]
    pub fn kind(&self) -> EncodingKind { self.kind }

    /// The version symbol followed by the program as 5-bit symbols.
    fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + symbol_count(self.program.len()));
        data.push(self.version);
        data.extend(convert::to_base32(&self.program));
        data
    }

    /// Encodes the address as a lower-case string.
    pub fn encode(&self) -> Result<String, Error> { codec::encode(&self.data(), &self.hrp, self.kind) }
}

/// Number of 5-bit symbols needed for `len` bytes.
fn symbol_count(len: usize) -> usize { (len * 8 + 4) / 5 }

impl fmt::Display for SegwitAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        codec::encode_to_fmt(f, &self.data(), &self.hrp, self.kind).map_err(|_| fmt::Error)
    }
}

impl FromStr for SegwitAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<SegwitAddress, Error> { decode_segwit(s) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SegwitAddress {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = SegwitAddress;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a segwit address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SegwitAddress::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SegwitAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

/// Encode a witness program as a segwit address.
///
/// # Panics
///
/// If `version` is above 16, or the program is shorter than 2 or longer
/// than 40 bytes, or a version 0 program is neither 20 nor 32 bytes. These
/// are properties of the caller's own values rather than of untrusted input;
/// use [`SegwitAddress::new`] to check them without panicking.
pub fn encode_segwit(program: &[u8], hrp: &str, version: u8) -> Result<String, Error> {
    if let Err(e) = check_witness(version, program.len()) {
        panic!("invalid witness program: {}", e);
    }
    SegwitAddress::new(hrp, version, program.to_vec())?.encode()
}

/// Decode a segwit address, checking that its checksum variant matches its
/// witness version.
pub fn decode_segwit(s: &str) -> Result<SegwitAddress, Error> {
    let codec::Decoded { hrp, data, kind } = codec::decode(s)?;

    if data.len() > MAX_DATA_SYMBOLS {
        return Err(LengthError::TooManySymbols(data.len()).into());
    }
    let (&version, program) = data.split_first().ok_or(Error::MissingWitnessVersion)?;
    if version > MAX_WITNESS_VERSION {
        return Err(Error::InvalidWitnessVersion(version));
    }
    match (version, kind) {
        (0, EncodingKind::Bech32) => {}
        (0, _) => return Err(Error::InvalidSegwitV0Encoding),
        (_, EncodingKind::Bech32m) => {}
        (_, _) => return Err(Error::InvalidWitnessEncoding),
    }

    let program = convert::from_base32(program)?;
    if program.len() < MIN_PROGRAM_LENGTH || program.len() > MAX_PROGRAM_LENGTH {
        return Err(Error::InvalidWitnessProgramLength(program.len()));
    }

    Ok(SegwitAddress { hrp, version, program, kind })
}
