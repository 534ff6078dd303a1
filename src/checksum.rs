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

//! # Checksums
//!
//! The BCH code shared by bech32 ([BIP-173]) and bech32m ([BIP-350]). Both
//! variants run the same generator over the same input and differ only in
//! the constant the final residue is compared against.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Number of symbols in the checksum tail.
pub const CHECKSUM_LENGTH: usize = 6;

/// Generator coefficients
const GEN: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Residue of a valid bech32 string.
const BECH32_CONST: u32 = 1;

/// Residue of a valid bech32m string.
const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// The checksum variant of a bech32 string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncodingKind {
    /// No valid encoding was detected. Never the result of a successful decode.
    None,
    /// Bech32 encoding as defined in BIP173.
    Bech32,
    /// Bech32m encoding as defined in BIP350.
    Bech32m,
}

impl EncodingKind {
    /// The residue a string checksummed with this variant leaves behind.
    ///
    /// # Panics
    ///
    /// If called on [`EncodingKind::None`], which has no checksum.
    pub fn final_constant(self) -> u32 {
        match self {
            EncodingKind::Bech32 => BECH32_CONST,
            EncodingKind::Bech32m => BECH32M_CONST,
            EncodingKind::None => panic!("EncodingKind::None has no checksum constant"),
        }
    }

    /// Classifies a final residue, returning [`EncodingKind::None`] when it
    /// matches neither variant.
    pub fn from_residue(residue: u32) -> EncodingKind {
        match residue {
            BECH32_CONST => EncodingKind::Bech32,
            BECH32M_CONST => EncodingKind::Bech32m,
            _ => EncodingKind::None,
        }
    }

    /// The variant a segwit address of the given witness version must use.
    pub fn for_witness_version(version: u8) -> EncodingKind {
        if version == 0 {
            EncodingKind::Bech32
        } else {
            EncodingKind::Bech32m
        }
    }

    fn name(self) -> &'static str {
        match self {
            EncodingKind::None => "none",
            EncodingKind::Bech32 => "bech32",
            EncodingKind::Bech32m => "bech32m",
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for EncodingKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(EncodingKind::None),
            "bech32" => Ok(EncodingKind::Bech32),
            "bech32m" => Ok(EncodingKind::Bech32m),
            _ => Err(ParseKindError(s.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EncodingKind {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EncodingKind {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = EncodingKind;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("one of \"none\", \"bech32\" or \"bech32m\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                EncodingKind::from_str(v).map_err(E::custom)
            }
        }

        d.deserialize_str(Visitor)
    }
}

/// Turns bit `i` of `b` into an all-ones or all-zeroes mask.
#[inline]
fn broadcast(b: u32, i: u32) -> u32 {
    if (b >> i) & 1 == 1 {
        u32::MAX
    } else {
        0
    }
}

/// One round of the generator polynomial over GF(2).
///
/// The accumulator never exceeds 30 bits, so the shift cannot overflow.
#[inline]
pub fn polymod_step(pre: u32) -> u32 {
    let b = pre >> 25;
    ((pre & 0x01ff_ffff) << 5)
        ^ (broadcast(b, 0) & GEN[0])
        ^ (broadcast(b, 1) & GEN[1])
        ^ (broadcast(b, 2) & GEN[2])
        ^ (broadcast(b, 3) & GEN[3])
        ^ (broadcast(b, 4) & GEN[4])
}

/// Checksum accumulator for a single encode or decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    residue: u32,
}

impl Default for Engine {
    fn default() -> Self { Engine::new() }
}

impl Engine {
    /// Creates an engine seeded with 1.
    #[inline]
    pub fn new() -> Engine { Engine { residue: 1 } }

    /// Feeds the human-readable part: its high bits, the separator and its
    /// low bits.
    ///
    /// The bytes must already be lower case.
    pub fn input_hrp(&mut self, hrp: &[u8]) {
        for &b in hrp {
            self.residue = polymod_step(self.residue) ^ u32::from(b >> 5);
        }
        self.residue = polymod_step(self.residue);
        for &b in hrp {
            self.residue = polymod_step(self.residue) ^ u32::from(b & 0x1f);
        }
    }

    /// Feeds a single 5-bit symbol.
    #[inline]
    pub fn input_fe(&mut self, fe: u8) {
        debug_assert!(fe < 32, "symbol {} out of range", fe);
        self.residue = polymod_step(self.residue) ^ u32::from(fe);
    }

    /// The current value of the accumulator.
    #[inline]
    pub fn residue(&self) -> u32 { self.residue }

    /// Which variant, if any, the symbols fed so far (checksum included)
    /// are valid under.
    #[inline]
    pub fn classify(&self) -> EncodingKind { EncodingKind::from_residue(self.residue) }

    /// Computes the checksum symbols for the data fed so far, most
    /// significant group first.
    ///
    /// # Panics
    ///
    /// If `kind` is [`EncodingKind::None`].
    pub fn checksum(mut self, kind: EncodingKind) -> [u8; CHECKSUM_LENGTH] {
        for _ in 0..CHECKSUM_LENGTH {
            self.residue = polymod_step(self.residue);
        }
        let plm = self.residue ^ kind.final_constant();

        let mut ret = [0; CHECKSUM_LENGTH];
        for (i, fe) in ret.iter_mut().enumerate() {
            *fe = ((plm >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
        }
        ret
    }
}
