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

//! # Rust Bech32 Codec
//!
//! Encoding and decoding of bech32 ([BIP-173]) and bech32m ([BIP-350])
//! strings, and of the segwit addresses built on them.
//!
//! ```
//! use bech32_codec::{decode_segwit, encode_segwit, EncodingKind};
//!
//! let addr = decode_segwit("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
//! assert_eq!(addr.witness_version(), 0);
//! assert_eq!(addr.kind(), EncodingKind::Bech32);
//! assert_eq!(
//!     encode_segwit(addr.program(), addr.hrp(), addr.witness_version()).unwrap(),
//!     "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
//! );
//! ```
//!
//! Malformed strings are reported as [`Error`] values. Malformed arguments
//! to the encoders (a witness version above 16, a program of the wrong length,
//! [`EncodingKind::None`]) are programming errors and panic.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

#[cfg(feature = "serde")]
extern crate actual_serde as serde;

pub mod charset;
pub mod checksum;
mod codec;
pub mod convert;
mod error;
pub mod segwit;

// export everything at the top level so it can be used as `bech32_codec::decode` etc.
pub use crate::checksum::EncodingKind;
pub use crate::codec::{decode, encode, encode_to_fmt, Decoded, MAX_LENGTH, MIN_LENGTH};
pub use crate::convert::{convert_bits, from_base32, to_base32};
pub use crate::error::{Error, LengthError, PaddingError, ParseKindError};
pub use crate::segwit::{decode_segwit, encode_segwit, SegwitAddress};
