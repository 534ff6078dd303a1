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

//! # Bit-width conversion
//!
//! Regroups a stream of `from_bits`-wide values into `to_bits`-wide values,
//! most significant bit first. Used 8 -> 5 when encoding and 5 -> 8 when
//! decoding.

use crate::error::{Error, PaddingError};

/// Converts `data`, whose values are `from_bits` wide, into `to_bits` wide
/// values.
///
/// With `pad` set, leftover bits are left-aligned and zero-filled into one
/// final value. Without it the leftover must be shorter than `from_bits` and
/// all zero, otherwise a [`PaddingError`] is returned; nothing is silently
/// dropped.
///
/// # Panics
///
/// If either width is outside 1..=8.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>, Error> {
    assert!((1..=8).contains(&from_bits), "invalid input width {}", from_bits);
    assert!((1..=8).contains(&to_bits), "invalid output width {}", to_bits);

    if let Some(&value) = data.iter().find(|&&v| u32::from(v) >> from_bits != 0) {
        return Err(Error::InvalidSymbol(value));
    }

    let (ret, leftover) = regroup(data, from_bits, to_bits, pad);
    if let Some((acc, bits)) = leftover {
        if bits >= from_bits {
            return Err(PaddingError::TooMuch.into());
        }
        if (acc << (to_bits - bits)) & ((1 << to_bits) - 1) != 0 {
            return Err(PaddingError::NonZero.into());
        }
    }
    Ok(ret)
}

/// Regroups values already known to fit in `from_bits`.
///
/// With `pad` set the remainder is emitted as one final zero-filled value.
/// Otherwise a non-empty remainder is returned as `(accumulator, bit count)`
/// for the caller to judge.
fn regroup(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> (Vec<u8>, Option<(u32, u32)>) {
    let max_v: u32 = (1 << to_bits) - 1;
    // Bits older than this can never be emitted again.
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity((data.len() * from_bits as usize + to_bits as usize - 1) / to_bits as usize);
    for &value in data {
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & max_v) as u8);
        }
    }

    if bits == 0 {
        (ret, None)
    } else if pad {
        ret.push(((acc << (to_bits - bits)) & max_v) as u8);
        (ret, None)
    } else {
        (ret, Some((acc, bits)))
    }
}

/// Converts bytes into 5-bit symbols, padding the last one.
pub fn to_base32(data: &[u8]) -> Vec<u8> { regroup(data, 8, 5, true).0 }

/// Converts 5-bit symbols back into bytes, rejecting invalid padding.
pub fn from_base32(data: &[u8]) -> Result<Vec<u8>, Error> { convert_bits(data, 5, 8, false) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_symbols() {
        let program = [
            0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4, 0x54, 0x94, 0x1c, 0x45, 0xd1, 0xb3, 0xa3,
            0x23, 0xf1, 0x43, 0x3b, 0xd6,
        ];
        let expected = vec![
            14, 20, 15, 7, 13, 26, 0, 25, 18, 6, 11, 13, 8, 21, 4, 20, 3, 17, 2, 29, 3, 12, 29, 3, 4,
            15, 24, 20, 6, 14, 30, 22,
        ];
        assert_eq!(convert_bits(&program, 8, 5, true).unwrap(), expected);
        assert_eq!(to_base32(&program), expected);
        assert_eq!(from_base32(&expected).unwrap(), program.to_vec());
    }

    #[test]
    fn padding() {
        // 0xff -> 11111 111(00)
        assert_eq!(to_base32(&[0xff]), vec![31, 28]);
        assert_eq!(from_base32(&[31, 28]).unwrap(), vec![0xff]);
        // The two padding bits must be zero.
        assert_eq!(from_base32(&[31, 29]), Err(Error::PaddingViolation(PaddingError::NonZero)));
        // A whole extra symbol is more padding than a byte can leave behind.
        assert_eq!(from_base32(&[31, 28, 0]), Err(Error::PaddingViolation(PaddingError::TooMuch)));
        assert_eq!(from_base32(&[0]), Err(Error::PaddingViolation(PaddingError::TooMuch)));
        assert_eq!(from_base32(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(to_base32(&[]), Vec::<u8>::new());
    }

    #[test]
    fn value_too_wide() {
        assert_eq!(convert_bits(&[32], 5, 8, false), Err(Error::InvalidSymbol(32)));
        assert_eq!(convert_bits(&[1, 2, 4], 2, 8, true), Err(Error::InvalidSymbol(4)));
    }

    #[test]
    fn other_widths() {
        assert_eq!(convert_bits(&[0b1011_0110], 8, 1, false).unwrap(), vec![1, 0, 1, 1, 0, 1, 1, 0]);
        assert_eq!(convert_bits(&[1, 0, 1, 1, 0, 1, 1, 0], 1, 8, false).unwrap(), vec![0b1011_0110]);
        assert_eq!(convert_bits(&[0xab, 0xcd], 8, 4, false).unwrap(), vec![0xa, 0xb, 0xc, 0xd]);
        assert_eq!(convert_bits(&[0b101], 3, 2, true).unwrap(), vec![0b10, 0b10]);
    }

    #[test]
    fn long_input_does_not_overflow() {
        let data = vec![0xa5; 1000];
        let symbols = to_base32(&data);
        assert_eq!(symbols.len(), 1600);
        assert_eq!(symbols, convert_bits(&data, 8, 5, true).unwrap());
        assert_eq!(from_base32(&symbols).unwrap(), data);
    }

    #[test]
    #[should_panic(expected = "invalid output width")]
    fn rejects_wide_output() { let _ = convert_bits(&[1], 8, 9, true); }

    #[test]
    fn round_trips_every_length() {
        for len in 0..=64u8 {
            let data: Vec<u8> = (0..len).map(|i| i.wrapping_mul(37).wrapping_add(len)).collect();
            assert_eq!(from_base32(&to_base32(&data)).unwrap(), data, "length {}", len);
        }
    }
}
