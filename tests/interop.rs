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

//! Cross-checks against the `bech32` and `bitcoin` crates.

use std::convert::TryFrom;
use std::str::FromStr;

use bech32::{Fe32, Hrp};
use bitcoin::address::NetworkUnchecked;
use bitcoin::hashes::{hash160, Hash};
use bitcoin::hex::FromHex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use bech32_codec::{decode, decode_segwit, encode, encode_segwit, to_base32, EncodingKind, SegwitAddress};

fn random_program<R: Rng>(rng: &mut R, version: u8) -> Vec<u8> {
    let len = if version == 0 {
        if rng.gen() { 20 } else { 32 }
    } else {
        rng.gen_range(2..=40)
    };
    let mut program = vec![0u8; len];
    rng.fill(&mut program[..]);
    program
}

#[test]
fn p2wpkh_from_pubkey() {
    let pk = Vec::<u8>::from_hex("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798")
        .unwrap();
    let program = hash160::Hash::hash(&pk).to_byte_array();

    let addr = encode_segwit(&program, "bc", 0).unwrap();
    assert_eq!(addr, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
}

#[test]
fn segwit_matches_bech32_crate() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x6265_6368_3332);
    for hrp in ["bc", "tb", "bcrt"].iter() {
        for _ in 0..200 {
            let version = rng.gen_range(0..=16u8);
            let program = random_program(&mut rng, version);

            let ours = encode_segwit(&program, hrp, version).unwrap();
            let theirs = bech32::segwit::encode(
                Hrp::parse(hrp).unwrap(),
                Fe32::try_from(version).unwrap(),
                &program,
            )
            .unwrap();
            assert_eq!(ours, theirs);

            let (their_hrp, their_version, their_program) = bech32::segwit::decode(&ours).unwrap();
            assert_eq!(their_hrp.to_lowercase(), *hrp);
            assert_eq!(their_version.to_u8(), version);
            assert_eq!(their_program, program);

            let decoded = decode_segwit(&ours.to_ascii_uppercase()).unwrap();
            assert_eq!(decoded, SegwitAddress::new(hrp, version, program).unwrap());
        }
    }
}

#[test]
fn plain_bech32m_matches_bech32_crate() {
    let mut rng = ChaCha20Rng::seed_from_u64(350);
    for _ in 0..200 {
        // keep the whole string within 90 characters
        let mut bytes = vec![0u8; rng.gen_range(0..=48)];
        rng.fill(&mut bytes[..]);

        let ours = encode(&to_base32(&bytes), "test", EncodingKind::Bech32m).unwrap();
        let theirs = bech32::encode::<bech32::Bech32m>(Hrp::parse("test").unwrap(), &bytes).unwrap();
        assert_eq!(ours, theirs);

        let ours = encode(&to_base32(&bytes), "test", EncodingKind::Bech32).unwrap();
        let theirs = bech32::encode::<bech32::Bech32>(Hrp::parse("test").unwrap(), &bytes).unwrap();
        assert_eq!(ours, theirs);

        let (_, their_bytes) = bech32::decode(&ours).unwrap();
        assert_eq!(their_bytes, bytes);
    }
}

#[test]
fn script_pubkeys_match_bitcoin() {
    let mut rng = ChaCha20Rng::seed_from_u64(173);
    for _ in 0..100 {
        let version = rng.gen_range(0..=16u8);
        let program = random_program(&mut rng, version);
        let s = encode_segwit(&program, "bc", version).unwrap();

        let address = bitcoin::Address::<NetworkUnchecked>::from_str(&s).unwrap().assume_checked();
        let spk = address.script_pubkey();
        let spk = spk.as_bytes();
        assert_eq!(spk[0], if version == 0 { 0 } else { 0x50 + version });
        assert_eq!(usize::from(spk[1]), program.len());
        assert_eq!(&spk[2..], &program[..]);
    }
}

#[test]
fn random_strings_never_panic() {
    const ALPHABET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7lQPZRY9X8GF2TVDW0S3JN54KHCE6MUA7L1bio!~ ";
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..2000 {
        let len = rng.gen_range(0..100);
        let s: String =
            (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect();
        if let Ok(d) = decode(&s) {
            assert_ne!(d.kind, EncodingKind::None);
            let reencoded = encode(&d.data, &d.hrp, d.kind).unwrap();
            assert!(reencoded.eq_ignore_ascii_case(&s));
        }
        let _ = decode_segwit(&s);
    }
}
