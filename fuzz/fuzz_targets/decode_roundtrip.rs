extern crate bech32_codec;

use bech32_codec::{decode, decode_segwit, encode, encode_segwit};

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok(d) = decode(s) {
        let reencoded = encode(&d.data, &d.hrp, d.kind).unwrap();
        assert!(reencoded.eq_ignore_ascii_case(s));
    }

    if let Ok(addr) = decode_segwit(s) {
        if addr.witness_version() != 0 || addr.program().len() == 20 || addr.program().len() == 32 {
            let reencoded = encode_segwit(addr.program(), addr.hrp(), addr.witness_version()).unwrap();
            assert!(reencoded.eq_ignore_ascii_case(s));
            assert_eq!(addr.to_string(), reencoded);
        }
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}
