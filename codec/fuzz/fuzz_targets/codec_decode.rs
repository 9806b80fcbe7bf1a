#![no_main]

use arbitrary::Arbitrary;
use blobwire_codec::{blob, int, stream, string, Config};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    big_endian: bool,
    variable: bool,
    limit: u16,
    data: &'a [u8],
}

fuzz_target!(|input: FuzzInput| {
    let cfg = Config::standard().with_limit(input.limit as u64);
    let cfg = if input.big_endian {
        cfg.with_big_endian()
    } else {
        cfg
    };
    let cfg = if input.variable {
        cfg.with_variable_encoding()
    } else {
        cfg
    };

    // Decoding untrusted input must never panic, and anything accepted must re-encode exactly.
    if let Ok(payload) = blob::deserialize(input.data, &cfg) {
        assert!(payload.len() as u64 <= cfg.limit());
        if !input.variable {
            assert_eq!(blob::serialize(&payload, &cfg).unwrap(), input.data);
        }
    }
    let _ = string::deserialize_string(input.data, &cfg);
    let _ = int::deserialize_i32(input.data, &cfg);
    let _ = int::deserialize_u32(input.data, &cfg);
    let _ = int::deserialize_i64(input.data, &cfg);
    let _ = int::deserialize_u64(input.data, &cfg);
    let _ = stream::read_record(&mut &input.data[..], &cfg);
});
