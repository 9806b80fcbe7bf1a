#![no_main]

use arbitrary::Arbitrary;
use blobwire_codec::{blob, int, length, stream, string, Config, Error};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzConfig {
    big_endian: bool,
    variable: bool,
    width: u8,
    limit: u32,
}

impl FuzzConfig {
    fn build(&self) -> Config {
        let width = [1, 2, 4, 8][(self.width % 4) as usize];
        let cfg = Config::standard()
            .with_fixed_width(width)
            .expect("width is valid")
            .with_limit(self.limit as u64);
        let cfg = if self.big_endian {
            cfg.with_big_endian()
        } else {
            cfg
        };
        if self.variable {
            cfg.with_variable_encoding()
        } else {
            cfg
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Blob(&'a [u8]),
    String(String),
    Length(u64),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

fn roundtrip_blob(data: &[u8], cfg: &Config) {
    match blob::serialize(data, cfg) {
        Ok(wire) => {
            assert!(data.len() as u64 <= cfg.limit());
            assert_eq!(blob::serialized_len(data.len(), cfg).unwrap(), wire.len());
            let decoded = blob::deserialize(&wire, cfg).expect("Failed to decode a valid blob!");
            assert_eq!(decoded, data);

            // Any truncation or extension is rejected
            if !wire.is_empty() {
                assert!(blob::deserialize(&wire[..wire.len() - 1], cfg).is_err());
            }
            let mut extended = wire.clone();
            extended.push(0);
            assert!(matches!(
                blob::deserialize(&extended, cfg),
                Err(Error::TrailingBytes(1))
            ));

            let mut out = Vec::new();
            stream::write_record(&mut out, data, cfg).unwrap();
            assert_eq!(out, wire);
            assert_eq!(stream::read_record(&mut &out[..], cfg).unwrap(), data);
        }
        Err(Error::SizeLimitExceeded(len, limit)) => {
            assert_eq!(len, data.len() as u64);
            assert!(len > limit);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn roundtrip_length(len: u64, cfg: &Config) {
    let encoded = length::encode(len, cfg);
    assert_eq!(encoded.len(), length::size(len, cfg));
    assert_eq!(length::decode(&encoded, cfg).unwrap(), (len, encoded.len()));
}

macro_rules! roundtrip_int {
    ($value:expr, $cfg:expr, $serialize:path, $deserialize:path) => {{
        let value = $value;
        let cfg = $cfg;
        if let Ok(wire) = $serialize(value, cfg) {
            // Fixed mode truncates to the configured width, so only compare full-width values
            let lossless = cfg.encoding() == blobwire_codec::Encoding::Variable
                || cfg.int_width().get() == 8;
            match $deserialize(&wire, cfg) {
                Ok(decoded) if lossless => assert_eq!(decoded, value),
                Ok(_) => {}
                Err(err) => assert!(!lossless, "failed to decode: {err}"),
            }
        }
    }};
}

fn fuzz(input: FuzzInput, cfg: &Config) {
    match input {
        FuzzInput::Blob(data) => roundtrip_blob(data, cfg),
        FuzzInput::String(s) => {
            if let Ok(wire) = string::serialize_string(&s, cfg) {
                assert_eq!(string::deserialize_string(&wire, cfg).unwrap(), s);
            }
        }
        FuzzInput::Length(len) => roundtrip_length(len, cfg),
        FuzzInput::I32(v) => roundtrip_int!(v, cfg, int::serialize_i32, int::deserialize_i32),
        FuzzInput::U32(v) => roundtrip_int!(v, cfg, int::serialize_u32, int::deserialize_u32),
        FuzzInput::I64(v) => roundtrip_int!(v, cfg, int::serialize_i64, int::deserialize_i64),
        FuzzInput::U64(v) => roundtrip_int!(v, cfg, int::serialize_u64, int::deserialize_u64),
    }
}

fuzz_target!(|input: (FuzzConfig, FuzzInput)| {
    let (cfg, input) = input;
    fuzz(input, &cfg.build());
});
