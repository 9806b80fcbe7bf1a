//! Golden wire vectors shared with other implementations of the format.
//!
//! Fixed-mode vectors match `bincode` v2 with `standard().with_little_endian()
//! .with_fixed_int_encoding()`; variable-mode vectors match `bincode::config::standard()`.

use blobwire_codec::{blob, int, length, string, Config, Error};

const TEXT: &str = "Hello, bincode!                                                                                                                                       !";

fn fixed() -> Config {
    Config::standard()
}

fn variable() -> Config {
    Config::standard().with_variable_encoding()
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_vec_u8_fixed() {
    assert_eq!(blob::serialize(&[], &fixed()).unwrap(), [0; 8]);
    assert_eq!(
        blob::serialize(&[42], &fixed()).unwrap(),
        [1, 0, 0, 0, 0, 0, 0, 0, 42]
    );
    assert_eq!(
        blob::serialize(&[1, 2, 3, 4, 5], &fixed()).unwrap(),
        [5, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5]
    );

    let large: Vec<u8> = (0..256).map(|i| i as u8).collect();
    let wire = blob::serialize(&large, &fixed()).unwrap();
    assert_eq!(wire.len(), 264);
    assert_eq!(wire[..8], [0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(wire[8..], large[..]);
}

#[test]
fn test_vec_u8_length_prefixes() {
    for len in [0u64, 1, 5, 255, 256, 65535, 65536] {
        let data = vec![0u8; len as usize];
        let wire = blob::serialize(&data, &fixed()).unwrap();
        assert_eq!(wire[..8], len.to_le_bytes());
        assert_eq!(wire.len(), 8 + len as usize);
    }
}

#[test]
fn test_fixed_vs_variable() {
    let data = [1u8, 2, 3, 4, 5];
    assert_eq!(blob::serialize(&data, &variable()).unwrap(), [5, 1, 2, 3, 4, 5]);
    assert_eq!(blob::serialize(&data, &fixed()).unwrap().len(), 13);

    assert_eq!(blob::serialize(&[], &variable()).unwrap(), [0]);
    assert_eq!(blob::serialize(&[], &fixed()).unwrap(), [0; 8]);

    let text = TEXT.as_bytes();
    assert_eq!(text.len(), 151);
    let wire = blob::serialize(text, &variable()).unwrap();
    assert_eq!(wire[0], 151);
    assert_eq!(wire.len(), 152);
    let wire = blob::serialize(text, &fixed()).unwrap();
    assert_eq!(wire[..8], [151, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(wire.len(), 159);
}

#[test]
fn test_string() {
    let wire = string::serialize_string("Hello", &fixed()).unwrap();
    assert_eq!(wire[..8], [5, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(wire[8..], *b"Hello");
    assert_eq!(string::serialize_string("", &fixed()).unwrap(), [0; 8]);

    // Strings and byte blobs share one layout
    let wire = string::serialize_string(TEXT, &variable()).unwrap();
    assert_eq!(wire, blob::serialize(TEXT.as_bytes(), &variable()).unwrap());
    assert_eq!(blob::deserialize(&wire, &variable()).unwrap(), TEXT.as_bytes());
}

#[test]
fn test_fixed_width_integers() {
    let cfg = Config::standard().with_fixed_width(4).unwrap();
    assert_eq!(
        int::serialize_u32(42, &cfg).unwrap(),
        [4, 0, 0, 0, 0, 0, 0, 0, 0x2a, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        int::serialize_u32(0x12345678, &cfg).unwrap()[8..],
        [0x78, 0x56, 0x34, 0x12]
    );
    assert_eq!(
        int::serialize_i32(-42, &cfg).unwrap()[8..],
        [0xd6, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        int::serialize_i32(-1, &cfg).unwrap()[8..],
        [0xff, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        int::serialize_i32(i32::MAX, &cfg).unwrap()[8..],
        [0xff, 0xff, 0xff, 0x7f]
    );

    let cfg = Config::standard();
    assert_eq!(
        int::serialize_u64(0x1234567890ABCDEF, &cfg).unwrap()[8..],
        [0xef, 0xcd, 0xab, 0x90, 0x78, 0x56, 0x34, 0x12]
    );
    let cfg = cfg.with_big_endian();
    assert_eq!(
        int::serialize_u64(0x0123456789ABCDEF, &cfg).unwrap(),
        [0, 0, 0, 0, 0, 0, 0, 8, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]
    );
}

#[test]
fn test_variable_integers() {
    let cfg = variable();
    assert_eq!(int::serialize_i32(0, &cfg).unwrap(), [1, 0x00]);
    assert_eq!(int::serialize_i32(-1, &cfg).unwrap(), [1, 0x01]);
    assert_eq!(int::serialize_i32(1, &cfg).unwrap(), [1, 0x02]);
    assert_eq!(int::serialize_i32(-2, &cfg).unwrap(), [1, 0x03]);
    assert_eq!(int::serialize_i64(-150, &cfg).unwrap(), [2, 0xab, 0x02]);
    assert_eq!(int::serialize_u32(150, &cfg).unwrap(), [2, 0x96, 0x01]);
}

#[test]
fn test_length_prefix_vectors() {
    let cfg = variable();
    assert_eq!(length::encode(250, &cfg), [250]);
    assert_eq!(length::encode(251, &cfg), [0xfb, 251, 0]);
    assert_eq!(length::encode(65536, &cfg), [0xfc, 0, 0, 1, 0]);
    assert_eq!(
        length::encode(1 << 32, &cfg),
        [0xfd, 0, 0, 0, 0, 1, 0, 0, 0]
    );
}

#[test]
fn test_rejections() {
    init_logging();

    assert!(matches!(
        blob::deserialize(&[2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5], &fixed()),
        Err(Error::TrailingBytes(3))
    ));

    let cfg = fixed().with_limit(1024);
    assert!(matches!(
        blob::serialize(&[0; 1025], &cfg),
        Err(Error::SizeLimitExceeded(1025, 1024))
    ));

    // A huge declared length is refused before any payload is read
    let mut wire = Vec::new();
    wire.extend_from_slice(&(1u64 << 40).to_le_bytes());
    assert!(matches!(
        blob::deserialize(&wire, &cfg),
        Err(Error::LengthExceedsLimit(len, 1024)) if len == 1 << 40
    ));
}

#[test]
fn test_mode_is_out_of_band() {
    // The same bytes mean different things under different configurations
    let wire = blob::serialize(&[7; 5], &fixed()).unwrap();
    assert!(blob::deserialize(&wire, &variable()).is_err());
    assert!(blob::deserialize(&wire, &fixed().with_big_endian()).is_err());

    let wire = int::serialize_i32(7, &variable()).unwrap();
    assert!(int::deserialize_i32(&wire, &fixed()).is_err());
}
