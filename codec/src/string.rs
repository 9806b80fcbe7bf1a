//! UTF-8 strings encoded as blobs.
//!
//! The payload is the raw UTF-8 bytes and the length prefix counts bytes, not characters.
//! Decoding rejects payloads that are not valid UTF-8.

use crate::{Config, Decode, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};

impl Write for str {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
        self.as_bytes().write(buf, cfg)
    }
}

impl EncodeSize for str {
    #[inline]
    fn encode_size(&self, cfg: &Config) -> usize {
        self.as_bytes().encode_size(cfg)
    }
}

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
        self.as_str().write(buf, cfg)
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self, cfg: &Config) -> usize {
        self.as_str().encode_size(cfg)
    }
}

impl Read for String {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let bytes = Vec::<u8>::read_cfg(buf, cfg)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Serializes `s` as a blob of its UTF-8 bytes.
pub fn serialize_string(s: &str, cfg: &Config) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::with_capacity(s.encode_size(cfg));
    s.write(&mut buf, cfg)?;
    Ok(buf)
}

/// Deserializes a string from a blob that spans all of `wire`.
pub fn deserialize_string(wire: &[u8], cfg: &Config) -> Result<String, Error> {
    String::decode_cfg(wire, cfg)
}
