//! Length-prefixed byte blobs, the base unit of the wire format.
//!
//! A blob is `length_prefix(data.len()) ++ data`, where the prefix is encoded by
//! [`crate::length`]. Decoding a standalone blob consumes the entire input: any byte beyond the
//! declared record is an error, so a blob can be sent as a single fixed-size packet without
//! extra framing. Callers that need several records in one buffer must add their own framing.
//!
//! # Examples
//!
//! ```
//! use blobwire_codec::{blob, Config};
//!
//! let cfg = Config::standard();
//! let wire = blob::serialize(&[1, 2, 3, 4, 5], &cfg).unwrap();
//! assert_eq!(wire, [5, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5]);
//! assert_eq!(blob::deserialize(&wire, &cfg).unwrap(), [1, 2, 3, 4, 5]);
//! ```

use crate::{length, util::at_least, Config, Decode, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut, Bytes};
use tracing::debug;

/// Checks `len` against the limit and writes its prefix.
pub(crate) fn write_prefix(len: usize, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
    let len = len as u64;
    if len > cfg.limit() {
        return Err(Error::SizeLimitExceeded(len, cfg.limit()));
    }
    length::write(len, buf, cfg);
    Ok(())
}

/// Reads a prefix and returns the payload length once it is known to be within the limit and
/// available in `buf`.
pub(crate) fn read_prefix(buf: &mut impl Buf, cfg: &Config) -> Result<usize, Error> {
    let len = length::read(buf, cfg)?;
    let len = check_len(len, cfg)?;
    at_least(buf, len)?;
    Ok(len)
}

/// Validates a decoded length against the limit and the addressable size.
pub(crate) fn check_len(len: u64, cfg: &Config) -> Result<usize, Error> {
    if len > cfg.limit() {
        debug!(len, limit = cfg.limit(), "declared length exceeds limit");
        return Err(Error::LengthExceedsLimit(len, cfg.limit()));
    }
    usize::try_from(len).map_err(|_| {
        debug!(len, "declared length not addressable");
        Error::LengthOverflow
    })
}

fn encode_size(len: usize, cfg: &Config) -> usize {
    length::size(len as u64, cfg) + len
}

impl Write for [u8] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
        write_prefix(self.len(), buf, cfg)?;
        buf.put_slice(self);
        Ok(())
    }
}

impl EncodeSize for [u8] {
    #[inline]
    fn encode_size(&self, cfg: &Config) -> usize {
        encode_size(self.len(), cfg)
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
        self.as_slice().write(buf, cfg)
    }
}

impl EncodeSize for Vec<u8> {
    #[inline]
    fn encode_size(&self, cfg: &Config) -> usize {
        encode_size(self.len(), cfg)
    }
}

impl Read for Vec<u8> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = read_prefix(buf, cfg)?;
        let mut data = vec![0; len];
        buf.copy_to_slice(&mut data);
        Ok(data)
    }
}

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
        self[..].write(buf, cfg)
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self, cfg: &Config) -> usize {
        encode_size(self.len(), cfg)
    }
}

impl Read for Bytes {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        let len = read_prefix(buf, cfg)?;
        Ok(buf.copy_to_bytes(len))
    }
}

/// Serializes `data` as a blob.
///
/// Fails with [`Error::SizeLimitExceeded`] if `data` is longer than the configured limit.
pub fn serialize(data: &[u8], cfg: &Config) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::with_capacity(data.encode_size(cfg));
    data.write(&mut buf, cfg)?;
    Ok(buf)
}

/// Deserializes a blob that spans all of `wire`.
pub fn deserialize(wire: &[u8], cfg: &Config) -> Result<Vec<u8>, Error> {
    Vec::<u8>::decode_cfg(wire, cfg)
}

/// Returns the size of the blob [`serialize`] would produce for a payload of `len` bytes.
pub fn serialized_len(len: usize, cfg: &Config) -> Result<usize, Error> {
    if len as u64 > cfg.limit() {
        return Err(Error::SizeLimitExceeded(len as u64, cfg.limit()));
    }
    Ok(encode_size(len, cfg))
}
