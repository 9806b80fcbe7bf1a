//! Core codec traits

use crate::{Config, Error};
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Fails (before writing anything) if the payload exceeds the configured limit.
    fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error>;
}

/// Trait for types that can report their encoded size.
pub trait EncodeSize {
    /// Returns the number of bytes [`Write::write`] produces under `cfg`.
    fn encode_size(&self, cfg: &Config) -> usize;
}

/// Trait for types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer, consuming exactly the bytes of one record.
    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error>;
}

/// Trait for types that can be encoded to a new buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write `encode_size` bytes.
    fn encode(&self, cfg: &Config) -> Result<BytesMut, Error> {
        let len = self.encode_size(cfg);
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer, cfg)?;
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        Ok(buffer)
    }
}

impl<T: Write + EncodeSize + ?Sized> Encode for T {}

/// Trait for types that can be decoded from a buffer holding exactly one record.
pub trait Decode: Read {
    /// Decodes a value, failing with [`Error::TrailingBytes`] if the buffer is not fully consumed.
    fn decode_cfg(mut buf: impl Buf, cfg: &Config) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;

        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::TrailingBytes(remaining));
        }
        Ok(result)
    }
}

impl<T: Read> Decode for T {}
