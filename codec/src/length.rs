//! Length prefix encoding and decoding
//!
//! Two schemes are supported, selected by [`Encoding`]:
//!
//! - [`Encoding::Fixed`]: the length is always an 8-byte word in the configured [`ByteOrder`].
//! - [`Encoding::Variable`]: the length uses the marker scheme of `bincode` v2:
//!
//! | length               | encoding                  |
//! |----------------------|---------------------------|
//! | `0..251`             | the length as a single byte |
//! | `251..2^16`          | `0xfb` + `u16` little-endian |
//! | `2^16..2^32`         | `0xfc` + `u32` little-endian |
//! | `2^32..2^64`         | `0xfd` + `u64` little-endian |
//!
//! When decoding, `0xfe` + `u128` little-endian is also accepted as long as the value fits in
//! 64 bits. `0xff` is never valid.
//!
//! Marker payloads are little-endian regardless of the configured [`ByteOrder`]. This scheme is
//! unrelated to the LEB128 varints in [`crate::varint`].

use crate::{util::at_least, ByteOrder, Config, Encoding, Error};
use bytes::{Buf, BufMut};

/// Largest length encoded as a single byte.
const SINGLE_BYTE_MAX: u8 = 250;

/// Marker preceding a `u16` length.
pub const U16_MARKER: u8 = 0xfb;

/// Marker preceding a `u32` length.
pub const U32_MARKER: u8 = 0xfc;

/// Marker preceding a `u64` length.
pub const U64_MARKER: u8 = 0xfd;

/// Marker preceding a `u128` length (accepted on decode, never produced).
pub const U128_MARKER: u8 = 0xfe;

/// Size of a fixed-mode length prefix.
pub const FIXED_SIZE: usize = 8;

/// Writes `len` as a length prefix.
pub fn write(len: u64, buf: &mut impl BufMut, cfg: &Config) {
    match cfg.encoding() {
        Encoding::Fixed => match cfg.byte_order() {
            ByteOrder::LittleEndian => buf.put_u64_le(len),
            ByteOrder::BigEndian => buf.put_u64(len),
        },
        Encoding::Variable => {
            if len <= SINGLE_BYTE_MAX as u64 {
                buf.put_u8(len as u8);
            } else if len <= u16::MAX as u64 {
                buf.put_u8(U16_MARKER);
                buf.put_u16_le(len as u16);
            } else if len <= u32::MAX as u64 {
                buf.put_u8(U32_MARKER);
                buf.put_u32_le(len as u32);
            } else {
                buf.put_u8(U64_MARKER);
                buf.put_u64_le(len);
            }
        }
    }
}

/// Reads a length prefix.
pub fn read(buf: &mut impl Buf, cfg: &Config) -> Result<u64, Error> {
    match cfg.encoding() {
        Encoding::Fixed => {
            at_least(buf, FIXED_SIZE)?;
            Ok(match cfg.byte_order() {
                ByteOrder::LittleEndian => buf.get_u64_le(),
                ByteOrder::BigEndian => buf.get_u64(),
            })
        }
        Encoding::Variable => {
            at_least(buf, 1)?;
            match buf.get_u8() {
                byte @ 0..=SINGLE_BYTE_MAX => Ok(byte as u64),
                U16_MARKER => {
                    at_least(buf, 2)?;
                    Ok(buf.get_u16_le() as u64)
                }
                U32_MARKER => {
                    at_least(buf, 4)?;
                    Ok(buf.get_u32_le() as u64)
                }
                U64_MARKER => {
                    at_least(buf, 8)?;
                    Ok(buf.get_u64_le())
                }
                U128_MARKER => {
                    at_least(buf, 16)?;
                    u64::try_from(buf.get_u128_le()).map_err(|_| Error::LengthOverflow)
                }
                marker => Err(Error::InvalidMarker(marker)),
            }
        }
    }
}

/// Returns the number of bytes [`write`] uses to encode `len`.
pub fn size(len: u64, cfg: &Config) -> usize {
    match cfg.encoding() {
        Encoding::Fixed => FIXED_SIZE,
        Encoding::Variable => {
            if len <= SINGLE_BYTE_MAX as u64 {
                1
            } else if len <= u16::MAX as u64 {
                3
            } else if len <= u32::MAX as u64 {
                5
            } else {
                9
            }
        }
    }
}

/// Number of bytes that must follow a variable-mode first byte, or `None` if the byte is not a
/// valid first byte.
pub(crate) fn marker_payload(first: u8) -> Option<usize> {
    match first {
        0..=SINGLE_BYTE_MAX => Some(0),
        U16_MARKER => Some(2),
        U32_MARKER => Some(4),
        U64_MARKER => Some(8),
        U128_MARKER => Some(16),
        _ => None,
    }
}

/// Encodes `len` as a standalone length prefix.
pub fn encode(len: u64, cfg: &Config) -> Vec<u8> {
    let mut buf = Vec::with_capacity(size(len, cfg));
    write(len, &mut buf, cfg);
    buf
}

/// Decodes a length prefix from the start of `bytes`, returning the length and the number of
/// bytes consumed.
pub fn decode(bytes: &[u8], cfg: &Config) -> Result<(u64, usize), Error> {
    let mut buf = bytes;
    let len = read(&mut buf, cfg)?;
    Ok((len, bytes.len() - buf.len()))
}
