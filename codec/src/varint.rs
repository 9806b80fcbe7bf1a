//! Variable-length integer encoding and decoding
//!
//! Classic LEB128: each byte carries
//! - 7 bits of the value, least-significant group first
//! - 1 "continuation" bit indicating whether more bytes follow
//!
//! Signed integers are first mapped to unsigned integers with ZigZag encoding. This is the
//! payload of a variable-mode integer and is distinct from the marker-based length prefix in
//! [`crate::length`].

use crate::Error;
use bytes::{Buf, BufMut};
use std::ops::{BitOrAssign, Shl, ShrAssign};

const BITS_PER_BYTE: usize = 8;
const DATA_BITS_PER_BYTE: usize = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Maximum number of bytes in a varint of a 64-bit value.
pub const MAX_U64_SIZE: usize = 10;

/// A trait for unsigned integers that can be varint encoded.
pub trait UInt:
    Copy
    + From<u8>
    + Sized
    + ShrAssign<usize>
    + Shl<usize, Output = Self>
    + BitOrAssign<Self>
    + PartialOrd
{
    /// Number of bits in the integer.
    const BITS: usize;

    /// Returns the number of leading zeros in the integer.
    fn leading_zeros(self) -> u32;

    /// Returns the least significant byte of the integer.
    fn as_u8(self) -> u8;
}

macro_rules! impl_uint {
    ($type:ty) => {
        impl UInt for $type {
            const BITS: usize = <$type>::BITS as usize;

            #[inline]
            fn leading_zeros(self) -> u32 {
                self.leading_zeros()
            }

            #[inline]
            fn as_u8(self) -> u8 {
                self as u8
            }
        }
    };
}
impl_uint!(u64);

/// A signed integer that maps onto the unsigned integer `UEq` of the same size.
///
/// The mapping is ZigZag encoding (`0 -> 0`, `-1 -> 1`, `1 -> 2`, `-2 -> 3`, ...), which keeps
/// values of small magnitude small regardless of sign.
pub trait SInt<UEq: UInt> {
    /// Converts the signed integer to an unsigned integer using ZigZag encoding.
    fn as_zigzag(&self) -> UEq;

    /// Converts a (ZigZag'ed) unsigned integer back to a signed integer.
    fn un_zigzag(value: UEq) -> Self;
}

macro_rules! impl_sint {
    ($type:ty, $utype:ty) => {
        impl SInt<$utype> for $type {
            #[inline]
            fn as_zigzag(&self) -> $utype {
                ((self << 1) ^ (self >> (<$type>::BITS - 1))) as $utype
            }

            #[inline]
            fn un_zigzag(value: $utype) -> Self {
                ((value >> 1) as $type) ^ (-((value & 1) as $type))
            }
        }
    };
}
impl_sint!(i64, u64);

/// ZigZag-encodes a signed 64-bit integer.
#[inline]
pub fn zigzag(value: i64) -> u64 {
    value.as_zigzag()
}

/// Inverts [`zigzag`].
#[inline]
pub fn unzigzag(value: u64) -> i64 {
    i64::un_zigzag(value)
}

/// Encodes an unsigned integer as a varint.
pub fn write<T: UInt>(value: T, buf: &mut impl BufMut) {
    let continuation_threshold = T::from(CONTINUATION_BIT_MASK);
    let mut val = value;
    while val >= continuation_threshold {
        buf.put_u8(val.as_u8() | CONTINUATION_BIT_MASK);
        val >>= DATA_BITS_PER_BYTE;
    }
    buf.put_u8(val.as_u8());
}

/// Decodes an unsigned integer from a varint.
///
/// Fails with [`Error::InsufficientData`] if the buffer ends before the final byte and with
/// [`Error::InvalidVarint`] if the value has bits beyond the size of `T`.
pub fn read<T: UInt>(buf: &mut impl Buf) -> Result<T, Error> {
    let mut result = T::from(0);
    let mut shift = 0;
    loop {
        if !buf.has_remaining() {
            return Err(Error::InsufficientData);
        }
        let byte = buf.get_u8();

        // On what must be the last byte, reject any set bit beyond the size of `T`. Because the
        // continuation bit is the most-significant bit, this also rejects a continuation.
        let remaining_bits = T::BITS - shift;
        if remaining_bits <= DATA_BITS_PER_BYTE {
            let relevant_bits = BITS_PER_BYTE - byte.leading_zeros() as usize;
            if relevant_bits > remaining_bits {
                return Err(Error::InvalidVarint);
            }
        }

        result |= T::from(byte & DATA_BITS_MASK) << shift;
        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(result);
        }
        shift += DATA_BITS_PER_BYTE;
    }
}

/// Returns the number of bytes needed to encode an unsigned integer as a varint.
pub fn size<T: UInt>(value: T) -> usize {
    let data_bits = T::BITS - value.leading_zeros() as usize;
    usize::max(1, data_bits.div_ceil(DATA_BITS_PER_BYTE))
}
