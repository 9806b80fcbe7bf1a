//! Integers encoded as blobs.
//!
//! Every integer is wrapped in a length-prefixed blob (see [`crate::blob`]), even though its size
//! is known, so that integers and arbitrary blobs share one framing. The blob payload depends on
//! the configured [`Encoding`]:
//!
//! - [`Encoding::Fixed`]: the low `int_width` bytes of the value's 64-bit two's-complement
//!   representation, in the configured [`ByteOrder`]. Decoding sign-extends (signed targets) or
//!   zero-extends (unsigned targets) back to 64 bits.
//! - [`Encoding::Variable`]: a LEB128 varint of the value (unsigned targets) or of its ZigZag
//!   encoding (signed targets). See [`crate::varint`].
//!
//! A value wider than `int_width` is truncated to its low bytes when encoded in fixed mode. A
//! fixed-mode payload decoded into a 32-bit target keeps the low 32 bits of the extended word,
//! while a variable-mode value outside the target's range fails with [`Error::OutOfRange`].
//!
//! # Examples
//!
//! ```
//! use blobwire_codec::{int, Config};
//!
//! let cfg = Config::standard().with_fixed_width(1).unwrap();
//! let wire = int::serialize_i32(-42, &cfg).unwrap();
//! assert_eq!(wire, [1, 0, 0, 0, 0, 0, 0, 0, 0xd6]);
//! assert_eq!(int::deserialize_i32(&wire, &cfg).unwrap(), -42);
//! ```

use crate::{
    blob::{read_prefix, write_prefix},
    length, varint, ByteOrder, Config, Decode, EncodeSize, Encoding, Error, Read, Write,
};
use bytes::{Buf, BufMut};
use paste::paste;

/// A primitive integer supported by the codec.
trait Integer: Copy {
    /// Name reported by [`Error::OutOfRange`].
    const NAME: &'static str;

    /// Whether the payload is sign-extended and ZigZag-encoded.
    const SIGNED: bool;

    /// Returns the 64-bit two's-complement representation of the value.
    fn to_word(self) -> u64;

    /// Narrows a 64-bit word, returning `None` if it does not fit.
    fn from_word(word: u64) -> Option<Self>;

    /// Narrows a 64-bit word to its low bits.
    fn truncate(word: u64) -> Self;
}

macro_rules! impl_integer {
    ($type:ty, $signed:expr, $wide:ty) => {
        impl Integer for $type {
            const NAME: &'static str = stringify!($type);
            const SIGNED: bool = $signed;

            #[inline]
            fn to_word(self) -> u64 {
                self as $wide as u64
            }

            #[inline]
            fn from_word(word: u64) -> Option<Self> {
                <$type>::try_from(word as $wide).ok()
            }

            #[inline]
            fn truncate(word: u64) -> Self {
                word as $type
            }
        }
    };
}
impl_integer!(i32, true, i64);
impl_integer!(u32, false, u64);
impl_integer!(i64, true, i64);
impl_integer!(u64, false, u64);

/// An encoded integer payload, before framing.
struct Payload {
    bytes: [u8; varint::MAX_U64_SIZE],
    len: usize,
}

impl Payload {
    fn new<T: Integer>(value: T, cfg: &Config) -> Self {
        let word = value.to_word();
        let mut bytes = [0u8; varint::MAX_U64_SIZE];
        let len = match cfg.encoding() {
            Encoding::Fixed => {
                let width = cfg.int_width().as_usize();
                match cfg.byte_order() {
                    ByteOrder::LittleEndian => {
                        bytes[..width].copy_from_slice(&word.to_le_bytes()[..width]);
                    }
                    ByteOrder::BigEndian => {
                        bytes[..width].copy_from_slice(&word.to_be_bytes()[8 - width..]);
                    }
                }
                width
            }
            Encoding::Variable => {
                let value = if T::SIGNED {
                    varint::zigzag(word as i64)
                } else {
                    word
                };
                let mut cursor = &mut bytes[..];
                varint::write(value, &mut cursor);
                varint::MAX_U64_SIZE - cursor.len()
            }
        };
        Self { bytes, len }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Reconstructs a 64-bit word from a fixed-mode payload.
fn read_fixed<T: Integer>(payload: &mut impl Buf, cfg: &Config) -> Result<u64, Error> {
    let width = cfg.int_width().as_usize();
    let remaining = payload.remaining();
    if remaining < width {
        return Err(Error::InsufficientData);
    }
    if remaining > width {
        return Err(Error::TrailingBytes(remaining - width));
    }

    let mut word = [0u8; 8];
    let range = match cfg.byte_order() {
        ByteOrder::LittleEndian => 0..width,
        ByteOrder::BigEndian => 8 - width..8,
    };
    payload.copy_to_slice(&mut word[range]);

    // The most-significant payload byte decides the fill of the high-order bytes.
    let msb = match cfg.byte_order() {
        ByteOrder::LittleEndian => word[width - 1],
        ByteOrder::BigEndian => word[8 - width],
    };
    if T::SIGNED && msb & 0x80 != 0 {
        match cfg.byte_order() {
            ByteOrder::LittleEndian => word[width..].fill(0xff),
            ByteOrder::BigEndian => word[..8 - width].fill(0xff),
        }
    }

    Ok(match cfg.byte_order() {
        ByteOrder::LittleEndian => u64::from_le_bytes(word),
        ByteOrder::BigEndian => u64::from_be_bytes(word),
    })
}

/// Reconstructs a 64-bit word from a variable-mode payload.
fn read_variable<T: Integer>(payload: &mut impl Buf) -> Result<u64, Error> {
    let value = varint::read::<u64>(payload)?;
    let remaining = payload.remaining();
    if remaining > 0 {
        return Err(Error::TrailingBytes(remaining));
    }
    Ok(if T::SIGNED {
        varint::unzigzag(value) as u64
    } else {
        value
    })
}

fn write_int<T: Integer>(value: T, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
    let payload = Payload::new(value, cfg);
    write_prefix(payload.len, buf, cfg)?;
    buf.put_slice(payload.as_slice());
    Ok(())
}

fn read_int<T: Integer>(buf: &mut impl Buf, cfg: &Config) -> Result<T, Error> {
    let len = read_prefix(buf, cfg)?;
    let mut payload = buf.copy_to_bytes(len);
    match cfg.encoding() {
        Encoding::Fixed => Ok(T::truncate(read_fixed::<T>(&mut payload, cfg)?)),
        Encoding::Variable => {
            let word = read_variable::<T>(&mut payload)?;
            T::from_word(word).ok_or(Error::OutOfRange(T::NAME))
        }
    }
}

fn encode_size<T: Integer>(value: T, cfg: &Config) -> usize {
    let len = match cfg.encoding() {
        Encoding::Fixed => cfg.int_width().as_usize(),
        Encoding::Variable => {
            let word = value.to_word();
            varint::size(if T::SIGNED {
                varint::zigzag(word as i64)
            } else {
                word
            })
        }
    };
    length::size(len as u64, cfg) + len
}

macro_rules! impl_int {
    ($type:ty) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, cfg: &Config) -> Result<(), Error> {
                write_int(*self, buf, cfg)
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self, cfg: &Config) -> usize {
                encode_size(*self, cfg)
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
                read_int(buf, cfg)
            }
        }

        paste! {
            #[doc = concat!("Serializes an `", stringify!($type), "` as a blob.")]
            pub fn [<serialize_ $type>](value: $type, cfg: &Config) -> Result<Vec<u8>, Error> {
                let mut buf = Vec::with_capacity(value.encode_size(cfg));
                value.write(&mut buf, cfg)?;
                Ok(buf)
            }

            #[doc = concat!("Deserializes an `", stringify!($type), "` from a blob that spans all of `wire`.")]
            pub fn [<deserialize_ $type>](wire: &[u8], cfg: &Config) -> Result<$type, Error> {
                <$type>::decode_cfg(wire, cfg)
            }
        }
    };
}
impl_int!(i32);
impl_int!(u32);
impl_int!(i64);
impl_int!(u64);
