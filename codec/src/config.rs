//! Configuration shared by every encode and decode call.
//!
//! Neither the byte order nor the encoding is recorded on the wire. Both ends of a channel must
//! agree on the same [`Config`] out-of-band: a fixed-mode prefix decoded as variable (or a
//! little-endian word decoded as big-endian) yields a different, possibly valid-looking, length.
//!
//! # Examples
//!
//! ```
//! use blobwire_codec::{ByteOrder, Config, Encoding};
//!
//! let cfg = Config::standard().with_big_endian().with_fixed_width(4).unwrap();
//! assert_eq!(cfg.byte_order(), ByteOrder::BigEndian);
//! assert_eq!(cfg.encoding(), Encoding::Fixed);
//! assert_eq!(cfg.int_width().get(), 4);
//!
//! // Only widths of 1, 2, 4, or 8 bytes are accepted.
//! assert!(Config::standard().with_fixed_width(3).is_err());
//! ```

use crate::Error;

/// Default maximum payload length, in bytes.
pub const DEFAULT_LIMIT: u64 = 65536;

/// Byte order of fixed-width words (the fixed-mode length prefix and fixed-mode integers).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

/// Selects the length-prefix scheme and the integer payload scheme.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// Lengths are 8-byte words; integers are `int_width` two's-complement bytes.
    #[default]
    Fixed,
    /// Lengths use marker-prefixed varints; integers use zigzag + LEB128.
    Variable,
}

/// Number of bytes used by a fixed-mode integer payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IntWidth(u8);

impl IntWidth {
    /// One byte.
    pub const W1: Self = Self(1);
    /// Two bytes.
    pub const W2: Self = Self(2);
    /// Four bytes.
    pub const W4: Self = Self(4);
    /// Eight bytes.
    pub const W8: Self = Self(8);

    /// Returns the width for `bytes`, or [`Error::InvalidConfiguration`] if it is not 1, 2, 4,
    /// or 8.
    pub fn new(bytes: u8) -> Result<Self, Error> {
        match bytes {
            1 | 2 | 4 | 8 => Ok(Self(bytes)),
            _ => Err(Error::InvalidConfiguration(bytes)),
        }
    }

    /// Returns the width in bytes.
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for IntWidth {
    fn default() -> Self {
        Self::W8
    }
}

/// Immutable codec configuration.
///
/// Every `with_*` method consumes the value and returns a new one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    byte_order: ByteOrder,
    encoding: Encoding,
    int_width: IntWidth,
    limit: u64,
}

impl Config {
    /// Fixed encoding, little-endian, 8-byte integers, and a limit of [`DEFAULT_LIMIT`].
    pub const fn standard() -> Self {
        Self {
            byte_order: ByteOrder::LittleEndian,
            encoding: Encoding::Fixed,
            int_width: IntWidth::W8,
            limit: DEFAULT_LIMIT,
        }
    }

    pub const fn with_big_endian(self) -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            ..self
        }
    }

    pub const fn with_little_endian(self) -> Self {
        Self {
            byte_order: ByteOrder::LittleEndian,
            ..self
        }
    }

    /// Switches to fixed encoding with integers of `width` bytes.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless `width` is 1, 2, 4, or 8.
    pub fn with_fixed_width(self, width: u8) -> Result<Self, Error> {
        Ok(Self {
            encoding: Encoding::Fixed,
            int_width: IntWidth::new(width)?,
            ..self
        })
    }

    /// Switches to fixed encoding, keeping the current integer width.
    pub const fn with_fixed_encoding(self) -> Self {
        Self {
            encoding: Encoding::Fixed,
            ..self
        }
    }

    pub const fn with_variable_encoding(self) -> Self {
        Self {
            encoding: Encoding::Variable,
            ..self
        }
    }

    /// Sets the maximum payload length, in bytes.
    pub const fn with_limit(self, limit: u64) -> Self {
        Self { limit, ..self }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn int_width(&self) -> IntWidth {
        self.int_width
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
