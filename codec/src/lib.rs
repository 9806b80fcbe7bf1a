//! Serialize length-prefixed blobs, strings, and integers.
//!
//! # Overview
//!
//! A binary codec that reproduces, byte for byte, the container format `bincode` v2 uses for
//! byte vectors and strings, so that independent implementations in other languages can
//! exchange data with no ambiguity. It is designed to:
//! - Serialize byte blobs, UTF-8 strings, and 32/64-bit integers into a length-prefixed format
//! - Deserialize untrusted input, bounding every allocation by a configured limit
//!
//! # Wire Format
//!
//! Every value is a blob: `length_prefix(payload.len()) ++ payload`. A [`Config`] selects:
//! - the length prefix: a fixed 8-byte word, or a marker-prefixed varint (see [`length`])
//! - the byte order of fixed-width words
//! - the integer payload: `int_width` two's-complement bytes, or a ZigZag/LEB128 varint
//!   (see [`int`])
//! - the maximum payload length, enforced when encoding and decoding
//!
//! The configuration is not recorded on the wire. Both ends must agree on it out-of-band.
//!
//! Decoding a standalone record requires the input to contain exactly one record: missing bytes
//! fail with [`Error::InsufficientData`] and extra bytes with [`Error::TrailingBytes`].
//!
//! # Example
//!
//! ```
//! use blobwire_codec::{blob, int, string, Config, Error};
//!
//! let cfg = Config::standard().with_variable_encoding();
//!
//! let wire = blob::serialize(&[1, 2, 3], &cfg).unwrap();
//! assert_eq!(wire, [3, 1, 2, 3]);
//!
//! let wire = int::serialize_i32(-1, &cfg).unwrap();
//! assert_eq!(wire, [1, 0x01]);
//!
//! let wire = string::serialize_string("hi", &cfg).unwrap();
//! assert_eq!(string::deserialize_string(&wire, &cfg).unwrap(), "hi");
//!
//! // Trailing bytes are rejected
//! assert!(matches!(
//!     blob::deserialize(&[1, 0xaa, 0xbb], &cfg),
//!     Err(Error::TrailingBytes(1))
//! ));
//! ```

pub mod blob;
pub mod codec;
pub mod config;
pub mod error;
pub mod ffi;
pub mod int;
pub mod length;
pub mod stream;
pub mod string;
mod util;
pub mod varint;

// Re-export main types and traits
pub use codec::{Decode, Encode, EncodeSize, Read, Write};
pub use config::{ByteOrder, Config, Encoding, IntWidth, DEFAULT_LIMIT};
pub use error::Error;
