//! C ABI for serializing and deserializing blobs.
//!
//! Buffers returned through `out_ptr`/`out_len` are owned by the caller and must be released
//! with [`blobwire_free_buffer`]. A null configuration pointer selects [`Config::standard`].

use crate::{blob, Config, Error};
use std::{ptr, slice};
use tracing::debug;

/// Configuration passed across the C boundary.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlobwireConfig {
    pub big_endian: bool,
    pub variable: bool,
    pub int_width: u8,
    pub limit: u64,
}

impl BlobwireConfig {
    fn to_config(self) -> Result<Config, Error> {
        let cfg = Config::standard()
            .with_fixed_width(self.int_width)?
            .with_limit(self.limit);
        let cfg = if self.big_endian {
            cfg.with_big_endian()
        } else {
            cfg
        };
        Ok(if self.variable {
            cfg.with_variable_encoding()
        } else {
            cfg
        })
    }
}

impl From<Config> for BlobwireConfig {
    fn from(cfg: Config) -> Self {
        Self {
            big_endian: cfg.byte_order() == crate::ByteOrder::BigEndian,
            variable: cfg.encoding() == crate::Encoding::Variable,
            int_width: cfg.int_width().get(),
            limit: cfg.limit(),
        }
    }
}

/// Outcome of a C ABI call.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlobwireStatus {
    Success = 0,
    NullPointer = 1,
    InvalidConfiguration = 2,
    SerializationError = 3,
    DeserializationError = 4,
}

/// Returns the standard configuration.
#[no_mangle]
pub extern "C" fn blobwire_config_standard() -> BlobwireConfig {
    Config::standard().into()
}

/// # Safety
/// `cfg` must be null or point to a valid [`BlobwireConfig`].
unsafe fn resolve_config(cfg: *const BlobwireConfig) -> Result<Config, BlobwireStatus> {
    match cfg.as_ref() {
        None => Ok(Config::standard()),
        Some(cfg) => cfg
            .to_config()
            .map_err(|_| BlobwireStatus::InvalidConfiguration),
    }
}

/// # Safety
/// `data` must be null (only if `len` is 0) or valid for reads of `len` bytes.
unsafe fn input<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(data, len))
}

/// # Safety
/// `out_ptr` and `out_len` must be valid for writes.
unsafe fn output(buf: Vec<u8>, out_ptr: *mut *mut u8, out_len: *mut usize) {
    let buf = buf.into_boxed_slice();
    *out_len = buf.len();
    *out_ptr = Box::into_raw(buf) as *mut u8;
}

/// Serializes `len` bytes at `data` as a blob.
///
/// # Safety
/// `data` must be valid for reads of `len` bytes (it may be null only if `len` is 0), `cfg` must
/// be null or valid, and `out_ptr`/`out_len` must be valid for writes. The returned buffer must
/// be freed with [`blobwire_free_buffer`].
#[no_mangle]
pub unsafe extern "C" fn blobwire_serialize(
    data: *const u8,
    len: usize,
    cfg: *const BlobwireConfig,
    out_ptr: *mut *mut u8,
    out_len: *mut usize,
) -> BlobwireStatus {
    if out_ptr.is_null() || out_len.is_null() {
        return BlobwireStatus::NullPointer;
    }
    *out_ptr = ptr::null_mut();
    *out_len = 0;
    let Some(data) = input(data, len) else {
        return BlobwireStatus::NullPointer;
    };
    let cfg = match resolve_config(cfg) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };
    match blob::serialize(data, &cfg) {
        Ok(wire) => {
            output(wire, out_ptr, out_len);
            BlobwireStatus::Success
        }
        Err(err) => {
            debug!(?err, "serialize failed");
            BlobwireStatus::SerializationError
        }
    }
}

/// Deserializes the blob spanning `len` bytes at `data`.
///
/// # Safety
/// Same requirements as [`blobwire_serialize`].
#[no_mangle]
pub unsafe extern "C" fn blobwire_deserialize(
    data: *const u8,
    len: usize,
    cfg: *const BlobwireConfig,
    out_ptr: *mut *mut u8,
    out_len: *mut usize,
) -> BlobwireStatus {
    if out_ptr.is_null() || out_len.is_null() {
        return BlobwireStatus::NullPointer;
    }
    *out_ptr = ptr::null_mut();
    *out_len = 0;
    let Some(data) = input(data, len) else {
        return BlobwireStatus::NullPointer;
    };
    let cfg = match resolve_config(cfg) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };
    match blob::deserialize(data, &cfg) {
        Ok(payload) => {
            output(payload, out_ptr, out_len);
            BlobwireStatus::Success
        }
        Err(err) => {
            debug!(?err, "deserialize failed");
            BlobwireStatus::DeserializationError
        }
    }
}

/// Frees a buffer returned by [`blobwire_serialize`] or [`blobwire_deserialize`].
///
/// # Safety
/// `ptr` and `len` must be exactly as returned by one of those calls, and the buffer must not
/// have been freed already.
#[no_mangle]
pub unsafe extern "C" fn blobwire_free_buffer(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)));
}

/// Returns the size of the blob that serializing `len` bytes would produce, or 0 if `cfg` is
/// invalid or `len` exceeds its limit.
///
/// # Safety
/// `cfg` must be null or point to a valid [`BlobwireConfig`].
#[no_mangle]
pub unsafe extern "C" fn blobwire_serialized_length(
    len: usize,
    cfg: *const BlobwireConfig,
) -> usize {
    let Ok(cfg) = resolve_config(cfg) else {
        return 0;
    };
    blob::serialized_len(len, &cfg).unwrap_or(0)
}
