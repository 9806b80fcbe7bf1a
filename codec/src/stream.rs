//! Read and write blobs over [`std::io`] streams.
//!
//! A stream carries records back to back, so unlike [`crate::blob::deserialize`] reading a
//! record does not require the input to end after it.

use crate::{
    blob::{check_len, write_prefix},
    length, Config, Encoding, Error,
};
use std::io;
use tracing::trace;

/// Largest prefix: a `u128` marker and its payload.
const MAX_PREFIX_SIZE: usize = 17;

fn read_exact(reader: &mut impl io::Read, buf: &mut [u8]) -> Result<(), Error> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::InsufficientData,
        _ => Error::Io(err),
    })
}

/// Writes `data` as one blob, returning the number of bytes written.
pub fn write_record(writer: &mut impl io::Write, data: &[u8], cfg: &Config) -> Result<usize, Error> {
    let mut prefix = Vec::with_capacity(MAX_PREFIX_SIZE);
    write_prefix(data.len(), &mut prefix, cfg)?;
    writer.write_all(&prefix)?;
    writer.write_all(data)?;
    trace!(len = data.len(), prefix = prefix.len(), "wrote record");
    Ok(prefix.len() + data.len())
}

/// Reads one blob and returns its payload.
///
/// The prefix is read byte by byte as its encoding demands, and the declared length is checked
/// against the limit before the payload is buffered.
pub fn read_record(reader: &mut impl io::Read, cfg: &Config) -> Result<Vec<u8>, Error> {
    let mut prefix = [0u8; MAX_PREFIX_SIZE];
    let prefix_len = match cfg.encoding() {
        Encoding::Fixed => {
            read_exact(reader, &mut prefix[..length::FIXED_SIZE])?;
            length::FIXED_SIZE
        }
        Encoding::Variable => {
            read_exact(reader, &mut prefix[..1])?;
            let extra =
                length::marker_payload(prefix[0]).ok_or(Error::InvalidMarker(prefix[0]))?;
            read_exact(reader, &mut prefix[1..1 + extra])?;
            1 + extra
        }
    };

    let (len, _) = length::decode(&prefix[..prefix_len], cfg)?;
    let len = check_len(len, cfg)?;
    let mut data = vec![0; len];
    read_exact(reader, &mut data)?;
    trace!(len, prefix = prefix_len, "read record");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob;
    use std::io::Cursor;

    fn configs() -> Vec<Config> {
        let standard = Config::standard();
        vec![
            standard,
            standard.with_big_endian(),
            standard.with_variable_encoding(),
        ]
    }

    #[test]
    fn test_matches_blob() {
        for cfg in configs() {
            for len in [0usize, 1, 250, 251, 65536] {
                let data = vec![0x5a; len];
                let mut out = Vec::new();
                let written = write_record(&mut out, &data, &cfg).unwrap();
                assert_eq!(written, out.len());
                assert_eq!(out, blob::serialize(&data, &cfg).unwrap());
                assert_eq!(read_record(&mut Cursor::new(&out), &cfg).unwrap(), data);
            }
        }
    }

    #[test]
    fn test_consecutive_records() {
        let cfg = Config::standard().with_variable_encoding();
        let mut out = Vec::new();
        write_record(&mut out, b"first", &cfg).unwrap();
        write_record(&mut out, &[0u8; 300], &cfg).unwrap();
        write_record(&mut out, b"", &cfg).unwrap();

        let mut reader = Cursor::new(out);
        assert_eq!(read_record(&mut reader, &cfg).unwrap(), b"first");
        assert_eq!(read_record(&mut reader, &cfg).unwrap(), vec![0u8; 300]);
        assert!(read_record(&mut reader, &cfg).unwrap().is_empty());
        assert!(matches!(
            read_record(&mut reader, &cfg),
            Err(Error::InsufficientData)
        ));
    }

    #[test]
    fn test_truncated() {
        let cfg = Config::standard();
        let wire = blob::serialize(b"payload", &cfg).unwrap();
        for end in [0, 4, 8, wire.len() - 1] {
            assert!(matches!(
                read_record(&mut &wire[..end], &cfg),
                Err(Error::InsufficientData)
            ));
        }
    }

    #[test]
    fn test_invalid_marker() {
        let cfg = Config::standard().with_variable_encoding();
        assert!(matches!(
            read_record(&mut &[0xff, 0, 0][..], &cfg),
            Err(Error::InvalidMarker(0xff))
        ));
    }

    #[test]
    fn test_limits() {
        let cfg = Config::standard().with_limit(4);
        let mut out = Vec::new();
        assert!(matches!(
            write_record(&mut out, b"toolong", &cfg),
            Err(Error::SizeLimitExceeded(7, 4))
        ));
        assert!(out.is_empty());

        // Declared length is rejected without reading (or allocating) the payload
        assert!(matches!(
            read_record(&mut &[0xff; 8][..], &cfg),
            Err(Error::LengthExceedsLimit(u64::MAX, 4))
        ));
    }

    #[test]
    fn test_io_error() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken"))
            }
        }
        assert!(matches!(
            read_record(&mut Broken, &Config::standard()),
            Err(Error::Io(_))
        ));
    }
}
