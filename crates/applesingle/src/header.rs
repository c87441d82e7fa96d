//! AppleSingle file header
//!
//! Layout (big-endian, 26 bytes):
//! ```text
//! offset 0x00: u32 magic         (0x00051600)
//! offset 0x04: u32 version       (0x00010000 or 0x00020000)
//! offset 0x08: [u8; 16] filler   (zero on write, ignored on read)
//! offset 0x18: u16 entry_count
//! ```

use crate::cursor::{ByteCursor, ByteRead};
use crate::error::{AppleSingleError, Result};

/// AppleSingle magic number
pub const MAGIC: u32 = 0x0005_1600;

/// Version 1 of the format (A/UX era)
pub const VERSION_1: u32 = 0x0001_0000;

/// Version 2 of the format, always used when writing
pub const VERSION_2: u32 = 0x0002_0000;

/// Size of the filler field between version and entry count
pub const FILLER_SIZE: usize = 16;

/// Total header size in bytes
pub const HEADER_SIZE: usize = 26;

/// Progress reported while the header is decoded
#[derive(Debug, Clone, Copy)]
pub enum HeaderEvent<'d> {
    /// A header field was read from the buffer
    Read(ByteRead<'d>),
    /// The version passed validation
    Version(u32),
    /// The entry count was read
    EntryCount(u16),
}

/// Fail with [`AppleSingleError::BadMagic`] unless `magic` matches
pub fn check_magic(magic: u32) -> Result<()> {
    if magic == MAGIC {
        Ok(())
    } else {
        Err(AppleSingleError::BadMagic(magic))
    }
}

/// Fail with [`AppleSingleError::UnsupportedVersion`] unless `version` is v1 or v2
pub fn check_version(version: u32) -> Result<()> {
    match version {
        VERSION_1 | VERSION_2 => Ok(()),
        other => Err(AppleSingleError::UnsupportedVersion(other)),
    }
}

/// Decode the header field by field from `cursor`, returning `(version, entry_count)`
///
/// The magic number is checked as soon as its four bytes are available, so a
/// short buffer with a foreign prefix fails with
/// [`AppleSingleError::BadMagic`] rather than
/// [`AppleSingleError::TruncatedData`].
pub fn decode_from<'d>(
    cursor: &mut ByteCursor<'d>,
    mut observe: impl FnMut(HeaderEvent<'d>),
) -> Result<(u32, u16)> {
    let magic = read_u32(cursor, "Magic number", &mut observe)?;
    check_magic(magic)?;

    let version = read_u32(cursor, "Version", &mut observe)?;
    check_version(version)?;
    observe(HeaderEvent::Version(version));

    read_field(cursor, FILLER_SIZE, "Filler", &mut observe)?;

    let count = read_field(cursor, 2, "Number of entries", &mut observe)?;
    let entry_count = u16::from_be_bytes([count[0], count[1]]);
    observe(HeaderEvent::EntryCount(entry_count));

    Ok((version, entry_count))
}

/// Decode the header at the start of `data`, returning `(version, entry_count)`
pub fn decode(data: &[u8]) -> Result<(u32, u16)> {
    decode_from(&mut ByteCursor::new(data), |_| {})
}

/// Encode a version 2 header announcing `entry_count` entries
pub fn encode(entry_count: u16) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    out[0..4].copy_from_slice(&MAGIC.to_be_bytes());
    out[4..8].copy_from_slice(&VERSION_2.to_be_bytes());
    out[24..26].copy_from_slice(&entry_count.to_be_bytes());
    out
}

fn read_field<'d>(
    cursor: &mut ByteCursor<'d>,
    len: usize,
    description: &'static str,
    observe: &mut impl FnMut(HeaderEvent<'d>),
) -> Result<&'d [u8]> {
    let start = cursor.position();
    let data = cursor.read(len)?;
    observe(HeaderEvent::Read(ByteRead {
        start,
        data,
        description,
    }));
    Ok(data)
}

fn read_u32<'d>(
    cursor: &mut ByteCursor<'d>,
    description: &'static str,
    observe: &mut impl FnMut(HeaderEvent<'d>),
) -> Result<u32> {
    let bytes = read_field(cursor, 4, description, observe)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_layout() {
        let bytes = encode(0x0102);
        assert_eq!(&bytes[0..4], &[0x00, 0x05, 0x16, 0x00]);
        assert_eq!(&bytes[4..8], &[0x00, 0x02, 0x00, 0x00]);
        assert!(bytes[8..24].iter().all(|&b| b == 0));
        assert_eq!(&bytes[24..26], &[0x01, 0x02]);
    }

    #[test]
    fn test_decode_round_trip() {
        let bytes = encode(5);
        assert_eq!(decode(&bytes).unwrap(), (VERSION_2, 5));
    }

    #[test]
    fn test_version_1_accepted() {
        let mut bytes = encode(0);
        bytes[4..8].copy_from_slice(&VERSION_1.to_be_bytes());
        // Filler is not checked
        bytes[8..24].copy_from_slice(b"ProDOS          ");
        assert_eq!(decode(&bytes).unwrap(), (VERSION_1, 0));
    }

    #[test]
    fn test_decode_events() {
        let bytes = encode(2);
        let mut events = Vec::new();
        decode_from(&mut ByteCursor::new(&bytes), |event| {
            events.push(match event {
                HeaderEvent::Read(read) => {
                    format!("read {} {} {}", read.start, read.len(), read.description)
                }
                HeaderEvent::Version(version) => format!("version {version:#x}"),
                HeaderEvent::EntryCount(count) => format!("count {count}"),
            });
        })
        .unwrap();

        assert_eq!(
            events,
            vec![
                "read 0 4 Magic number",
                "read 4 4 Version",
                "version 0x20000",
                "read 8 16 Filler",
                "read 24 2 Number of entries",
                "count 2",
            ]
        );
    }

    #[test]
    fn test_reject_bad_magic() {
        let mut bytes = encode(1);
        bytes[0] = 0xFF;
        assert!(matches!(
            decode(&bytes),
            Err(AppleSingleError::BadMagic(0xFF05_1600))
        ));
    }

    #[test]
    fn test_reject_unsupported_version() {
        let mut bytes = encode(1);
        bytes[4..8].copy_from_slice(&0x0003_0000u32.to_be_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(AppleSingleError::UnsupportedVersion(0x0003_0000))
        ));
    }

    #[test]
    fn test_reject_short_header() {
        let bytes = encode(1);
        assert!(matches!(
            decode(&bytes[..20]),
            Err(AppleSingleError::TruncatedData {
                offset: 8,
                length: 16,
                available: 20
            })
        ));
    }

    #[test]
    fn test_short_buffer_with_foreign_prefix() {
        // The magic is judged before the missing bytes
        assert!(matches!(
            decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00]),
            Err(AppleSingleError::BadMagic(0xFFFF_FFFF))
        ));
    }
}
