//! AppleSingle error types

use thiserror::Error;

/// AppleSingle-specific error type
#[derive(Debug, Error)]
pub enum AppleSingleError {
    /// The first four bytes are not the AppleSingle magic number
    #[error("not an AppleSingle file: expected magic 0x00051600, got 0x{0:08x}")]
    BadMagic(u32),

    /// Version field is neither 0x00010000 nor 0x00020000
    #[error("unsupported AppleSingle version 0x{0:08x}: only versions 1 and 2 are supported")]
    UnsupportedVersion(u32),

    /// A read addressed bytes past the end of the buffer
    #[error("truncated data: {length} bytes at offset {offset}, but only {available} bytes available")]
    TruncatedData {
        /// Absolute start of the requested range
        offset: usize,
        /// Requested length in bytes
        length: usize,
        /// Length of the buffer being read
        available: usize,
    },

    /// Real name rejected by ProDOS naming rules
    #[error("invalid real name {0:?}: ProDOS file names must begin with a letter")]
    InvalidRealName(String),

    /// More entries than the 16-bit entry count can describe
    #[error("too many entries: {0} (maximum is 65535)")]
    TooManyEntries(usize),

    /// Layout would place an entry beyond the 32-bit offset range
    #[error("archive too large: {0} bytes exceeds the 32-bit offset range")]
    ArchiveTooLarge(u64),

    /// `binrw` parsing/writing error
    #[error("binary format error: {0}")]
    BinRw(#[from] binrw::Error),

    /// I/O error while writing to a sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for AppleSingle operations
pub type Result<T> = std::result::Result<T, AppleSingleError>;
