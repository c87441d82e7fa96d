//! ProDOS File Info payload (entry type 11)
//!
//! ```text
//! access:    u16 BE   ProDOS access bits
//! file_type: u16 BE   ProDOS file type
//! aux_type:  u32 BE   auxiliary type (load address for BIN files)
//! ```

use crate::error::{AppleSingleError, Result};

/// Payload size in bytes
pub const PRODOS_INFO_SIZE: usize = 8;

/// Access bits for an unlocked file: destroy, rename, backup, write, read
pub const ACCESS_UNLOCKED: u16 = 0xC3;

/// Common ProDOS file types and their mnemonics
pub const FILE_TYPE_NAMES: [(&str, u16); 6] = [
    ("TXT", 0x04),
    ("BIN", 0x06),
    ("INT", 0xFA),
    ("BAS", 0xFC),
    ("REL", 0xFE),
    ("SYS", 0xFF),
];

/// Look up a file type by mnemonic, ignoring case
pub fn file_type_by_name(name: &str) -> Option<u16> {
    FILE_TYPE_NAMES
        .iter()
        .find(|(mnemonic, _)| mnemonic.eq_ignore_ascii_case(name))
        .map(|&(_, file_type)| file_type)
}

/// ProDOS file attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProdosFileInfo {
    /// Access bits
    pub access: u16,
    /// File type
    pub file_type: u16,
    /// Auxiliary type
    pub aux_type: u32,
}

impl ProdosFileInfo {
    /// Create file info from its three fields
    pub fn new(access: u16, file_type: u16, aux_type: u32) -> Self {
        Self {
            access,
            file_type,
            aux_type,
        }
    }

    /// Unlocked binary file with aux type 0
    pub fn standard_bin() -> Self {
        Self::new(ACCESS_UNLOCKED, 0x06, 0x0000)
    }

    /// Parse the payload, ignoring any trailing bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < PRODOS_INFO_SIZE {
            return Err(AppleSingleError::TruncatedData {
                offset: 0,
                length: PRODOS_INFO_SIZE,
                available: data.len(),
            });
        }

        Ok(Self {
            access: u16::from_be_bytes([data[0], data[1]]),
            file_type: u16::from_be_bytes([data[2], data[3]]),
            aux_type: u32::from_be_bytes([data[4], data[5], data[6], data[7]]),
        })
    }

    /// Serialize the payload
    pub fn build(&self) -> [u8; PRODOS_INFO_SIZE] {
        let mut out = [0u8; PRODOS_INFO_SIZE];
        out[0..2].copy_from_slice(&self.access.to_be_bytes());
        out[2..4].copy_from_slice(&self.file_type.to_be_bytes());
        out[4..8].copy_from_slice(&self.aux_type.to_be_bytes());
        out
    }
}

impl Default for ProdosFileInfo {
    fn default() -> Self {
        Self::standard_bin()
    }
}
