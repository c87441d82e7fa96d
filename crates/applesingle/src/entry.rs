//! Entry types, descriptors and entries
//!
//! Each entry is announced by a 12-byte descriptor in the directory that
//! follows the header. The descriptor points at the payload with an absolute
//! offset, so payloads may appear in any order relative to the directory.

use crate::error::Result;
use binrw::io::Cursor;
use binrw::BinRead;
use std::fmt;

/// Size of one entry descriptor in bytes
pub const DESCRIPTOR_SIZE: usize = 12;

/// Entry type identifiers defined by the AppleSingle/AppleDouble format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryType {
    /// 1: primary file content
    DataFork,
    /// 2: Macintosh resource fork
    ResourceFork,
    /// 3: original file name
    RealName,
    /// 4: Finder comment
    Comment,
    /// 5: black and white icon
    IconBw,
    /// 6: color icon
    IconColor,
    /// 7: file info (version 1 only)
    FileInfo,
    /// 8: creation/modification/backup/access dates
    FileDatesInfo,
    /// 9: Finder info
    FinderInfo,
    /// 10: Macintosh file info
    MacintoshFileInfo,
    /// 11: ProDOS access, file type and aux type
    ProdosFileInfo,
    /// 12: MS-DOS attributes
    MsDosFileInfo,
    /// 13: AFP short name
    ShortName,
    /// 14: AFP file info
    AfpFileInfo,
    /// 15: AFP directory id
    DirectoryId,
    /// Any id outside 1-15
    Unknown(u32),
}

impl EntryType {
    /// Map a numeric id to its entry type
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Self::DataFork,
            2 => Self::ResourceFork,
            3 => Self::RealName,
            4 => Self::Comment,
            5 => Self::IconBw,
            6 => Self::IconColor,
            7 => Self::FileInfo,
            8 => Self::FileDatesInfo,
            9 => Self::FinderInfo,
            10 => Self::MacintoshFileInfo,
            11 => Self::ProdosFileInfo,
            12 => Self::MsDosFileInfo,
            13 => Self::ShortName,
            14 => Self::AfpFileInfo,
            15 => Self::DirectoryId,
            other => Self::Unknown(other),
        }
    }

    /// Numeric id as stored in the descriptor
    pub fn id(self) -> u32 {
        match self {
            Self::DataFork => 1,
            Self::ResourceFork => 2,
            Self::RealName => 3,
            Self::Comment => 4,
            Self::IconBw => 5,
            Self::IconColor => 6,
            Self::FileInfo => 7,
            Self::FileDatesInfo => 8,
            Self::FinderInfo => 9,
            Self::MacintoshFileInfo => 10,
            Self::ProdosFileInfo => 11,
            Self::MsDosFileInfo => 12,
            Self::ShortName => 13,
            Self::AfpFileInfo => 14,
            Self::DirectoryId => 15,
            Self::Unknown(id) => id,
        }
    }

    /// Human readable name, "Unknown" for undefined ids
    pub fn name(self) -> &'static str {
        match self {
            Self::DataFork => "Data Fork",
            Self::ResourceFork => "Resource Fork",
            Self::RealName => "Real Name",
            Self::Comment => "Comment",
            Self::IconBw => "Icon, B&W",
            Self::IconColor => "Icon, Color",
            Self::FileInfo => "File Info",
            Self::FileDatesInfo => "File Dates Info",
            Self::FinderInfo => "Finder Info",
            Self::MacintoshFileInfo => "Macintosh File Info",
            Self::ProdosFileInfo => "ProDOS File Info",
            Self::MsDosFileInfo => "MS-DOS File Info",
            Self::ShortName => "Short Name",
            Self::AfpFileInfo => "AFP File Info",
            Self::DirectoryId => "Directory ID",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether the id is one of the 15 defined types
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<u32> for EntryType {
    fn from(id: u32) -> Self {
        Self::from_id(id)
    }
}

impl From<EntryType> for u32 {
    fn from(entry_type: EntryType) -> Self {
        entry_type.id()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 12-byte directory record
///
/// ```text
/// entry_id: u32 BE
/// offset:   u32 BE   absolute position of the payload
/// length:   u32 BE   payload length in bytes
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct EntryDescriptor {
    /// Entry type id
    pub entry_id: u32,
    /// Absolute payload offset
    pub offset: u32,
    /// Payload length
    pub length: u32,
}

impl EntryDescriptor {
    /// Descriptor for a payload of `length` bytes at `offset`
    pub fn new(entry_id: u32, offset: u32, length: u32) -> Self {
        Self {
            entry_id,
            offset,
            length,
        }
    }

    /// Parse a descriptor from exactly [`DESCRIPTOR_SIZE`] bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        Ok(Self::read(&mut Cursor::new(data))?)
    }

    /// Serialize the descriptor
    pub fn build(&self) -> [u8; DESCRIPTOR_SIZE] {
        let mut out = [0u8; DESCRIPTOR_SIZE];
        out[0..4].copy_from_slice(&self.entry_id.to_be_bytes());
        out[4..8].copy_from_slice(&self.offset.to_be_bytes());
        out[8..12].copy_from_slice(&self.length.to_be_bytes());
        out
    }

    /// Entry type named by this descriptor
    pub fn entry_type(&self) -> EntryType {
        EntryType::from_id(self.entry_id)
    }
}

/// A directory record together with an owned copy of its payload
///
/// Entries decoded from a file keep the offset they were found at. Entries
/// created in memory have offset 0 until the writer lays them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Entry type id, preserved verbatim for unknown types
    pub entry_id: u32,
    /// Absolute offset the payload was read from
    pub offset: u32,
    /// Payload bytes
    pub data: Vec<u8>,
}

impl Entry {
    /// Create an entry of the given type
    pub fn new(entry_type: EntryType, data: Vec<u8>) -> Self {
        Self {
            entry_id: entry_type.id(),
            offset: 0,
            data,
        }
    }

    /// Create a data fork entry
    pub fn data_fork(data: Vec<u8>) -> Self {
        Self::new(EntryType::DataFork, data)
    }

    /// Create a resource fork entry
    pub fn resource_fork(data: Vec<u8>) -> Self {
        Self::new(EntryType::ResourceFork, data)
    }

    /// Create a real name entry from raw name bytes
    pub fn real_name(data: Vec<u8>) -> Self {
        Self::new(EntryType::RealName, data)
    }

    /// Entry type of this entry
    pub fn entry_type(&self) -> EntryType {
        EntryType::from_id(self.entry_id)
    }

    /// Payload length in bytes
    pub fn length(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_ids() {
        for id in 1..=15 {
            let entry_type = EntryType::from_id(id);
            assert_eq!(entry_type.id(), id);
            assert!(entry_type.is_known());
        }
        assert_eq!(EntryType::from_id(11), EntryType::ProdosFileInfo);
        assert_eq!(EntryType::from_id(0), EntryType::Unknown(0));
        assert_eq!(EntryType::from(99).id(), 99);
        assert!(!EntryType::Unknown(16).is_known());
    }

    #[test]
    fn test_entry_type_names() {
        assert_eq!(EntryType::DataFork.to_string(), "Data Fork");
        assert_eq!(EntryType::ProdosFileInfo.name(), "ProDOS File Info");
        assert_eq!(EntryType::Unknown(42).name(), "Unknown");
    }

    #[test]
    fn test_descriptor_parse() {
        let data = [0, 0, 0, 1, 0, 0, 0, 0x26, 0, 0, 0, 0x0E];
        let descriptor = EntryDescriptor::parse(&data).unwrap();
        assert_eq!(descriptor, EntryDescriptor::new(1, 38, 14));
        assert_eq!(descriptor.entry_type(), EntryType::DataFork);
        assert_eq!(descriptor.build(), data);
    }

    #[test]
    fn test_descriptor_parse_too_short() {
        assert!(EntryDescriptor::parse(&[0u8; 11]).is_err());
    }

    #[test]
    fn test_entry_constructors() {
        let entry = Entry::resource_fork(vec![1, 2, 3]);
        assert_eq!(entry.entry_type(), EntryType::ResourceFork);
        assert_eq!(entry.length(), 3);
        assert_eq!(entry.offset, 0);
    }
}
