//! Per-type payload interpretation
//!
//! Only data fork, resource fork, real name, file dates info and ProDOS file
//! info are interpreted. Every other entry type is carried as opaque bytes so
//! that entry-level tools never lose data.

use crate::dates::FileDatesInfo;
use crate::entry::{Entry, EntryType};
use crate::error::Result;
use crate::name::{decode_real_name, encode_real_name};
use crate::prodos::ProdosFileInfo;

/// Decoded entry payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Data fork bytes
    DataFork(Vec<u8>),
    /// Resource fork bytes
    ResourceFork(Vec<u8>),
    /// Real name, 7-bit ASCII
    RealName(String),
    /// File dates
    FileDates(FileDatesInfo),
    /// ProDOS attributes
    Prodos(ProdosFileInfo),
    /// Any other entry type, kept verbatim
    Opaque {
        /// Entry type id
        entry_id: u32,
        /// Raw payload
        data: Vec<u8>,
    },
}

impl Payload {
    /// Interpret an entry's payload according to its type
    pub fn decode(entry: Entry) -> Result<Self> {
        let payload = match entry.entry_type() {
            EntryType::DataFork => Self::DataFork(entry.data),
            EntryType::ResourceFork => Self::ResourceFork(entry.data),
            EntryType::RealName => Self::RealName(decode_real_name(&entry.data)),
            EntryType::FileDatesInfo => Self::FileDates(FileDatesInfo::parse(&entry.data)?),
            EntryType::ProdosFileInfo => Self::Prodos(ProdosFileInfo::parse(&entry.data)?),
            _ => Self::Opaque {
                entry_id: entry.entry_id,
                data: entry.data,
            },
        };
        Ok(payload)
    }

    /// Turn the payload back into an entry
    pub fn encode(&self) -> Entry {
        match self {
            Self::DataFork(data) => Entry::data_fork(data.clone()),
            Self::ResourceFork(data) => Entry::resource_fork(data.clone()),
            Self::RealName(name) => Entry::real_name(encode_real_name(name)),
            Self::FileDates(info) => Entry::new(EntryType::FileDatesInfo, info.build().to_vec()),
            Self::Prodos(info) => Entry::new(EntryType::ProdosFileInfo, info.build().to_vec()),
            Self::Opaque { entry_id, data } => Entry {
                entry_id: *entry_id,
                offset: 0,
                data: data.clone(),
            },
        }
    }

    /// Entry type this payload belongs to
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::DataFork(_) => EntryType::DataFork,
            Self::ResourceFork(_) => EntryType::ResourceFork,
            Self::RealName(_) => EntryType::RealName,
            Self::FileDates(_) => EntryType::FileDatesInfo,
            Self::Prodos(_) => EntryType::ProdosFileInfo,
            Self::Opaque { entry_id, .. } => EntryType::from_id(*entry_id),
        }
    }
}
