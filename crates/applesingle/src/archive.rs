//! Structured view of an AppleSingle archive

use crate::builder::AppleSingleBuilder;
use crate::dates::FileDatesInfo;
use crate::entry::Entry;
use crate::error::Result;
use crate::payload::Payload;
use crate::prodos::ProdosFileInfo;
use crate::reader::ArchiveReader;
use crate::writer;
use std::io::Write;

/// Decoded or constructed AppleSingle file
///
/// Holds the five interpreted entry types. Entries of any other type are not
/// represented here; use [`AppleSingle::read_entries`] together with
/// [`writer::write_entries`] when they must survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleSingle {
    pub(crate) data_fork: Option<Vec<u8>>,
    pub(crate) resource_fork: Option<Vec<u8>>,
    pub(crate) real_name: Option<String>,
    pub(crate) prodos_info: ProdosFileInfo,
    pub(crate) dates_info: FileDatesInfo,
}

impl AppleSingle {
    /// Start building a new archive
    pub fn builder() -> AppleSingleBuilder {
        AppleSingleBuilder::new()
    }

    /// Archive with no forks, standard BIN ProDOS info and all dates "now"
    pub(crate) fn empty() -> Self {
        Self {
            data_fork: None,
            resource_fork: None,
            real_name: None,
            prodos_info: ProdosFileInfo::standard_bin(),
            dates_info: FileDatesInfo::now(),
        }
    }

    /// Decode an archive from a complete buffer
    pub fn read(data: &[u8]) -> Result<Self> {
        ArchiveReader::new().read_archive(data)
    }

    /// Decode every entry, including types this crate does not interpret
    pub fn read_entries(data: &[u8]) -> Result<Vec<Entry>> {
        ArchiveReader::new().read_entries(data)
    }

    /// Assemble an archive from decoded entries
    ///
    /// Entries are applied in order, so a repeated type keeps its last value.
    /// Uninterpreted types are skipped.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut archive = Self::empty();
        for entry in entries {
            match Payload::decode(entry)? {
                Payload::DataFork(data) => archive.data_fork = Some(data),
                Payload::ResourceFork(data) => archive.resource_fork = Some(data),
                Payload::RealName(name) => archive.real_name = Some(name),
                Payload::FileDates(info) => archive.dates_info = info,
                Payload::Prodos(info) => archive.prodos_info = info,
                Payload::Opaque { entry_id, data } => {
                    tracing::debug!(
                        "Skipping uninterpreted entry {entry_id} ({} bytes)",
                        data.len()
                    );
                }
            }
        }
        Ok(archive)
    }

    /// Entries in canonical write order
    ///
    /// Real name (if present), ProDOS info, file dates, resource fork (if
    /// present), data fork (if present).
    pub fn to_entries(&self) -> Vec<Entry> {
        let mut payloads = Vec::with_capacity(5);
        if let Some(name) = &self.real_name {
            payloads.push(Payload::RealName(name.clone()));
        }
        payloads.push(Payload::Prodos(self.prodos_info));
        payloads.push(Payload::FileDates(self.dates_info));
        if let Some(data) = &self.resource_fork {
            payloads.push(Payload::ResourceFork(data.clone()));
        }
        if let Some(data) = &self.data_fork {
            payloads.push(Payload::DataFork(data.clone()));
        }
        payloads.iter().map(Payload::encode).collect()
    }

    /// Serialize the archive
    pub fn write(&self) -> Result<Vec<u8>> {
        writer::write_entries(&self.to_entries())
    }

    /// Serialize the archive into a sink
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        writer::write_entries_to(&self.to_entries(), sink)
    }

    /// Data fork, if present
    pub fn data_fork(&self) -> Option<&[u8]> {
        self.data_fork.as_deref()
    }

    /// Resource fork, if present
    pub fn resource_fork(&self) -> Option<&[u8]> {
        self.resource_fork.as_deref()
    }

    /// Real name, if present
    pub fn real_name(&self) -> Option<&str> {
        self.real_name.as_deref()
    }

    /// ProDOS file info
    pub fn prodos_info(&self) -> &ProdosFileInfo {
        &self.prodos_info
    }

    /// File dates info
    pub fn dates_info(&self) -> &FileDatesInfo {
        &self.dates_info
    }

    /// Take ownership of the forks, consuming the archive
    pub fn into_forks(self) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
        (self.data_fork, self.resource_fork)
    }
}
