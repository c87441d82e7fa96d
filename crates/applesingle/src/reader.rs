//! Archive reader with observation hooks
//!
//! The reader walks the header and directory sequentially and fetches each
//! payload with a separate absolute-offset read. Tools such as hex dumpers or
//! coverage audits register observers instead of re-implementing the walk:
//!
//! ```rust
//! use applesingle::ArchiveReader;
//!
//! # let data = applesingle::AppleSingle::builder().build().write()?;
//! let mut reads = Vec::new();
//! let entries = ArchiveReader::new()
//!     .on_version(|version| println!("version 0x{version:08x}"))
//!     .on_read(|read| reads.push((read.start, read.data.len())))
//!     .read_entries(&data)?;
//! # assert_eq!(entries.len(), 2);
//! # Ok::<(), applesingle::AppleSingleError>(())
//! ```
//!
//! Every registered observer fires, in registration order.

use crate::archive::AppleSingle;
use crate::cursor::ByteCursor;
use crate::entry::{DESCRIPTOR_SIZE, Entry, EntryDescriptor};
use crate::error::Result;
use crate::header::{HeaderEvent, decode_from};
use tracing::{debug, trace};

pub use crate::cursor::ByteRead;

type VersionObserver<'o> = Box<dyn FnMut(u32) + 'o>;
type EntryCountObserver<'o> = Box<dyn FnMut(u16) + 'o>;
type EntryObserver<'o> = Box<dyn FnMut(&Entry) + 'o>;
type ReadObserver<'o> = Box<dyn FnMut(&ByteRead<'_>) + 'o>;

/// Decoder for AppleSingle buffers
#[derive(Default)]
pub struct ArchiveReader<'o> {
    version_observers: Vec<VersionObserver<'o>>,
    entry_count_observers: Vec<EntryCountObserver<'o>>,
    entry_observers: Vec<EntryObserver<'o>>,
    read_observers: Vec<ReadObserver<'o>>,
}

impl<'o> ArchiveReader<'o> {
    /// Create a reader with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the header version once it has been validated
    pub fn on_version(mut self, observer: impl FnMut(u32) + 'o) -> Self {
        self.version_observers.push(Box::new(observer));
        self
    }

    /// Observe the number of entries announced by the header
    pub fn on_entry_count(mut self, observer: impl FnMut(u16) + 'o) -> Self {
        self.entry_count_observers.push(Box::new(observer));
        self
    }

    /// Observe each entry after its payload has been read
    pub fn on_entry(mut self, observer: impl FnMut(&Entry) + 'o) -> Self {
        self.entry_observers.push(Box::new(observer));
        self
    }

    /// Observe every physical read of the buffer
    pub fn on_read(mut self, observer: impl FnMut(&ByteRead<'_>) + 'o) -> Self {
        self.read_observers.push(Box::new(observer));
        self
    }

    /// Decode the header and all entries, in directory order
    pub fn read_entries(&mut self, data: &[u8]) -> Result<Vec<Entry>> {
        let mut cursor = ByteCursor::new(data);

        let (version, entry_count) = decode_from(&mut cursor, |event| match event {
            HeaderEvent::Read(read) => self.report_read(&read),
            HeaderEvent::Version(version) => {
                for observer in &mut self.version_observers {
                    observer(version);
                }
            }
            HeaderEvent::EntryCount(count) => {
                for observer in &mut self.entry_count_observers {
                    observer(count);
                }
            }
        })?;
        debug!(
            "AppleSingle version 0x{version:08x} with {entry_count} entries ({} bytes)",
            data.len()
        );

        let mut entries = Vec::with_capacity(usize::from(entry_count));
        for _ in 0..entry_count {
            let descriptor =
                EntryDescriptor::parse(self.read(&mut cursor, DESCRIPTOR_SIZE, "Entry header")?)?;
            let entry_type = descriptor.entry_type();
            let payload = self.read_at(
                &cursor,
                descriptor.offset as usize,
                descriptor.length as usize,
                entry_type.name(),
            )?;

            let entry = Entry {
                entry_id: descriptor.entry_id,
                offset: descriptor.offset,
                data: payload.to_vec(),
            };
            debug!(
                "Entry {} ({entry_type}) at offset {}, {} bytes",
                entry.entry_id,
                entry.offset,
                entry.length()
            );
            for observer in &mut self.entry_observers {
                observer(&entry);
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Decode the buffer into the structured archive view
    pub fn read_archive(&mut self, data: &[u8]) -> Result<AppleSingle> {
        let entries = self.read_entries(data)?;
        AppleSingle::from_entries(entries)
    }

    fn read<'d>(
        &mut self,
        cursor: &mut ByteCursor<'d>,
        len: usize,
        description: &str,
    ) -> Result<&'d [u8]> {
        let start = cursor.position();
        let data = cursor.read(len)?;
        self.report_read(&ByteRead {
            start,
            data,
            description,
        });
        Ok(data)
    }

    fn read_at<'d>(
        &mut self,
        cursor: &ByteCursor<'d>,
        start: usize,
        len: usize,
        description: &str,
    ) -> Result<&'d [u8]> {
        let data = cursor.read_at(start, len)?;
        self.report_read(&ByteRead {
            start,
            data,
            description,
        });
        Ok(data)
    }

    fn report_read(&mut self, read: &ByteRead<'_>) {
        trace!("Read {} bytes at {}: {}", read.len(), read.start, read.description);
        for observer in &mut self.read_observers {
            observer(read);
        }
    }
}

impl std::fmt::Debug for ArchiveReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveReader")
            .field("version_observers", &self.version_observers.len())
            .field("entry_count_observers", &self.entry_count_observers.len())
            .field("entry_observers", &self.entry_observers.len())
            .field("read_observers", &self.read_observers.len())
            .finish()
    }
}
