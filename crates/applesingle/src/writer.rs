//! Archive serialization
//!
//! The writer produces a single canonical layout: header, every descriptor in
//! the given order, then every payload in the same order with no gaps. Offsets
//! are recomputed from scratch, so entries decoded from a file with a
//! different layout can be written back unchanged in content.

use crate::entry::{DESCRIPTOR_SIZE, Entry, EntryDescriptor};
use crate::error::{AppleSingleError, Result};
use crate::header::{HEADER_SIZE, encode};
use std::io::Write;
use tracing::debug;

/// Compute descriptors for `entries` laid out contiguously after the directory
pub fn layout(entries: &[Entry]) -> Result<Vec<EntryDescriptor>> {
    if entries.len() > usize::from(u16::MAX) {
        return Err(AppleSingleError::TooManyEntries(entries.len()));
    }

    let mut offset = (HEADER_SIZE + DESCRIPTOR_SIZE * entries.len()) as u64;
    let mut descriptors = Vec::with_capacity(entries.len());
    for entry in entries {
        let length = entry.length() as u64;
        let end = offset + length;
        if end > u64::from(u32::MAX) {
            return Err(AppleSingleError::ArchiveTooLarge(end));
        }
        descriptors.push(EntryDescriptor::new(
            entry.entry_id,
            offset as u32,
            length as u32,
        ));
        offset = end;
    }
    Ok(descriptors)
}

/// Serialize entries in the given order
pub fn write_entries(entries: &[Entry]) -> Result<Vec<u8>> {
    let descriptors = layout(entries)?;
    let total = descriptors
        .last()
        .map_or(HEADER_SIZE, |d| (d.offset + d.length) as usize);

    let mut out = Vec::with_capacity(total);
    emit(entries, &descriptors, &mut out)?;

    debug!("Wrote {} entries, {} bytes", entries.len(), out.len());
    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Serialize entries into a sink
pub fn write_entries_to<W: Write>(entries: &[Entry], sink: &mut W) -> Result<()> {
    let descriptors = layout(entries)?;
    emit(entries, &descriptors, sink)
}

fn emit<W: Write>(
    entries: &[Entry],
    descriptors: &[EntryDescriptor],
    sink: &mut W,
) -> Result<()> {
    sink.write_all(&encode(descriptors.len() as u16))?;
    for descriptor in descriptors {
        sink.write_all(&descriptor.build())?;
    }
    for entry in entries {
        sink.write_all(&entry.data)?;
    }
    Ok(())
}
