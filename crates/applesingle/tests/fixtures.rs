#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests against stored AppleSingle files
//!
//! `hello.as` is the minimal single-entry version 2 file. `legacy_v1.as` is a
//! version 1 file with a Finder Info entry and payloads stored in reverse
//! directory order.

use applesingle::{AppleSingle, ArchiveReader, Entry, EntryType, UNKNOWN_DATE, write_entries};
use pretty_assertions::assert_eq;
use std::path::Path;

fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

// --- hello.as ---

#[test]
fn hello_decodes() {
    let archive = AppleSingle::read(&fixture("hello.as")).unwrap();
    assert_eq!(archive.data_fork(), Some(&b"Hello, World!\n"[..]));
    assert_eq!(archive.resource_fork(), None);
    assert_eq!(archive.real_name(), None);
}

#[test]
fn hello_reencodes_byte_exact() {
    let data = fixture("hello.as");
    let entries = AppleSingle::read_entries(&data).unwrap();
    assert_eq!(write_entries(&entries).unwrap(), data);
}

#[test]
fn hello_read_trace() {
    let data = fixture("hello.as");
    let mut reads = Vec::new();
    ArchiveReader::new()
        .on_read(|read| reads.push((read.start, read.len(), read.description.to_string())))
        .read_entries(&data)
        .unwrap();

    assert_eq!(
        reads,
        vec![
            (0, 4, "Magic number".to_string()),
            (4, 4, "Version".to_string()),
            (8, 16, "Filler".to_string()),
            (24, 2, "Number of entries".to_string()),
            (26, 12, "Entry header".to_string()),
            (38, 14, "Data Fork".to_string()),
        ]
    );
}

// --- legacy_v1.as ---

#[test]
fn legacy_decodes_all_interpreted_entries() {
    let archive = AppleSingle::read(&fixture("legacy_v1.as")).unwrap();

    assert_eq!(archive.real_name(), Some("DEMO"));
    assert_eq!(archive.data_fork(), Some(&b"10 PRINT \"HI\"\r"[..]));
    assert_eq!(archive.resource_fork(), Some(&b"RSRC"[..]));

    let prodos = archive.prodos_info();
    assert_eq!(
        (prodos.access, prodos.file_type, prodos.aux_type),
        (0xC3, 0xFC, 0x0801)
    );

    let dates = archive.dates_info();
    assert_eq!(dates.creation, 0);
    assert_eq!(dates.modification, 3600);
    assert_eq!(dates.backup, UNKNOWN_DATE);
    assert_eq!(dates.access, 86400);
    assert_eq!(
        dates.creation_instant().map(|d| d.to_rfc3339()),
        Some("2000-01-01T00:00:00+00:00".to_string())
    );
}

#[test]
fn legacy_version_is_reported() {
    let mut versions = Vec::new();
    let mut counts = Vec::new();
    ArchiveReader::new()
        .on_version(|v| versions.push(v))
        .on_entry_count(|c| counts.push(c))
        .read_entries(&fixture("legacy_v1.as"))
        .unwrap();
    assert_eq!(versions, vec![0x0001_0000]);
    assert_eq!(counts, vec![6]);
}

#[test]
fn legacy_entries_keep_finder_info() {
    let data = fixture("legacy_v1.as");
    let entries = AppleSingle::read_entries(&data).unwrap();
    let types: Vec<EntryType> = entries.iter().map(Entry::entry_type).collect();
    assert_eq!(
        types,
        vec![
            EntryType::RealName,
            EntryType::FinderInfo,
            EntryType::ProdosFileInfo,
            EntryType::FileDatesInfo,
            EntryType::DataFork,
            EntryType::ResourceFork,
        ]
    );

    // Rewriting relocates payloads but keeps every entry's content
    let rewritten = write_entries(&entries).unwrap();
    assert_eq!(rewritten.len(), data.len());
    assert_ne!(rewritten, data);
    let reread = AppleSingle::read_entries(&rewritten).unwrap();
    for (before, after) in entries.iter().zip(&reread) {
        assert_eq!(before.entry_id, after.entry_id);
        assert_eq!(before.data, after.data);
    }
    assert_eq!(reread[1].data, (0u8..32).collect::<Vec<_>>());
}

#[test]
fn legacy_structured_write_is_canonical() {
    let archive = AppleSingle::read(&fixture("legacy_v1.as")).unwrap();
    let written = archive.write().unwrap();

    // Version 2 on output, Finder Info dropped by the structured view
    assert_eq!(&written[4..8], &[0x00, 0x02, 0x00, 0x00]);
    let entries = AppleSingle::read_entries(&written).unwrap();
    let ids: Vec<u32> = entries.iter().map(|e| e.entry_id).collect();
    assert_eq!(ids, vec![3, 11, 8, 2, 1]);

    assert_eq!(AppleSingle::read(&written).unwrap(), archive);
}
