//! `asu analyze`
//!
//! Walks the archive with an [`ArchiveReader`] and reports every read it
//! makes, then checks that the reads covered the whole file.

use crate::commands::info::format_date;
use crate::coverage::{Coverage, format_ranges};
use crate::hexdump;
use crate::input::read_source;
use anyhow::Result;
use applesingle::dates::FileDatesInfo;
use applesingle::name::decode_real_name;
use applesingle::prodos::ProdosFileInfo;
use applesingle::{ArchiveReader, Entry, EntryType};
use clap::Args;
use std::cell::RefCell;
use std::path::PathBuf;

/// Arguments for `analyze`
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Read the AppleSingle file from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Hex dump every region read
    #[arg(short, long)]
    pub verbose: bool,

    /// File to process
    pub file: Option<PathBuf>,
}

/// Analysis of one archive
#[derive(Debug, Default)]
pub struct Analysis {
    /// Report lines in the order they were produced
    pub lines: Vec<String>,
    /// Byte ranges the reader touched
    pub coverage: Coverage,
}

/// Analyze `data`, returning what was learned even when decoding fails
pub fn analyze(data: &[u8], verbose: bool) -> (Analysis, Result<()>) {
    let analysis = RefCell::new(Analysis::default());
    let result = ArchiveReader::new()
        .on_read(|read| {
            let mut analysis = analysis.borrow_mut();
            analysis.coverage.record(read.start..read.end());
            if verbose {
                let lines = hexdump::dump(read.start, read.data, read.description);
                analysis.lines.extend(lines);
            }
        })
        .on_version(|version| {
            analysis
                .borrow_mut()
                .lines
                .push(format!(" .. Version 0x{version:08x}"));
        })
        .on_entry_count(|count| {
            analysis
                .borrow_mut()
                .lines
                .push(format!(" .. Entries = {count}"));
        })
        .on_entry(|entry| {
            analysis.borrow_mut().lines.extend(describe_entry(entry));
        })
        .read_entries(data)
        .map(|_| ());

    let mut analysis = analysis.into_inner();
    if result.is_ok() {
        let ranges = analysis.coverage.normalized();
        if analysis.coverage.covers_all(data.len()) {
            analysis
                .lines
                .push("The entirety of the file was used.".to_string());
        } else {
            analysis.lines.push("Parts of the file were skipped!".to_string());
            analysis
                .lines
                .push(format!("  - Expected: {}", format_ranges(&[0..data.len()])));
            analysis
                .lines
                .push(format!("  - Actual:   {}", format_ranges(&ranges)));
        }
    }
    (analysis, result.map_err(anyhow::Error::from))
}

/// Human readable details for an entry
pub fn describe_entry(entry: &Entry) -> Vec<String> {
    let entry_type = entry.entry_type();
    let mut lines = vec![format!(
        " .. Entry id={} ({}), offset={}, length={}",
        entry.entry_id,
        entry_type,
        entry.offset,
        entry.length()
    )];
    match entry_type {
        EntryType::RealName | EntryType::Comment | EntryType::ShortName => {
            lines.push(format!(
                " .. {entry_type}: '{}'",
                decode_real_name(&entry.data)
            ));
        }
        EntryType::FileDatesInfo => match FileDatesInfo::parse(&entry.data) {
            Ok(info) => {
                lines.push(format!(" .. {entry_type} -"));
                lines.push(format!("           Creation: {}", format_date(info.creation)));
                lines.push(format!(
                    "       Modification: {}",
                    format_date(info.modification)
                ));
                lines.push(format!("             Backup: {}", format_date(info.backup)));
                lines.push(format!("             Access: {}", format_date(info.access)));
            }
            Err(err) => lines.push(format!(" .. {entry_type}: {err}")),
        },
        EntryType::ProdosFileInfo => match ProdosFileInfo::parse(&entry.data) {
            Ok(info) => {
                lines.push(format!(" .. {entry_type} -"));
                lines.push(format!("             Access: {:02X}", info.access));
                lines.push(format!("          File Type: {:04X}", info.file_type));
                lines.push(format!("          Aux. Type: {:04X}", info.aux_type));
            }
            Err(err) => lines.push(format!(" .. {entry_type}: {err}")),
        },
        _ if !entry_type.is_known() => lines.push(format!(
            " .. Entry type id {} is not defined by the format.",
            entry.entry_id
        )),
        _ => lines.push(format!(
            " .. No further details for this entry type ({entry_type})."
        )),
    }
    lines
}

/// Analyze an archive and print the report
pub fn handle(args: &AnalyzeArgs) -> Result<()> {
    let data = read_source(args.file.as_deref(), args.stdin)?;
    let (analysis, result) = analyze(&data, args.verbose);
    for line in &analysis.lines {
        println!("{line}");
    }
    result
}
