//! `asu info`

use crate::input::read_source;
use anyhow::{Context, Result};
use applesingle::AppleSingle;
use applesingle::dates::instant_from_seconds;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for `info`
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Read the AppleSingle file from stdin
    #[arg(long)]
    pub stdin: bool,

    /// File to process
    pub file: Option<PathBuf>,
}

/// Print a summary of an archive
pub fn handle(args: &InfoArgs) -> Result<()> {
    let data = read_source(args.file.as_deref(), args.stdin)?;
    let archive = AppleSingle::read(&data).context("Not a readable AppleSingle file")?;
    let mut stdout = std::io::stdout().lock();
    render(&archive, &mut stdout)?;
    Ok(())
}

/// Write the report for `archive`
pub fn render<W: Write>(archive: &AppleSingle, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Real Name: {}", archive.real_name().unwrap_or("-Unknown-"))?;

    let prodos = archive.prodos_info();
    writeln!(out, "ProDOS info:")?;
    writeln!(out, "  Access: 0x{:02X}", prodos.access)?;
    writeln!(out, "  File Type: 0x{:02X}", prodos.file_type)?;
    writeln!(out, "  Auxtype: 0x{:04X}", prodos.aux_type)?;

    let dates = archive.dates_info();
    writeln!(out, "File dates info:")?;
    writeln!(out, "  Creation: {}", format_date(dates.creation))?;
    writeln!(out, "  Modification: {}", format_date(dates.modification))?;
    writeln!(out, "  Access: {}", format_date(dates.access))?;
    writeln!(out, "  Backup: {}", format_date(dates.backup))?;

    writeln!(out, "Data Fork: {}", format_fork(archive.data_fork()))?;
    writeln!(out, "Resource Fork: {}", format_fork(archive.resource_fork()))?;
    Ok(())
}

/// RFC 3339 rendering of a stored date
pub fn format_date(seconds: i32) -> String {
    instant_from_seconds(seconds).map_or_else(|| "Unknown".to_string(), |d| d.to_rfc3339())
}

fn format_fork(fork: Option<&[u8]>) -> String {
    fork.map_or_else(
        || "Not present".to_string(),
        |data| format!("Present, {} bytes", data.len()),
    )
}
