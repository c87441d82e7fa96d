//! Input and output plumbing shared by the subcommands

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Read the archive bytes from either a file or stdin
///
/// Exactly one source must be chosen.
pub fn read_source(file: Option<&Path>, stdin: bool) -> Result<Vec<u8>> {
    match (file, stdin) {
        (Some(path), false) => {
            fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))
        }
        (None, true) => read_stdin(),
        _ => bail!("Please choose one of stdin or input file"),
    }
}

/// Read stdin to the end
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut data = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut data)
        .context("Failed to read stdin")?;
    Ok(data)
}

/// Write bytes to stdout and flush
pub fn write_stdout(data: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(data).context("Failed to write stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Write bytes to a file
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Parse an integer given as decimal, `0x` hex or `$` hex
pub fn parse_number(value: &str) -> Result<u32, String> {
    let value = value.trim();
    let parsed = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('$'))
    {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse::<u32>()
    };
    parsed.map_err(|e| format!("invalid number '{value}': {e}"))
}

/// Parse a 16 bit value such as ProDOS access bits
pub fn parse_u16(value: &str) -> Result<u16, String> {
    let number = parse_number(value)?;
    u16::try_from(number).map_err(|_| format!("value '{value}' does not fit in 16 bits"))
}

/// Parse a ProDOS file type given as a mnemonic or a number
pub fn parse_file_type(value: &str) -> Result<u16, String> {
    applesingle::prodos::file_type_by_name(value).map_or_else(|| parse_u16(value), Ok)
}
