//! Hex dump formatting for `analyze`

use std::fmt::Write;

/// Bytes shown per line
pub const LINE_WIDTH: usize = 16;

/// Format `data` as hex dump lines starting at `address`
///
/// The description is printed on the first line only. An empty slice still
/// produces one line, marked `(empty)`.
pub fn dump(address: usize, data: &[u8], description: &str) -> Vec<String> {
    if data.is_empty() {
        return vec![line(address, data, &format!("{description} (empty)"))];
    }
    data.chunks(LINE_WIDTH)
        .enumerate()
        .map(|(i, chunk)| {
            let label = if i == 0 { description } else { "" };
            line(address + i * LINE_WIDTH, chunk, label)
        })
        .collect()
}

/// Format a single line of at most [`LINE_WIDTH`] bytes
pub fn line(address: usize, data: &[u8], description: &str) -> String {
    let mut out = format!("{address:04x}: ");
    for i in 0..LINE_WIDTH {
        match data.get(i) {
            Some(byte) => {
                let _ = write!(out, "{byte:02x} ");
            }
            None => out.push_str(".. "),
        }
    }
    out.push_str("| ");
    for i in 0..LINE_WIDTH {
        let ch = match data.get(i) {
            Some(&byte) if (0x20..0x7F).contains(&byte) => char::from(byte),
            Some(_) => '.',
            None => ' ',
        };
        out.push(ch);
    }
    out.push_str(" | ");
    out.push_str(description);
    out
}
