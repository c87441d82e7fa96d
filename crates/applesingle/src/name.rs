//! Real name payload and ProDOS file name rules

use crate::error::{AppleSingleError, Result};

/// Longest file name ProDOS accepts
pub const MAX_NAME_LENGTH: usize = 15;

/// Decode a real name payload as 7-bit ASCII
///
/// Apple II software frequently stores text with the high bit set, so every
/// byte is masked with 0x7F before conversion.
pub fn decode_real_name(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b & 0x7F)).collect()
}

/// Encode a real name as payload bytes
///
/// Names reach an archive either decoded (already 7-bit) or sanitized, so the
/// bytes are written as they are.
pub fn encode_real_name(name: &str) -> Vec<u8> {
    name.as_bytes().to_vec()
}

/// Convert an arbitrary name into a valid ProDOS file name
///
/// The name must start with an ASCII letter. Letters and digits are upper
/// cased, everything else becomes `.`, and the result is cut to
/// [`MAX_NAME_LENGTH`] characters.
pub fn sanitize_prodos_name(name: &str) -> Result<String> {
    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => Ok(name
            .chars()
            .map(sanitize_char)
            .take(MAX_NAME_LENGTH)
            .collect()),
        _ => Err(AppleSingleError::InvalidRealName(name.to_string())),
    }
}

fn sanitize_char(ch: char) -> char {
    if ch.is_ascii_alphanumeric() {
        ch.to_ascii_uppercase()
    } else {
        '.'
    }
}
