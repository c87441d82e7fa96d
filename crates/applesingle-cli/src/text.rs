//! Apple II text conversion
//!
//! Apple II text files use CR line endings and high-bit ASCII.

/// Convert host text in place: LF becomes CR and every byte gets the high bit
pub fn to_apple_text(data: &mut [u8]) {
    for byte in data.iter_mut() {
        if *byte == b'\n' {
            *byte = b'\r';
        }
        *byte |= 0x80;
    }
}

/// Convert Apple II text in place: clear the high bit, CR becomes LF
pub fn from_apple_text(data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte &= 0x7F;
        if *byte == b'\r' {
            *byte = b'\n';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_apple_text() {
        let mut data = b"HI\nTHERE\n".to_vec();
        to_apple_text(&mut data);
        assert_eq!(
            data,
            vec![0xC8, 0xC9, 0x8D, 0xD4, 0xC8, 0xC5, 0xD2, 0xC5, 0x8D]
        );
    }

    #[test]
    fn test_from_apple_text() {
        let mut data = vec![0xC8, 0xC9, 0x8D, 0x0D, 0x41];
        from_apple_text(&mut data);
        assert_eq!(data, b"HI\n\nA".to_vec());
    }

    #[test]
    fn test_conversion_inverts_for_plain_ascii() {
        let original = b"10 PRINT \"HELLO\"\n20 GOTO 10\n".to_vec();
        let mut data = original.clone();
        to_apple_text(&mut data);
        from_apple_text(&mut data);
        assert_eq!(data, original);
    }
}
