//! Percent-encoding for fragment keys and values.

use crate::error::DecodeError;

/// Characters written as is by [`encode`], besides ASCII alphanumerics.
const UNESCAPED: &str = "-._~:,@!$'()*+;/";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes `%XX` escapes, interpreting the resulting octets as UTF-8.
///
/// Every other character, `+` included, is kept as written.
///
/// # Errors
///
/// Returns `DecodeError` if an escape is truncated or not hexadecimal, or if
/// the decoded octets are not valid UTF-8.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or(DecodeError::InvalidEscape { position: i })?;
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)
}

/// Escapes everything that could be mistaken for a separator or escape.
#[must_use]
pub fn encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || UNESCAPED.contains(c) {
            encoded.push(c);
        } else {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push('%');
                encoded.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                encoded.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
        }
    }
    encoded
}
