//! Base64 for the signature field
//!
//! Signed documents carry their signature as standard RFC 4648 base64
//! with `=` padding. Decoding skips `\r` and `\n` so line-wrapped output
//! (`openssl base64`, MIME encoders) loads; any other byte outside the
//! alphabet, missing padding or the URL-safe alphabet is an error.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::Result;

/// Encode bytes to standard base64 with padding.
///
/// # Example
/// ```
/// use sigdoc_crypto::hash::base64;
///
/// assert_eq!(base64::encode(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    STANDARD.encode(data)
}

/// Decode standard padded base64 to bytes, ignoring line breaks.
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>> {
    let encoded = encoded.as_ref();
    if !encoded.iter().any(|b| matches!(b, b'\r' | b'\n')) {
        return Ok(STANDARD.decode(encoded)?);
    }

    let unwrapped: Vec<u8> = encoded
        .iter()
        .copied()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    Ok(STANDARD.decode(unwrapped)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_round_trip() {
        let data: Vec<u8> = (0u8..=255).collect();
        let encoded = encode(&data);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_known_value() {
        assert_eq!(decode("SGVsbG8sIFdvcmxkIQ==").unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert!(matches!(decode("not*base64!"), Err(Error::Base64(_))));
    }

    #[test]
    fn test_rejects_missing_padding() {
        assert!(decode("SGVsbG8sIFdvcmxkIQ").is_err());
    }

    #[test]
    fn test_line_breaks_are_ignored() {
        let data: Vec<u8> = (0u8..=255).collect();
        let encoded = encode(&data);
        let wrapped: String = encoded
            .as_bytes()
            .chunks(64)
            .map(|line| format!("{}\n", std::str::from_utf8(line).unwrap()))
            .collect();
        assert_eq!(decode(&wrapped).unwrap(), data);
        assert_eq!(decode(wrapped.replace('\n', "\r\n")).unwrap(), data);
    }

    #[test]
    fn test_other_whitespace_is_rejected() {
        assert!(decode("SGVsbG8s IFdvcmxkIQ==").is_err());
        assert!(decode("SGVsbG8s\tIFdvcmxkIQ==").is_err());
    }

    #[test]
    fn test_rejects_url_safe_alphabet() {
        // 0xfb 0xff encodes to "-_8=" in the URL-safe alphabet.
        assert_eq!(encode([0xfb, 0xff]), "+/8=");
        assert!(decode("-_8=").is_err());
    }
}
