//! Globally unique identifiers

use uuid::Uuid;

/// Length of every identifier produced by [`new_id`]
pub const ID_LENGTH: usize = 26;

/// Base32 alphabet without visually ambiguous characters
const ENCODING: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Generate a new identifier.
///
/// A random (v4) UUID encoded with a custom base32 alphabet, padding
/// stripped, giving a 26 character alphanumeric string.
pub fn new_id() -> String {
    encode(Uuid::new_v4().as_bytes())
}

/// Check that a value has the shape of an identifier
pub fn is_valid_id(value: &str) -> bool {
    value.len() == ID_LENGTH && value.chars().all(char::is_alphanumeric)
}

fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            out.push(ENCODING[usize::from((buffer >> bits) & 0x1f)] as char);
        }

        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ENCODING[usize::from((buffer << (5 - bits)) & 0x1f)] as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_id_shape() {
        let id = new_id();

        assert_eq!(id.len(), ID_LENGTH);
        assert!(is_valid_id(&id));
        assert!(id.bytes().all(|b| ENCODING.contains(&b)));
    }

    #[test]
    fn test_new_id_is_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(&[0u8; 16]), "y".repeat(26));
        assert_eq!(encode(&[0xff]), "9h");
        assert_eq!(encode(&[0xff; 16]).len(), 26);
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("abcdefghijklmnopqrstuvwxyz"));
        assert!(is_valid_id("ABCDEFGHIJKLMNOPQRSTUVWXY1"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxy"));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxyz1"));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxy-"));
        assert!(!is_valid_id("abcdefghijklmnopqrstuvwxy_"));
    }
}
