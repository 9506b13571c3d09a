//! Text checks and Unicode sanitization

use std::fmt::Display;

use validator::ValidateEmail;

/// Code points removed by [`sanitize_unicode`], sorted for binary search.
///
/// Taken from the W3C "Unicode in XML" list of characters unsuitable for markup.
const BLOCKED_CODE_POINTS: &[char] = &[
    '\u{0340}', '\u{0341}', // clones of grave and acute
    '\u{17A3}', '\u{17D3}', // obsolete Khmer characters
    '\u{2028}', '\u{2029}', // line and paragraph separator
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', // bidi embedding controls
    '\u{206A}', '\u{206B}', // activate/inhibit symmetric swapping
    '\u{206C}', '\u{206D}', // activate/inhibit Arabic form shaping
    '\u{206E}', '\u{206F}', // activate/inhibit national digit shapes
    '\u{FEFF}', // byte order mark
    '\u{FFF9}', '\u{FFFA}', '\u{FFFB}', // interlinear annotation characters
    '\u{FFFC}', // object replacement character
];

/// Scoping for musical notation
const MUSICAL_SCOPING: std::ops::RangeInclusive<char> = '\u{1D173}'..='\u{1D17A}';

/// Language tag code points
const LANGUAGE_TAGS: std::ops::RangeInclusive<char> = '\u{E0000}'..='\u{E007F}';

/// Remove undesirable code points from a string
pub fn sanitize_unicode(s: &str) -> String {
    s.chars().filter(|c| !is_blocked(*c)).collect()
}

fn is_blocked(c: char) -> bool {
    BLOCKED_CODE_POINTS.binary_search(&c).is_ok()
        || MUSICAL_SCOPING.contains(&c)
        || LANGUAGE_TAGS.contains(&c)
}

/// Whether lowercasing the string leaves it unchanged
pub fn is_lower(s: &str) -> bool {
    s.to_lowercase() == s
}

/// Validate an email address.
///
/// The address must be lowercase and a bare mailbox: display-name forms
/// such as `Bob <bob@example.com>` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    is_lower(email) && email.validate_email()
}

/// Whether the value parses as a signed integer
pub fn is_valid_number_string(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// Build a strong etag from its parts
pub fn etag(parts: &[&dyn Display]) -> String {
    let mut etag = String::from("CurrentVersion");

    for part in parts {
        etag.push('.');
        etag.push_str(&part.to_string());
    }

    etag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocklist_is_sorted() {
        assert!(BLOCKED_CODE_POINTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sanitize_unicode_strips_blocked() {
        assert_eq!(sanitize_unicode("ab\u{202E}cd"), "abcd");
        assert_eq!(sanitize_unicode("\u{FEFF}name"), "name");
        assert_eq!(sanitize_unicode("a\u{1D173}b\u{1D17A}"), "ab");
        assert_eq!(sanitize_unicode("tag\u{E0041}\u{E007F}"), "tag");
        assert_eq!(sanitize_unicode("x\u{0340}\u{17D3}y"), "xy");
    }

    #[test]
    fn test_sanitize_unicode_keeps_ordinary_text() {
        assert_eq!(sanitize_unicode("Zoë Ångström"), "Zoë Ångström");
        assert_eq!(sanitize_unicode("日本語"), "日本語");
        assert_eq!(sanitize_unicode("a\u{1D172}b"), "a\u{1D172}b");
    }

    #[test]
    fn test_is_lower() {
        assert!(is_lower("abc"));
        assert!(is_lower("abc123@example.com"));
        assert!(!is_lower("Abc"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("User@example.com"));
        assert!(!is_valid_email("bob <bob@example.com>"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_number_string() {
        assert!(is_valid_number_string("42"));
        assert!(is_valid_number_string("-7"));
        assert!(!is_valid_number_string("4x"));
        assert!(!is_valid_number_string(""));
    }

    #[test]
    fn test_etag() {
        assert_eq!(etag(&[]), "CurrentVersion");
        assert_eq!(etag(&[&"abc", &12, &true]), "CurrentVersion.abc.12.true");
    }
}
