//! Helpers for characters.

/// Checks if the given character matches `unreserved` rule.
///
/// ```text
/// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// ```
#[inline]
#[must_use]
pub(crate) fn is_unreserved(c: char) -> bool {
    c.is_ascii() && is_ascii_unreserved(c as u8)
}

/// Checks if the given ASCII byte matches `unreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character matches `sub-delims` rule.
#[inline]
#[must_use]
pub(crate) fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Checks if the given character matches `ucschar` rule of RFC 3987.
pub(crate) fn is_ucschar(c: char) -> bool {
    matches!(
        u32::from(c),
        0xA0..=0xD7FF |
        0xF900..=0xFDCF |
        0xFDF0..=0xFFEF |
        0x1_0000..=0x1_FFFD |
        0x2_0000..=0x2_FFFD |
        0x3_0000..=0x3_FFFD |
        0x4_0000..=0x4_FFFD |
        0x5_0000..=0x5_FFFD |
        0x6_0000..=0x6_FFFD |
        0x7_0000..=0x7_FFFD |
        0x8_0000..=0x8_FFFD |
        0x9_0000..=0x9_FFFD |
        0xA_0000..=0xA_FFFD |
        0xB_0000..=0xB_FFFD |
        0xC_0000..=0xC_FFFD |
        0xD_0000..=0xD_FFFD |
        0xE_1000..=0xE_FFFD
    )
}

/// Checks if the given character matches `scheme` rule except for the first character.
///
/// ```text
/// scheme      = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
#[inline]
#[must_use]
pub(crate) fn is_ascii_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Returns true if the given byte can be a continuation byte of a UTF-8 sequence.
#[inline]
#[must_use]
pub(crate) fn is_utf8_byte_continue(b: u8) -> bool {
    (b & 0xc0) == 0x80
}

/// Returns the value of the given hexadecimal digit.
#[inline]
#[must_use]
pub(crate) fn hexdigit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
