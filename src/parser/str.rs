//! Functions for common string operations.

#[cfg(feature = "memchr")]
use memchr::{memchr, memchr2, memchr3, memrchr};

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the position of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the position of the first occurrence of either of the given bytes.
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr2(needle1, needle2, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle1 || b == needle2)
    }
}

/// Returns the position of the first occurrence of any of the given bytes.
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Splits the string at the first occurrence of the byte, and drops the byte.
///
/// Returns `None` if the byte is not found.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte, and drops the byte.
///
/// Returns `None` if the byte is not found.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    rfind(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either byte, and keeps the byte in the rest.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    find2(s.as_bytes(), needle1, needle2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes, and keeps the byte in the rest.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    find3(s.as_bytes(), needle1, needle2, needle3).map(|pos| s.split_at(pos))
}

/// Returns the first two bytes decoded as a percent-encoded triplet body.
///
/// Returns `None` if the string does not start with two hexadecimal digits.
#[must_use]
pub(crate) fn take_xdigits2(s: &str) -> Option<(u8, &str)> {
    use crate::parser::char::hexdigit_value;

    let bytes = s.as_bytes();
    let upper = hexdigit_value(*bytes.first()?)?;
    let lower = hexdigit_value(*bytes.get(1)?)?;
    Some(((upper << 4) | lower, &s[2..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hole() {
        assert_eq!(find_split_hole("a:b:c", b':'), Some(("a", "b:c")));
        assert_eq!(rfind_split_hole("a:b:c", b':'), Some(("a:b", "c")));
        assert_eq!(find_split_hole("abc", b':'), None);
    }

    #[test]
    fn split_keeping_delimiter() {
        assert_eq!(find_split3("host/p?q#f", b'/', b'?', b'#'), Some(("host", "/p?q#f")));
        assert_eq!(find_split2("path#f?x", b'?', b'#'), Some(("path", "#f?x")));
        assert_eq!(find_split2("path", b'?', b'#'), None);
    }

    #[test]
    fn xdigits2() {
        assert_eq!(take_xdigits2("7erest"), Some((0x7e, "rest")));
        assert_eq!(take_xdigits2("2F"), Some((0x2f, "")));
        assert_eq!(take_xdigits2("-off"), None);
        assert_eq!(take_xdigits2("a"), None);
        assert_eq!(take_xdigits2(""), None);
    }
}
