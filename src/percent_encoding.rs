//! Percent encoding and decoding.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::parser::char::{is_sub_delim, is_unreserved};
use crate::parser::str::{find, take_xdigits2};

/// Decodes all well-formed percent-encoded triplets in the given string.
///
/// Decoded bytes that do not form valid UTF-8 are replaced with
/// `U+FFFD REPLACEMENT CHARACTER`. A `%` which does not start a triplet is
/// kept as is.
///
/// # Examples
///
/// ```
/// use uri_canon::percent_encoding::decode;
///
/// assert_eq!(decode("caf%C3%A9%20au%20lait"), "café au lait");
/// assert_eq!(decode("100%-off"), "100%-off");
/// ```
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    if find(s.as_bytes(), b'%').is_none() {
        return Cow::Borrowed(s);
    }

    let mut decoded = Vec::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = find(rest.as_bytes(), b'%') {
        decoded.extend_from_slice(rest[..pos].as_bytes());
        let after_percent = &rest[(pos + 1)..];
        match take_xdigits2(after_percent) {
            Some((byte, after_triplet)) => {
                decoded.push(byte);
                rest = after_triplet;
            }
            None => {
                decoded.push(b'%');
                rest = after_percent;
            }
        }
    }
    decoded.extend_from_slice(rest.as_bytes());

    match String::from_utf8(decoded) {
        Ok(s) => Cow::Owned(s),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

/// Component in which a string is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Context {
    /// `userinfo`.
    UserInfo,
    /// `path`, slashes kept as separators.
    Path,
    /// `query` (without the `?` prefix).
    Query,
    /// `fragment` (without the `#` prefix).
    Fragment,
}

impl Context {
    /// Returns true if the ASCII character may appear literally in the component.
    fn allows(self, c: char) -> bool {
        if is_unreserved(c) || is_sub_delim(c) || c == ':' {
            return true;
        }
        match self {
            Self::UserInfo => false,
            Self::Path => matches!(c, '@' | '/'),
            Self::Query | Self::Fragment => matches!(c, '@' | '/' | '?'),
        }
    }
}

/// A proxy to percent-encode characters which cannot appear literally in a component.
///
/// Existing percent-encoded triplets are written as is, and so is a stray
/// `%` which does not start a triplet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EncodeIllegal<'a> {
    /// Source component context.
    context: Context,
    /// Raw string before being encoded.
    raw: &'a str,
}

impl<'a> EncodeIllegal<'a> {
    /// Creates a new `EncodeIllegal` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(context: Context, raw: &'a str) -> Self {
        Self { context, raw }
    }

    /// Returns the encoded string, borrowing the source if nothing is to be encoded.
    #[must_use]
    pub(crate) fn to_cow(self) -> Cow<'a, str> {
        if self.raw.chars().all(|c| c == '%' || self.context.allows(c)) {
            Cow::Borrowed(self.raw)
        } else {
            Cow::Owned(self.to_string())
        }
    }
}

impl fmt::Display for EncodeIllegal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0_u8; 4];
        for c in self.raw.chars() {
            if c == '%' || self.context.allows(c) {
                f.write_char(c)?;
                continue;
            }
            c.encode_utf8(&mut buf)
                .bytes()
                .try_for_each(|b| write!(f, "%{:02X}", b))?;
        }
        Ok(())
    }
}
