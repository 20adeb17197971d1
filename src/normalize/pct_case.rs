//! Percent-encoding normalization and case normalization.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::format::eq_str_display;
use crate::parser::char::{is_ascii_unreserved, is_ucschar, is_utf8_byte_continue};
use crate::parser::str::{find, take_xdigits2};

/// Which percent-encoded characters to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Decode {
    /// Keep every triplet encoded.
    Nothing,
    /// Decode triplets of `unreserved` characters.
    Unreserved,
    /// Decode triplets of `unreserved` characters and UTF-8 sequences of `ucschar`.
    UnreservedAndUcschar,
}

/// Writable as a string with normalized percent-encodings.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode percent-encoded characters selected by [`Decode`].
/// * Convert alphabetic characters uppercase in percent-encoded triplets,
///   if requested.
///
/// A `%` which is not followed by two hexadecimal digits is written as is.
/// Note that this does not newly encode raw characters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a> {
    /// String to normalize.
    source: &'a str,
    /// Whether to uppercase hexadecimal digits of triplets.
    upper_case: bool,
    /// Characters to decode.
    decode: Decode,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(source: &'a str, upper_case: bool, decode: Decode) -> Self {
        Self {
            source,
            upper_case,
            decode,
        }
    }

    /// Returns the normalized string, borrowing the source if already normalized.
    #[must_use]
    pub(crate) fn to_cow(self) -> Cow<'a, str> {
        if find(self.source.as_bytes(), b'%').is_none() || eq_str_display(self.source, &self) {
            Cow::Borrowed(self.source)
        } else {
            Cow::Owned(self.to_string())
        }
    }

    /// Writes a single triplet, whose source text is `triplet`.
    fn write_triplet(&self, f: &mut fmt::Formatter<'_>, triplet: &str) -> fmt::Result {
        if self.upper_case {
            triplet
                .chars()
                .try_for_each(|c| f.write_char(c.to_ascii_uppercase()))
        } else {
            f.write_str(triplet)
        }
    }

    /// Tries to decode a UTF-8 sequence of a `ucschar` starting at the given triplets.
    ///
    /// Returns the character and the rest after the sequence on success.
    fn take_ucschar(first: u8, after_first: &str) -> Option<(char, &str)> {
        let expected_len = match first {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return None,
        };

        let mut bytes = [first, 0, 0, 0];
        let mut rest = after_first;
        for dest in &mut bytes[1..expected_len] {
            let (byte, after_triplet) = take_xdigits2(rest.strip_prefix('%')?)?;
            if !is_utf8_byte_continue(byte) {
                return None;
            }
            *dest = byte;
            rest = after_triplet;
        }

        let c = std::str::from_utf8(&bytes[..expected_len])
            .ok()?
            .chars()
            .next()?;
        if is_ucschar(c) {
            Some((c, rest))
        } else {
            None
        }
    }
}

/// Returns the number of hexadecimal digits written after a stray `%`, once
/// `text` is written.
///
/// `None` means no stray `%` is within two characters before the end.
fn digits_after_stray(mut digits: Option<u8>, text: &str) -> Option<u8> {
    for b in text.bytes() {
        digits = match digits {
            Some(n) if n < 2 && b.is_ascii_hexdigit() => Some(n + 1),
            _ => None,
        };
    }
    digits
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;
        // A hex digit decoded right after a stray `%` would make a new
        // triplet out of it, so such triplets are kept encoded.
        let mut stray_digits: Option<u8> = None;

        while !rest.is_empty() {
            // Scan the next percent-encoded triplet.
            let pos = match find(rest.as_bytes(), b'%') {
                Some(pos) => pos,
                None => return f.write_str(rest),
            };
            // Write the string before the percent-encoded triplet.
            f.write_str(&rest[..pos])?;
            stray_digits = digits_after_stray(stray_digits, &rest[..pos]);
            let after_percent = &rest[(pos + 1)..];

            let (decoded, after_triplet) = match take_xdigits2(after_percent) {
                Some(v) => v,
                None => {
                    // Not a triplet. Leave the percent sign as is.
                    f.write_char('%')?;
                    stray_digits = Some(0);
                    rest = after_percent;
                    continue;
                }
            };
            let triplet = &rest[pos..(pos + 3)];

            if decoded.is_ascii() {
                let merges_with_stray = stray_digits.is_some() && decoded.is_ascii_hexdigit();
                if self.decode != Decode::Nothing
                    && is_ascii_unreserved(decoded)
                    && !merges_with_stray
                {
                    // Unreserved. Print the decoded.
                    f.write_char(char::from(decoded))?;
                } else {
                    self.write_triplet(f, triplet)?;
                }
                stray_digits = None;
                rest = after_triplet;
                continue;
            }

            stray_digits = None;

            if self.decode == Decode::UnreservedAndUcschar {
                if let Some((c, after_seq)) = Self::take_ucschar(decoded, after_triplet) {
                    f.write_char(c)?;
                    rest = after_seq;
                    continue;
                }
            }
            // Only the first triplet is consumed here, since the next one can
            // start a valid sequence by itself.
            self.write_triplet(f, triplet)?;
            rest = after_triplet;
        }

        Ok(())
    }
}

/// Normalizes percent-encodings in the given string.
///
/// Uppercases hexadecimal digits of all percent-encoded triplets, and decodes
/// triplets of `unreserved` characters (`A-Z a-z 0-9 - . _ ~`). Other
/// triplets, including reserved characters such as `%2F`, are kept encoded.
/// A `%` which does not start a triplet is kept as is.
///
/// # Examples
///
/// ```
/// use uri_canon::normalize::normalize_percent_encoding;
///
/// assert_eq!(normalize_percent_encoding("/foo%2Dbar%7e"), "/foo-bar~");
/// assert_eq!(normalize_percent_encoding("/foo%2fbar"), "/foo%2Fbar");
/// assert_eq!(normalize_percent_encoding("/100%-off"), "/100%-off");
/// ```
#[must_use]
pub fn normalize_percent_encoding(s: &str) -> Cow<'_, str> {
    PctCaseNormalized::new(s, true, Decode::Unreserved).to_cow()
}

/// Decodes percent-encoded `unreserved` characters, and keeps other triplets untouched.
///
/// # Examples
///
/// ```
/// use uri_canon::normalize::decode_unreserved;
///
/// assert_eq!(decode_unreserved("/foo%2Dbar%7E"), "/foo-bar~");
/// assert_eq!(decode_unreserved("/foo%2fbar"), "/foo%2fbar");
/// ```
#[must_use]
pub fn decode_unreserved(s: &str) -> Cow<'_, str> {
    PctCaseNormalized::new(s, false, Decode::Unreserved).to_cow()
}
