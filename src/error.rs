//! Errors.

use core::fmt;

/// URI reference parse error.
///
/// Returned when the input cannot be read as any URI reference.
/// Malformed percent-encodings are not errors; they are kept as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid URI reference {input:?}: {kind}")]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Source string.
    input: String,
}

impl Error {
    /// Creates a new `Error`.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the input string which failed to parse.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The text before the first colon is neither a valid scheme nor a path segment.
    InvalidScheme,
    /// The port is not a decimal number in the 16-bit range.
    InvalidPort,
    /// The host has an unterminated or stray IP literal bracket.
    InvalidHost,
    /// The input contains a control character.
    InvalidCharacter,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidScheme => "invalid scheme",
            Self::InvalidPort => "invalid port",
            Self::InvalidHost => "invalid host",
            Self::InvalidCharacter => "invalid character",
        })
    }
}

/// Error on parsing an unknown normalization rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown normalization rule {0:?}")]
pub struct UnknownRuleError(pub(crate) String);

impl UnknownRuleError {
    /// Returns the rejected name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = Error::new(ErrorKind::InvalidPort, "http://example.com:http/");
        assert_eq!(
            e.to_string(),
            "invalid URI reference \"http://example.com:http/\": invalid port"
        );
        assert_eq!(e.kind(), ErrorKind::InvalidPort);
        assert_eq!(e.input(), "http://example.com:http/");
    }
}
