//! URI component model.
//!
//! [`Uri`] is an owned, already decomposed URI reference. Each component is
//! available in its raw form (percent-encodings preserved) and, where
//! percent-encoding is allowed, in its decoded form.
//!
//! [`UriLike`] is the closed set of inputs accepted by the normalizer.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, ErrorKind};
use crate::parser::{decompose_uri_reference, RawComponents};
use crate::percent_encoding::decode;

/// A decomposed URI reference.
///
/// Comparison by `PartialEq` and `Eq` is component-wise and exact: no
/// normalization is applied. Use [`Normalizer::equivalent`] for that.
///
/// # Examples
///
/// ```
/// use uri_canon::Uri;
///
/// let uri = Uri::parse("http://user@Example.com:8080/a%20b?q#frag")?;
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.user_info(), Some("user"));
/// assert_eq!(uri.host(), Some("Example.com"));
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.path(), "/a%20b");
/// assert_eq!(uri.path_decoded(), "/a b");
/// assert_eq!(uri.query(), Some("q"));
/// assert_eq!(uri.fragment(), Some("frag"));
/// assert_eq!(uri.to_string(), "http://user@Example.com:8080/a%20b?q#frag");
/// # Ok::<_, uri_canon::Error>(())
/// ```
///
/// [`Normalizer::equivalent`]: crate::Normalizer::equivalent
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    /// Scheme.
    pub(crate) scheme: Option<String>,
    /// Raw user information.
    pub(crate) user_info: Option<String>,
    /// Host. `Some("")` for an empty authority.
    pub(crate) host: Option<String>,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Raw path. Never absent, but can be empty.
    pub(crate) path: String,
    /// Raw query.
    pub(crate) query: Option<String>,
    /// Raw fragment.
    pub(crate) fragment: Option<String>,
}

impl Uri {
    /// Parses a URI reference.
    ///
    /// The parser is permissive: it accepts characters which are not allowed
    /// to appear literally in URIs and malformed percent-encodings, and only
    /// rejects strings which cannot be decomposed at all.
    ///
    /// # Failures
    ///
    /// Fails if the string contains control characters, has an invalid
    /// scheme, a broken IP literal, or a non-numeric or out-of-range port.
    ///
    /// ```
    /// use uri_canon::{ErrorKind, Uri};
    ///
    /// let err = Uri::parse("http://example.com:99999/").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidPort);
    /// ```
    pub fn parse(s: &str) -> Result<Self, Error> {
        let raw = decompose_uri_reference(s)?;
        Self::from_raw(&raw).map_err(|kind| Error::new(kind, s))
    }

    /// Creates an owned URI from the borrowed components.
    fn from_raw(raw: &RawComponents<'_>) -> Result<Self, ErrorKind> {
        let port = match raw.port {
            None | Some("") => None,
            Some(port) => Some(port.parse::<u16>().map_err(|_| ErrorKind::InvalidPort)?),
        };

        Ok(Self {
            scheme: raw.scheme.map(str::to_owned),
            user_info: raw.user_info.map(str::to_owned),
            host: raw.host.map(str::to_owned),
            port,
            path: raw.path.to_owned(),
            query: raw.query.map(str::to_owned),
            fragment: raw.fragment.map(str::to_owned),
        })
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the raw user information, percent-encodings preserved.
    #[inline]
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Returns the percent-decoded user information.
    #[must_use]
    pub fn user_info_decoded(&self) -> Option<Cow<'_, str>> {
        self.user_info.as_deref().map(decode)
    }

    /// Returns the host.
    ///
    /// IP literals keep their brackets, e.g. `[::1]`.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if explicitly given.
    ///
    /// An empty port (as in `http://example.com:/`) is reported as `None`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the raw path, percent-encodings preserved.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the percent-decoded path.
    #[must_use]
    pub fn path_decoded(&self) -> Cow<'_, str> {
        decode(&self.path)
    }

    /// Returns the raw query, without the leading `?`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the percent-decoded query.
    #[must_use]
    pub fn query_decoded(&self) -> Option<Cow<'_, str>> {
        self.query.as_deref().map(decode)
    }

    /// Returns the raw fragment, without the leading `#`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the percent-decoded fragment.
    #[must_use]
    pub fn fragment_decoded(&self) -> Option<Cow<'_, str>> {
        self.fragment.as_deref().map(decode)
    }

    /// Returns true if the URI has a scheme.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns true if the URI has an authority, even an empty one.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }
}

impl FromStr for Uri {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&Url> for Uri {
    fn from(url: &Url) -> Self {
        let user_info = match (url.username(), url.password()) {
            ("", None) => None,
            (user, None) => Some(user.to_owned()),
            (user, Some(password)) => Some(format!("{user}:{password}")),
        };
        let host = if url.has_authority() {
            Some(url.host_str().unwrap_or("").to_owned())
        } else {
            None
        };

        Self {
            scheme: Some(url.scheme().to_owned()),
            user_info,
            host,
            port: url.port(),
            path: url.path().to_owned(),
            query: url.query().map(str::to_owned),
            fragment: url.fragment().map(str::to_owned),
        }
    }
}

impl fmt::Display for Uri {
    /// Writes the components back as they are, without any normalization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user_info) = &self.user_info {
                write!(f, "{user_info}@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// An input to be normalized.
///
/// Strings are parsed on use; already parsed values are used as they are.
#[derive(Debug, Clone, Copy)]
pub enum UriLike<'a> {
    /// A string not yet parsed.
    Str(&'a str),
    /// A decomposed URI reference.
    Uri(&'a Uri),
    /// A URL parsed by the [`url`] crate.
    Url(&'a Url),
}

impl<'a> From<&'a str> for UriLike<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for UriLike<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a Uri> for UriLike<'a> {
    #[inline]
    fn from(uri: &'a Uri) -> Self {
        Self::Uri(uri)
    }
}

impl<'a> From<&'a Url> for UriLike<'a> {
    #[inline]
    fn from(url: &'a Url) -> Self {
        Self::Url(url)
    }
}
