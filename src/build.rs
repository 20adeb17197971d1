//! URI builder.
//!
//! [`Builder`] assembles components into a URI which is unambiguous when
//! serialized. It accepts any combination of components and never fails.

use std::borrow::Cow;
use std::fmt;

use crate::types::Uri;

/// Returns the first segment of a path, which is empty for an absolute path.
#[inline]
fn first_segment(path: &str) -> &str {
    path.split_once('/').map_or(path, |(first, _)| first)
}

/// Returns the text to put before the path so that the serialized URI is
/// decomposed into the same components again.
///
/// * With a host, a path must be empty or start with `/`. A non-empty path
///   without the slash gets one.
/// * Without a host, a path must not start with `//`, or the first segment
///   would be read as an authority. Such a path gets the `/.` prefix, as
///   the WHATWG URL Standard serializes `scheme:/.//path`.
/// * Without a scheme and a host, the first segment of a relative path must
///   not contain a colon, or it would be read as a scheme. Such a path gets
///   the `./` prefix.
#[must_use]
pub(crate) fn path_prefix(has_scheme: bool, has_host: bool, path: &str) -> &'static str {
    if has_host {
        if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        }
    } else if path.starts_with("//") {
        "/."
    } else if !has_scheme && first_segment(path).contains(':') {
        "./"
    } else {
        ""
    }
}

/// URI builder.
///
/// The path of a URI with a host is always written with a leading `/`,
/// including when the path is empty. User information and port are only
/// written when a host is present.
///
/// # Examples
///
/// ```
/// use uri_canon::build::Builder;
///
/// let mut builder = Builder::new();
/// builder.scheme("http");
/// builder.host("example.com");
/// builder.port(8080);
/// builder.query("q=1");
/// assert_eq!(builder.to_string(), "http://example.com:8080/?q=1");
///
/// builder.unset_host();
/// builder.path("//not-a-host");
/// assert_eq!(builder.to_string(), "http:/.//not-a-host?q=1");
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Builder<'a> {
    /// Scheme.
    pub(crate) scheme: Option<Cow<'a, str>>,
    /// User information.
    pub(crate) user_info: Option<Cow<'a, str>>,
    /// Host.
    pub(crate) host: Option<Cow<'a, str>>,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path.
    pub(crate) path: Cow<'a, str>,
    /// Query, without the leading `?`.
    pub(crate) query: Option<Cow<'a, str>>,
    /// Fragment, without the leading `#`.
    pub(crate) fragment: Option<Cow<'a, str>>,
}

impl<'a> Builder<'a> {
    /// Creates a builder with no components and an empty path.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme.
    #[inline]
    pub fn scheme<T: Into<Cow<'a, str>>>(&mut self, scheme: T) {
        self.scheme = Some(scheme.into());
    }

    /// Unsets the scheme.
    #[inline]
    pub fn unset_scheme(&mut self) {
        self.scheme = None;
    }

    /// Sets the user information.
    #[inline]
    pub fn user_info<T: Into<Cow<'a, str>>>(&mut self, user_info: T) {
        self.user_info = Some(user_info.into());
    }

    /// Unsets the user information.
    #[inline]
    pub fn unset_user_info(&mut self) {
        self.user_info = None;
    }

    /// Sets the host.
    #[inline]
    pub fn host<T: Into<Cow<'a, str>>>(&mut self, host: T) {
        self.host = Some(host.into());
    }

    /// Unsets the host.
    #[inline]
    pub fn unset_host(&mut self) {
        self.host = None;
    }

    /// Sets the port.
    #[inline]
    pub fn port(&mut self, port: u16) {
        self.port = Some(port);
    }

    /// Unsets the port.
    #[inline]
    pub fn unset_port(&mut self) {
        self.port = None;
    }

    /// Sets the path.
    #[inline]
    pub fn path<T: Into<Cow<'a, str>>>(&mut self, path: T) {
        self.path = path.into();
    }

    /// Sets the query.
    #[inline]
    pub fn query<T: Into<Cow<'a, str>>>(&mut self, query: T) {
        self.query = Some(query.into());
    }

    /// Unsets the query.
    #[inline]
    pub fn unset_query(&mut self) {
        self.query = None;
    }

    /// Sets the fragment.
    #[inline]
    pub fn fragment<T: Into<Cow<'a, str>>>(&mut self, fragment: T) {
        self.fragment = Some(fragment.into());
    }

    /// Unsets the fragment.
    #[inline]
    pub fn unset_fragment(&mut self) {
        self.fragment = None;
    }

    /// Returns the prefix to write before the path.
    fn path_prefix(&self) -> &'static str {
        if self.host.is_some() && self.path.is_empty() {
            return "/";
        }
        path_prefix(self.scheme.is_some(), self.host.is_some(), &self.path)
    }

    /// Builds the URI.
    ///
    /// The resulting URI has the same components as the serialized form
    /// written by `Display`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_canon::build::Builder;
    ///
    /// let mut builder = Builder::new();
    /// builder.scheme("mailto");
    /// builder.path("user@example.com");
    /// let uri = builder.build();
    /// assert_eq!(uri.host(), None);
    /// assert_eq!(uri.to_string(), "mailto:user@example.com");
    /// ```
    #[must_use]
    pub fn build(self) -> Uri {
        let prefix = self.path_prefix();
        let path = if prefix.is_empty() {
            self.path.into_owned()
        } else {
            format!("{prefix}{}", self.path)
        };
        let has_host = self.host.is_some();

        Uri {
            scheme: self.scheme.map(Cow::into_owned),
            user_info: self.user_info.filter(|_| has_host).map(Cow::into_owned),
            host: self.host.map(Cow::into_owned),
            port: self.port.filter(|_| has_host),
            path,
            query: self.query.map(Cow::into_owned),
            fragment: self.fragment.map(Cow::into_owned),
        }
    }
}

impl fmt::Display for Builder<'_> {
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
        f.write_str(self.path_prefix())?;
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
