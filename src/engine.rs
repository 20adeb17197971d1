//! Normalization engine.

use std::borrow::Cow;

use tracing::{debug, trace};
use url::Url;

use crate::build::Builder;
use crate::error::Error;
use crate::normalize::{
    normalize_fragment, normalize_host, normalize_path, normalize_port, normalize_query,
    normalize_scheme, normalize_user_info, Context, Rule,
};
use crate::resolve::resolve;
use crate::types::{Uri, UriLike};

/// Normalizer with a fixed context.
///
/// The context is an immutable value, so a normalizer can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use uri_canon::{Context, Normalizer, Rule};
///
/// let normalizer = Normalizer::new(Context::safe().with(Rule::SortQuery, true));
/// assert_eq!(
///     normalizer.canonicalize("HTTP://Example.com:80/a/./b?z=1&a=2")?,
///     "http://example.com/a/b?a=2&z=1"
/// );
/// # Ok::<_, uri_canon::Error>(())
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Normalizer {
    /// Enabled rules.
    context: Context,
}

impl Normalizer {
    /// Creates a normalizer with the given context.
    #[inline]
    #[must_use]
    pub const fn new(context: Context) -> Self {
        Self { context }
    }

    /// Returns the context.
    #[inline]
    #[must_use]
    pub const fn context(&self) -> Context {
        self.context
    }

    /// Normalizes the given URI.
    ///
    /// The URI is resolved against the base consisting of its own scheme and
    /// host, so that dot segments are removed and the result is in the
    /// authority-qualified form. Then every component is normalized under
    /// the context.
    ///
    /// URIs without a host, such as `mailto:` and `urn:` ones, are returned
    /// unchanged.
    ///
    /// # Failures
    ///
    /// Fails if the input is a string which is not a URI reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_canon::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    ///
    /// let uri = normalizer.normalize("HTTP://Example.COM:80/a/%7eb/../c")?;
    /// assert_eq!(uri.scheme(), Some("http"));
    /// assert_eq!(uri.host(), Some("example.com"));
    /// assert_eq!(uri.port(), None);
    /// assert_eq!(uri.to_string(), "http://example.com/a/c");
    ///
    /// let uri = normalizer.normalize("mailto:Someone@Example.COM")?;
    /// assert_eq!(uri.to_string(), "mailto:Someone@Example.COM");
    /// # Ok::<_, uri_canon::Error>(())
    /// ```
    pub fn normalize<'a, T: Into<UriLike<'a>>>(&self, input: T) -> Result<Uri, Error> {
        let uri: Cow<'_, Uri> = match input.into() {
            UriLike::Str(s) => Cow::Owned(Uri::parse(s)?),
            UriLike::Uri(uri) => Cow::Borrowed(uri),
            UriLike::Url(url) => Cow::Owned(Uri::from(url)),
        };

        let host = match uri.host() {
            Some(host) => host,
            None => {
                debug!(uri = %uri, "URI without host is not normalized");
                return Ok(uri.into_owned());
            }
        };
        let base = Uri {
            scheme: uri.scheme.clone(),
            host: Some(host.to_owned()),
            ..Uri::default()
        };
        let resolved = resolve(&base, &uri);

        let normalized = self.normalize_components(&resolved).build();
        trace!(input = %uri, output = %normalized, "normalized");
        Ok(normalized)
    }

    /// Canonicalizes the given URI, URL, or string into a string.
    ///
    /// Strings are parsed as URLs by the WHATWG URL Standard first. If that
    /// fails, as for scheme-relative and other relative references, they are
    /// parsed as generic URI references instead. Note that a successful URL
    /// parse already applies the URL Standard's own normalization, e.g.
    /// elision of default ports of special schemes.
    ///
    /// Components are then normalized one by one under the context, without
    /// resolution against a base.
    ///
    /// # Failures
    ///
    /// Fails if the input is a string which is neither a URL nor a URI
    /// reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_canon::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(
    ///     normalizer.canonicalize("HTTP://User@Example.COM:8080/%7ea/./b/../c?q=%3d#Frag")?,
    ///     "http://User@example.com:8080/~a/c?q=%3D#Frag"
    /// );
    /// // Not a URL, but a valid relative reference.
    /// assert_eq!(
    ///     normalizer.canonicalize("//Example.COM:80/a/../b")?,
    ///     "//example.com:80/b"
    /// );
    /// # Ok::<_, uri_canon::Error>(())
    /// ```
    pub fn canonicalize<'a, T: Into<UriLike<'a>>>(&self, input: T) -> Result<String, Error> {
        let uri: Cow<'_, Uri> = match input.into() {
            UriLike::Str(s) => match Url::parse(s) {
                Ok(url) => Cow::Owned(Uri::from(&url)),
                Err(e) => {
                    debug!(input = s, error = %e, "not a URL, parsing as a URI reference");
                    Cow::Owned(Uri::parse(s)?)
                }
            },
            UriLike::Uri(uri) => Cow::Borrowed(uri),
            UriLike::Url(url) => Cow::Owned(Uri::from(url)),
        };

        let canonical = self.normalize_components(&uri).to_string();
        trace!(input = %uri, output = %canonical, "canonicalized");
        Ok(canonical)
    }

    /// Returns true if the two URIs are the same after normalization.
    ///
    /// # Failures
    ///
    /// Fails if either input is a string which is not a URI reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_canon::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert!(normalizer.equivalent("http://Example.com:80/a/./b", "http://example.com/a/b")?);
    /// assert!(!normalizer.equivalent("http://example.com/a", "http://example.com/a/")?);
    /// # Ok::<_, uri_canon::Error>(())
    /// ```
    pub fn equivalent<'a, 'b, T, U>(&self, a: T, b: U) -> Result<bool, Error>
    where
        T: Into<UriLike<'a>>,
        U: Into<UriLike<'b>>,
    {
        Ok(self.normalize(a)? == self.normalize(b)?)
    }

    /// Normalizes each component and returns the builder holding the results.
    fn normalize_components<'u>(&self, uri: &'u Uri) -> Builder<'u> {
        let context = self.context;

        let scheme = normalize_scheme(uri, context);
        let port = normalize_port(uri, scheme.as_deref(), context);
        let host = normalize_host(uri, context);
        if host.is_some() && context.is_enabled(Rule::RemoveIp) {
            debug!(rule = %Rule::RemoveIp, "rule requires name resolution and has no effect");
        }
        let path = normalize_path(uri, host.is_some(), context);

        Builder {
            scheme,
            user_info: normalize_user_info(uri, context),
            host,
            port,
            path,
            query: normalize_query(uri, context),
            fragment: normalize_fragment(uri, context),
        }
    }
}
