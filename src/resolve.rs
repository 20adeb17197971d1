//! Reference resolution.
//!
//! This implements the algorithm of [RFC 3986 section 5.2.2], with the
//! `remove_dot_segments` of this crate.
//!
//! # Ambiguous results
//!
//! Resolution against a base without authority can produce a path starting
//! with `//`, such as base=`scheme:` and ref=`.///bar`. Serialized naively,
//! this would be `scheme://bar` and `bar` would be read as a host. Resolved
//! URIs get the `/.` path prefix in that case, as the WHATWG URL Standard
//! serializes them, so their string form is unambiguous.
//!
//! ```
//! use uri_canon::resolve::resolve;
//! use uri_canon::Uri;
//!
//! let base = Uri::parse("scheme:")?;
//! let reference = Uri::parse(".///not-a-host")?;
//! assert_eq!(resolve(&base, &reference).to_string(), "scheme:/.//not-a-host");
//! # Ok::<_, uri_canon::Error>(())
//! ```
//!
//! [RFC 3986 section 5.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2

use std::borrow::Cow;

use crate::build::path_prefix;
use crate::normalize::remove_dot_segments;
use crate::types::Uri;

/// A resolver against the fixed base.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a> {
    /// Base URI.
    base: &'a Uri,
}

impl<'a> FixedBaseResolver<'a> {
    /// Creates a new resolver with the given base.
    ///
    /// The base is expected to be an absolute URI. If it lacks a scheme,
    /// results of relative references lack a scheme too.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_canon::resolve::FixedBaseResolver;
    /// use uri_canon::Uri;
    ///
    /// let base = Uri::parse("http://example.com/base/")?;
    /// let resolver = FixedBaseResolver::new(&base);
    ///
    /// let reference = Uri::parse("../there")?;
    /// assert_eq!(resolver.resolve(&reference).to_string(), "http://example.com/there");
    /// # Ok::<_, uri_canon::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn new(base: &'a Uri) -> Self {
        Self { base }
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &'a Uri {
        self.base
    }

    /// Resolves the given reference against the fixed base.
    ///
    /// Dot segments are removed from the result, but nothing else is
    /// normalized. Percent-encoded dots such as `%2e%2e` are not dot segments
    /// here.
    ///
    /// ```
    /// use uri_canon::resolve::FixedBaseResolver;
    /// use uri_canon::Uri;
    ///
    /// let base = Uri::parse("HTTP://example.COM/base/base2/")?;
    /// let resolver = FixedBaseResolver::new(&base);
    ///
    /// let reference = Uri::parse("../%2e%2e/./x")?;
    /// assert_eq!(resolver.resolve(&reference).to_string(), "HTTP://example.COM/base/%2e%2e/x");
    /// # Ok::<_, uri_canon::Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        let base = self.base;
        let r = reference;

        let (scheme, authority, path, query) = if r.scheme.is_some() {
            (
                r.scheme.as_deref(),
                Authority::of(r),
                remove_dot_segments(&r.path),
                r.query.as_deref(),
            )
        } else if r.host.is_some() {
            (
                base.scheme.as_deref(),
                Authority::of(r),
                remove_dot_segments(&r.path),
                r.query.as_deref(),
            )
        } else if r.path.is_empty() {
            (
                base.scheme.as_deref(),
                Authority::of(base),
                Cow::Borrowed(base.path.as_str()),
                r.query.as_deref().or(base.query.as_deref()),
            )
        } else if r.path.starts_with('/') {
            (
                base.scheme.as_deref(),
                Authority::of(base),
                remove_dot_segments(&r.path),
                r.query.as_deref(),
            )
        } else {
            let merged = merge(base, &r.path);
            let path = Cow::Owned(remove_dot_segments(&merged).into_owned());
            (
                base.scheme.as_deref(),
                Authority::of(base),
                path,
                r.query.as_deref(),
            )
        };

        let prefix = path_prefix(scheme.is_some(), authority.host.is_some(), &path);
        Uri {
            scheme: scheme.map(str::to_owned),
            user_info: authority.user_info.map(str::to_owned),
            host: authority.host.map(str::to_owned),
            port: authority.port,
            path: format!("{prefix}{path}"),
            query: query.map(str::to_owned),
            fragment: r.fragment.clone(),
        }
    }
}

/// Authority components borrowed from a URI.
#[derive(Debug, Clone, Copy)]
struct Authority<'a> {
    /// User information.
    user_info: Option<&'a str>,
    /// Host.
    host: Option<&'a str>,
    /// Port.
    port: Option<u16>,
}

impl<'a> Authority<'a> {
    /// Returns the authority components of the URI.
    #[inline]
    fn of(uri: &'a Uri) -> Self {
        Self {
            user_info: uri.user_info.as_deref(),
            host: uri.host.as_deref(),
            port: uri.port,
        }
    }
}

/// Merges the reference path into the base path.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3>.
fn merge(base: &Uri, ref_path: &str) -> String {
    if base.host.is_some() && base.path.is_empty() {
        format!("/{ref_path}")
    } else {
        let base_path_end = base.path.rfind('/').map_or(0, |pos| pos + 1);
        format!("{}{ref_path}", &base.path[..base_path_end])
    }
}

/// Resolves the reference against the base.
///
/// This is a shorthand of [`FixedBaseResolver::resolve`].
#[inline]
#[must_use]
pub fn resolve(base: &Uri, reference: &Uri) -> Uri {
    FixedBaseResolver::new(base).resolve(reference)
}
