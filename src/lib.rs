//! URI normalization and canonicalization.
//!
//! This crate rewrites URIs into a canonical form, so that URIs which refer
//! to the same resource compare equal as strings or values.
//!
//! # Operations
//!
//! * [`normalize`] resolves a URI against its own scheme and host (removing
//!   dot segments), normalizes each component, and returns a [`Uri`].
//!   URIs without a host, such as `mailto:` ones, pass through unchanged.
//! * [`canonicalize`] accepts strings which may not even be absolute URLs,
//!   normalizes each component, and returns a string.
//! * [`equivalent`] tells whether two URIs normalize to the same value.
//!
//! These free functions use the safe rules only. Use [`Normalizer`] with a
//! custom [`Context`] to enable more aggressive rules.
//!
//! ```
//! use uri_canon::{canonicalize, equivalent, normalize};
//!
//! let uri = normalize("HTTP://Example.COM:80/a/./b/../c%7e")?;
//! assert_eq!(uri.to_string(), "http://example.com/a/c~");
//!
//! assert_eq!(
//!     canonicalize("http://example.com/%7Efoo/./bar/..")?,
//!     "http://example.com/~foo/"
//! );
//!
//! assert!(equivalent("http://Example.com:80/a/./b", "http://example.com/a/b")?);
//! # Ok::<_, uri_canon::Error>(())
//! ```
//!
//! # Rules
//!
//! Safe rules are the ones which never change the identified resource:
//!
//! | Rule                           | Example                                 |
//! |--------------------------------|-----------------------------------------|
//! | `lower-case-scheme`            | `HTTP://a/` → `http://a/`               |
//! | `lower-case-host`              | `http://A.com/` → `http://a.com/`       |
//! | `upper-case-percent-encoding`  | `/%3a` → `/%3A`                         |
//! | `decode-unreserved-characters` | `/%7Efoo` → `/~foo`                     |
//! | `encode-illegal-characters`    | `/a b` → `/a%20b`                       |
//! | `add-trailing-slash`           | `http://a` → `http://a/`                |
//! | `remove-default-port`          | `http://a:80/` → `http://a/`            |
//! | `remove-dot-segments`          | `/a/./b/../c` → `/a/c`                  |
//!
//! Unsafe rules are disabled by default. See [`Rule`] for the list.
//!
//! ```
//! use uri_canon::{Context, Normalizer, Rule};
//!
//! let context = Context::safe()
//!     .with(Rule::RemoveWww, true)
//!     .with(Rule::RemoveFragment, true)
//!     .with(Rule::SortQuery, true);
//! let normalizer = Normalizer::new(context);
//! assert_eq!(
//!     normalizer.canonicalize("https://www.example.com/?b=1&a=2#top")?,
//!     "https://example.com/?a=2&b=1"
//! );
//! # Ok::<_, uri_canon::Error>(())
//! ```
//!
//! # Feature flags
//!
//! * `memchr`: Uses the [`memchr`] crate to speed up searching delimiters.
//! * `serde`: Implements `Serialize` and `Deserialize` for [`Context`], as a
//!   map from rule names to booleans.
//!
//! [`memchr`]: https://crates.io/crates/memchr
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod build;
mod engine;
mod error;
pub(crate) mod format;
pub mod normalize;
pub(crate) mod parser;
pub mod percent_encoding;
pub mod resolve;
pub mod types;

pub use self::engine::Normalizer;
pub use self::error::{Error, ErrorKind, UnknownRuleError};
pub use self::normalize::{Context, Rule};
pub use self::types::{Uri, UriLike};

/// Normalizes the URI with the safe rules.
///
/// See [`Normalizer::normalize`].
///
/// # Failures
///
/// Fails if the input is a string which is not a URI reference.
#[inline]
pub fn normalize<'a, T: Into<UriLike<'a>>>(input: T) -> Result<Uri, Error> {
    Normalizer::default().normalize(input)
}

/// Canonicalizes the URI, URL, or string with the safe rules.
///
/// See [`Normalizer::canonicalize`].
///
/// # Failures
///
/// Fails if the input is a string which is neither a URL nor a URI reference.
#[inline]
pub fn canonicalize<'a, T: Into<UriLike<'a>>>(input: T) -> Result<String, Error> {
    Normalizer::default().canonicalize(input)
}

/// Returns true if the two URIs are the same after normalization with the safe rules.
///
/// See [`Normalizer::equivalent`].
///
/// # Failures
///
/// Fails if either input is a string which is not a URI reference.
#[inline]
pub fn equivalent<'a, 'b, T, U>(a: T, b: U) -> Result<bool, Error>
where
    T: Into<UriLike<'a>>,
    U: Into<UriLike<'b>>,
{
    Normalizer::default().equivalent(a, b)
}
