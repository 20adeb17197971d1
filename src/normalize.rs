//! Normalization rules and the building blocks of normalization.
//!
//! # Safe and unsafe rules
//!
//! Each normalization step is a [`Rule`] which can be switched on and off in
//! a [`Context`]. Rules are classified into two groups:
//!
//! * Safe rules never change the resource a URI refers to. They are the
//!   syntax-based and scheme-based normalizations of [RFC 3986 section 6.2.2]
//!   and [6.2.3], e.g. lowercasing the host or removing `:80` from an `http`
//!   URI. [`Context::safe()`] enables exactly these.
//! * Unsafe rules may change the identified resource under some server
//!   configurations, e.g. sorting the query or removing `www.`. They are all
//!   disabled by default.
//!
//! # Components
//!
//! The per-component normalizers are pure functions of a parsed [`Uri`] and a
//! [`Context`], and can be used on their own.
//!
//! ```
//! use uri_canon::normalize::{normalize_host, Context, Rule};
//! use uri_canon::Uri;
//!
//! let uri = Uri::parse("http://WWW.Example.COM./")?;
//! assert_eq!(normalize_host(&uri, Context::safe()).as_deref(), Some("www.example.com."));
//!
//! let context = Context::safe()
//!     .with(Rule::RemoveWww, true)
//!     .with(Rule::RemoveTrailingDotInHost, true);
//! assert_eq!(normalize_host(&uri, context).as_deref(), Some("example.com"));
//! # Ok::<_, uri_canon::Error>(())
//! ```
//!
//! [RFC 3986 section 6.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2
//! [6.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.3
//! [`Uri`]: crate::Uri

mod components;
mod context;
mod pct_case;
mod ports;
mod remove_dot_segments;

pub use self::components::{
    normalize_fragment, normalize_host, normalize_path, normalize_port, normalize_query,
    normalize_scheme, normalize_user_info,
};
pub use self::context::{Context, Rule};
pub use self::pct_case::{decode_unreserved, normalize_percent_encoding};
pub use self::ports::default_port;
pub use self::remove_dot_segments::remove_dot_segments;
