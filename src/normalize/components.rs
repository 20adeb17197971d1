//! Normalizers of individual URI components.
//!
//! Each function is a pure function of the URI and the context. They do not
//! depend on each other, except that the port and path normalizers take the
//! already normalized scheme and host presence as arguments.

use std::borrow::Cow;

use crate::normalize::pct_case::{Decode, PctCaseNormalized};
use crate::normalize::{default_port, remove_dot_segments, Context, Rule};
use crate::percent_encoding::{self, EncodeIllegal};
use crate::types::Uri;

/// Applies a borrowing transformation to a `Cow`, keeping the borrow when possible.
fn map_cow<'a, F>(s: Cow<'a, str>, f: F) -> Cow<'a, str>
where
    F: for<'b> FnOnce(&'b str) -> Cow<'b, str>,
{
    match s {
        Cow::Borrowed(s) => f(s),
        Cow::Owned(s) => Cow::Owned(f(&s).into_owned()),
    }
}

/// Normalizes percent-encoded triplets as the context requests.
fn normalize_triplets(s: Cow<'_, str>, context: Context) -> Cow<'_, str> {
    let decode = if context.is_enabled(Rule::DecodeSpecialCharacters) {
        Decode::UnreservedAndUcschar
    } else if context.is_enabled(Rule::DecodeUnreservedCharacters) {
        Decode::Unreserved
    } else {
        Decode::Nothing
    };
    let upper_case = context.is_enabled(Rule::UpperCasePercentEncoding);
    if !upper_case && decode == Decode::Nothing {
        return s;
    }
    map_cow(s, |s| PctCaseNormalized::new(s, upper_case, decode).to_cow())
}

/// Returns the raw form with illegal characters encoded, or the decoded form.
///
/// Percent-encodings are normalized only in the raw form, since the decoded
/// form has no triplets left to normalize.
fn raw_or_decoded<'a>(
    raw: &'a str,
    encode_context: percent_encoding::Context,
    context: Context,
) -> Cow<'a, str> {
    if context.is_enabled(Rule::EncodeIllegalCharacters) {
        let encoded = EncodeIllegal::new(encode_context, raw).to_cow();
        normalize_triplets(encoded, context)
    } else {
        percent_encoding::decode(raw)
    }
}

/// Normalizes the scheme.
///
/// The scheme is lowercased by [`Rule::LowerCaseScheme`], and `https` is
/// rewritten to `http` by [`Rule::ForceHttp`].
#[must_use]
pub fn normalize_scheme(uri: &Uri, context: Context) -> Option<Cow<'_, str>> {
    let scheme = uri.scheme()?;
    if context.is_enabled(Rule::ForceHttp) && scheme.eq_ignore_ascii_case("https") {
        return Some(Cow::Borrowed("http"));
    }
    if context.is_enabled(Rule::LowerCaseScheme) && scheme.bytes().any(|b| b.is_ascii_uppercase())
    {
        return Some(Cow::Owned(scheme.to_ascii_lowercase()));
    }
    Some(Cow::Borrowed(scheme))
}

/// Normalizes the user information.
///
/// User information which is empty or a bare `:` is removed by
/// [`Rule::RemoveEmptyUserInfo`].
#[must_use]
pub fn normalize_user_info(uri: &Uri, context: Context) -> Option<Cow<'_, str>> {
    let user_info = raw_or_decoded(
        uri.user_info()?,
        percent_encoding::Context::UserInfo,
        context,
    );
    if context.is_enabled(Rule::RemoveEmptyUserInfo) && matches!(&*user_info, "" | ":") {
        return None;
    }
    Some(user_info)
}

/// Lowercases ASCII letters except for the ones in percent-encoded triplets.
fn to_lowercase_outside_triplets(s: &str) -> Cow<'_, str> {
    let mut in_triplet = 0_u8;
    let needs_lowering = s.bytes().any(|b| {
        let is_target = in_triplet == 0 && b.is_ascii_uppercase();
        in_triplet = match (in_triplet, b) {
            (0, b'%') => 2,
            (0, _) => 0,
            (n, _) => n - 1,
        };
        is_target
    });
    if !needs_lowering {
        return Cow::Borrowed(s);
    }

    let mut lowered = String::with_capacity(s.len());
    let mut in_triplet = 0_u8;
    for c in s.chars() {
        if in_triplet > 0 {
            in_triplet -= 1;
            lowered.push(c);
            continue;
        }
        if c == '%' {
            in_triplet = 2;
        }
        lowered.push(c.to_ascii_lowercase());
    }
    Cow::Owned(lowered)
}

/// Normalizes the host.
///
/// Applied in order: percent-encoding normalization, lowercasing by
/// [`Rule::LowerCaseHost`], trailing dot removal by
/// [`Rule::RemoveTrailingDotInHost`], and `www.` removal by
/// [`Rule::RemoveWww`]. Each step may independently be a no-op.
#[must_use]
pub fn normalize_host(uri: &Uri, context: Context) -> Option<Cow<'_, str>> {
    let mut host = normalize_triplets(Cow::Borrowed(uri.host()?), context);
    if context.is_enabled(Rule::LowerCaseHost) {
        host = map_cow(host, to_lowercase_outside_triplets);
    }
    if context.is_enabled(Rule::RemoveTrailingDotInHost) {
        host = map_cow(host, |s| Cow::Borrowed(s.strip_suffix('.').unwrap_or(s)));
    }
    if context.is_enabled(Rule::RemoveWww) {
        host = map_cow(host, strip_www);
    }
    Some(host)
}

/// Strips a leading `www.` label, if at least two labels remain.
fn strip_www(host: &str) -> Cow<'_, str> {
    let rest = match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => return Cow::Borrowed(host),
    };
    let remaining_labels = rest.trim_end_matches('.').split('.').count();
    if remaining_labels >= 2 && !rest.starts_with('.') {
        Cow::Borrowed(rest)
    } else {
        Cow::Borrowed(host)
    }
}

/// Normalizes the port.
///
/// `scheme` is the normalized scheme. The port is removed if it equals the
/// default port of the scheme and [`Rule::RemoveDefaultPort`] is enabled.
/// Ports of schemes without a known default are always kept.
#[must_use]
pub fn normalize_port(uri: &Uri, scheme: Option<&str>, context: Context) -> Option<u16> {
    let port = uri.port()?;
    let is_default = scheme.and_then(default_port) == Some(port);
    if is_default && context.is_enabled(Rule::RemoveDefaultPort) {
        None
    } else {
        Some(port)
    }
}

/// Removes consecutive slashes.
fn remove_duplicate_slashes(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }
    let mut collapsed = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }
    Cow::Owned(collapsed)
}

/// Removes the last path segment if it is a directory index such as `index.html`.
fn remove_directory_index(path: &str) -> Cow<'_, str> {
    let (dir, last) = match path.rfind('/') {
        Some(pos) => path.split_at(pos + 1),
        None => return Cow::Borrowed(path),
    };
    let (stem, ext) = match last.split_once('.') {
        Some(v) => v,
        None => return Cow::Borrowed(path),
    };
    let is_index_stem = stem.eq_ignore_ascii_case("index") || stem.eq_ignore_ascii_case("default");
    let is_ext = !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric());
    if is_index_stem && is_ext {
        Cow::Borrowed(dir)
    } else {
        Cow::Borrowed(path)
    }
}

/// Normalizes the path.
///
/// `has_authority` tells whether the normalized URI has a host. Applied in
/// order:
///
/// 1. Illegal character encoding by [`Rule::EncodeIllegalCharacters`].
/// 2. Empty path to `/` by [`Rule::AddTrailingSlash`], only with a host.
/// 3. Percent-encoding normalization.
/// 4. Dot segment removal by [`Rule::RemoveDotSegments`].
/// 5. Slash collapsing by [`Rule::RemoveDuplicateSlashes`].
/// 6. Directory index removal by [`Rule::RemoveDirectoryIndex`].
#[must_use]
pub fn normalize_path(uri: &Uri, has_authority: bool, context: Context) -> Cow<'_, str> {
    let mut path = Cow::Borrowed(uri.path());
    if context.is_enabled(Rule::EncodeIllegalCharacters) {
        path = map_cow(path, |s| {
            EncodeIllegal::new(percent_encoding::Context::Path, s).to_cow()
        });
    }
    if context.is_enabled(Rule::AddTrailingSlash) && has_authority && path.is_empty() {
        path = Cow::Borrowed("/");
    }
    path = normalize_triplets(path, context);
    if context.is_enabled(Rule::RemoveDotSegments) {
        path = map_cow(path, remove_dot_segments);
    }
    if context.is_enabled(Rule::RemoveDuplicateSlashes) {
        path = map_cow(path, remove_duplicate_slashes);
    }
    if context.is_enabled(Rule::RemoveDirectoryIndex) {
        path = map_cow(path, remove_directory_index);
    }
    path
}

/// Returns the key of a query parameter, i.e. the text before the first `=`.
fn param_key(param: &str) -> &str {
    param.split_once('=').map_or(param, |(key, _)| key)
}

/// Normalizes the query.
///
/// Parameters are the `&`-separated parts of the query.
/// [`Rule::RemoveEmptyQuery`] removes empty parameters and then the query
/// itself if nothing is left, [`Rule::RemoveDuplicateQuery`] keeps only the
/// first of identical parameters, and [`Rule::SortQuery`] stably sorts
/// parameters by key.
#[must_use]
pub fn normalize_query(uri: &Uri, context: Context) -> Option<Cow<'_, str>> {
    let query = raw_or_decoded(uri.query()?, percent_encoding::Context::Query, context);

    let remove_empty = context.is_enabled(Rule::RemoveEmptyQuery);
    let remove_duplicate = context.is_enabled(Rule::RemoveDuplicateQuery);
    let sort = context.is_enabled(Rule::SortQuery);
    if !(remove_empty || remove_duplicate || sort) {
        return Some(query);
    }

    let mut params: Vec<&str> = query.split('&').collect();
    if remove_empty {
        params.retain(|param| !param.is_empty());
        if params.is_empty() {
            return None;
        }
    }
    if remove_duplicate {
        let mut seen = Vec::with_capacity(params.len());
        params.retain(|param| {
            if seen.contains(param) {
                false
            } else {
                seen.push(*param);
                true
            }
        });
    }
    if sort {
        params.sort_by(|a, b| param_key(a).cmp(param_key(b)));
    }

    let joined = params.join("&");
    if joined == *query {
        Some(query)
    } else {
        Some(Cow::Owned(joined))
    }
}

/// Normalizes the fragment.
///
/// The fragment is removed by [`Rule::RemoveFragment`].
#[must_use]
pub fn normalize_fragment(uri: &Uri, context: Context) -> Option<Cow<'_, str>> {
    if context.is_enabled(Rule::RemoveFragment) {
        return None;
    }
    Some(raw_or_decoded(
        uri.fragment()?,
        percent_encoding::Context::Fragment,
        context,
    ))
}
