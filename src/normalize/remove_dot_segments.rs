//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use std::borrow::Cow;

/// Returns true if the segment is `.` or `..`.
#[inline]
#[must_use]
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Removes `.` and `..` segments from the given path.
///
/// The path is split on `/` and folded from left to right:
///
/// * `.` is dropped.
/// * `..` drops the last output segment, but never the first one: that is
///   the root of an absolute path, or the leading segment of a relative
///   one. With nothing to drop, `..` itself is dropped.
/// * Empty segments (from consecutive slashes) are kept, so `//` survives.
///   Collapsing them is a separate, unsafe normalization.
///
/// If the last input segment is empty, `.`, or `..`, the result ends with a
/// slash: dot segments leave you "in" a directory.
///
/// This is purely textual; no filesystem is consulted.
///
/// # Examples
///
/// ```
/// use uri_canon::normalize::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/../c"), "/a/c");
/// assert_eq!(remove_dot_segments("/a/b/./c"), "/a/b/c");
/// assert_eq!(remove_dot_segments("/../a"), "/a");
/// assert_eq!(remove_dot_segments("/a/.."), "/");
/// assert_eq!(remove_dot_segments("/a/b/."), "/a/b/");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> Cow<'_, str> {
    if !path.split('/').any(is_dot_segment) {
        return Cow::Borrowed(path);
    }

    let is_absolute = path.starts_with('/');

    let mut segments = path.split('/').peekable();
    let mut output: Vec<&str> = Vec::new();
    let mut last = "";
    while let Some(segment) = segments.next() {
        last = segment;
        let is_last = segments.peek().is_none();
        match segment {
            "." => {}
            ".." => {
                if output.len() > 1 {
                    output.pop();
                }
            }
            "" if output.is_empty() && is_absolute => output.push(""),
            // A trailing empty segment is restored below.
            "" if is_last => {}
            segment => output.push(segment),
        }
    }
    if last.is_empty() || is_dot_segment(last) {
        output.push("");
    }

    Cow::Owned(output.join("/"))
}
