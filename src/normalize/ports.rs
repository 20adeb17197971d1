//! Default ports of well-known schemes.

/// Table of `(scheme, port)`, sorted by scheme name.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("git", 9418),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("imap", 143),
    ("imaps", 993),
    ("irc", 194),
    ("ircs", 6697),
    ("ldap", 389),
    ("ldaps", 636),
    ("mms", 1755),
    ("news", 119),
    ("nntp", 119),
    ("pop", 110),
    ("pop3", 110),
    ("redis", 6379),
    ("rsync", 873),
    ("rtsp", 554),
    ("sftp", 22),
    ("sip", 5060),
    ("sips", 5061),
    ("smtp", 25),
    ("snmp", 161),
    ("ssh", 22),
    ("telnet", 23),
    ("tftp", 69),
    ("vnc", 5900),
    ("ws", 80),
    ("wss", 443),
];

/// Returns the default port of the given scheme.
///
/// Scheme names are compared ASCII case-insensitively. Returns `None` for
/// schemes without a known default, so that explicit ports of such URIs are
/// always kept.
///
/// # Examples
///
/// ```
/// use uri_canon::normalize::default_port;
///
/// assert_eq!(default_port("http"), Some(80));
/// assert_eq!(default_port("HTTPS"), Some(443));
/// assert_eq!(default_port("x-unknown"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    // Scheme names are short, so a stack buffer is enough for lowercasing.
    let mut buf = [0_u8; 8];
    let lowered = buf.get_mut(..scheme.len())?;
    lowered.copy_from_slice(scheme.as_bytes());
    lowered.make_ascii_lowercase();
    let lowered: &[u8] = lowered;

    DEFAULT_PORTS
        .binary_search_by(|(name, _)| name.as_bytes().cmp(lowered))
        .ok()
        .map(|index| DEFAULT_PORTS[index].1)
}
