//! Normalization rules and the context selecting them.

use core::fmt;
use core::str::FromStr;

use crate::error::UnknownRuleError;

/// Declares [`Rule`] along with its names and groups.
macro_rules! define_rules {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $name:literal, $safe:literal;
        )*
    ) => {
        /// A normalization rule.
        ///
        /// Safe rules never change which resource a URI identifies, and are
        /// enabled by default. Unsafe rules may, and are enabled only on
        /// request.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Rule {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Rule {
            /// All rules, safe ones first.
            pub const ALL: &'static [Rule] = &[$(Rule::$variant),*];

            /// Returns the name of the rule, e.g. `lower-case-scheme`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Rule::$variant => $name,)*
                }
            }

            /// Returns true if the rule never changes the identified resource.
            #[must_use]
            pub const fn is_safe(self) -> bool {
                match self {
                    $(Rule::$variant => $safe,)*
                }
            }
        }

        impl FromStr for Rule {
            type Err = UnknownRuleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Rule::$variant),)*
                    _ => Err(UnknownRuleError(s.to_owned())),
                }
            }
        }
    };
}

define_rules! {
    /// Lowercase the scheme: `HTTP:` to `http:`.
    LowerCaseScheme = "lower-case-scheme", true;
    /// Lowercase the host: `Example.COM` to `example.com`.
    LowerCaseHost = "lower-case-host", true;
    /// Uppercase hexadecimal digits of percent-encodings: `%2f` to `%2F`.
    UpperCasePercentEncoding = "upper-case-percent-encoding", true;
    /// Decode percent-encoded unreserved characters: `%7E` to `~`.
    DecodeUnreservedCharacters = "decode-unreserved-characters", true;
    /// Use raw forms and percent-encode characters not allowed literally.
    ///
    /// When disabled, decoded forms of user information, query and fragment
    /// are used instead.
    EncodeIllegalCharacters = "encode-illegal-characters", true;
    /// Rewrite the empty path of a URI with a host to `/`.
    AddTrailingSlash = "add-trailing-slash", true;
    /// Remove the port when it is the default port of the scheme.
    RemoveDefaultPort = "remove-default-port", true;
    /// Remove `.` and `..` path segments.
    RemoveDotSegments = "remove-dot-segments", true;
    /// Remove a final `index.*` or `default.*` path segment.
    RemoveDirectoryIndex = "remove-directory-index", false;
    /// Remove the fragment.
    RemoveFragment = "remove-fragment", false;
    /// Replace an IP address host with its domain name.
    ///
    /// This requires name resolution, which this crate never does. The rule
    /// is accepted for compatibility and has no effect.
    RemoveIp = "remove-ip", false;
    /// Collapse consecutive slashes in the path.
    RemoveDuplicateSlashes = "remove-duplicate-slashes", false;
    /// Remove repeated identical query parameters, keeping the first one.
    RemoveDuplicateQuery = "remove-duplicate-query", false;
    /// Remove empty query parameters, and the query when nothing is left.
    RemoveEmptyQuery = "remove-empty-query", false;
    /// Remove user information which is empty or a bare `:`.
    RemoveEmptyUserInfo = "remove-empty-user-info", false;
    /// Remove a trailing dot of the host: `example.com.` to `example.com`.
    RemoveTrailingDotInHost = "remove-trailing-dot-in-host", false;
    /// Rewrite the `https` scheme to `http`.
    ForceHttp = "force-http", false;
    /// Remove a leading `www.` label of the host.
    RemoveWww = "remove-www", false;
    /// Sort query parameters by key, keeping the order of equal keys.
    SortQuery = "sort-query", false;
    /// Decode percent-encoded non-ASCII characters allowed in IRIs.
    DecodeSpecialCharacters = "decode-special-characters", false;
}

impl Rule {
    /// Returns the bit of the rule in [`Context`].
    #[inline]
    #[must_use]
    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for Rule {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of enabled normalization rules.
///
/// This is an immutable value: methods return modified copies. The
/// [`Default`] context is [`Context::safe()`].
///
/// # Examples
///
/// ```
/// use uri_canon::normalize::{Context, Rule};
///
/// let context = Context::safe()
///     .with(Rule::RemoveFragment, true)
///     .with(Rule::RemoveDefaultPort, false);
/// assert!(context.is_enabled(Rule::LowerCaseHost));
/// assert!(context.is_enabled(Rule::RemoveFragment));
/// assert!(!context.is_enabled(Rule::RemoveDefaultPort));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    /// Bits of enabled rules.
    enabled: u32,
}

impl Context {
    /// Bits of all safe rules.
    const SAFE_BITS: u32 = {
        let mut bits = 0;
        let mut i = 0;
        while i < Rule::ALL.len() {
            if Rule::ALL[i].is_safe() {
                bits |= Rule::ALL[i].bit();
            }
            i += 1;
        }
        bits
    };

    /// Returns a context with no rules enabled.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { enabled: 0 }
    }

    /// Returns a context with exactly the safe rules enabled.
    #[inline]
    #[must_use]
    pub const fn safe() -> Self {
        Self {
            enabled: Self::SAFE_BITS,
        }
    }

    /// Returns a copy with the given rule enabled or disabled.
    #[inline]
    #[must_use]
    pub const fn with(self, rule: Rule, enabled: bool) -> Self {
        let enabled = if enabled {
            self.enabled | rule.bit()
        } else {
            self.enabled & !rule.bit()
        };
        Self { enabled }
    }

    /// Returns the safe context with the given overrides applied in order.
    ///
    /// Rules not mentioned keep their default.
    #[must_use]
    pub fn from_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (Rule, bool)>,
    {
        overrides
            .into_iter()
            .fold(Self::safe(), |context, (rule, enabled)| {
                context.with(rule, enabled)
            })
    }

    /// Returns true if the rule is enabled.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self, rule: Rule) -> bool {
        self.enabled & rule.bit() != 0
    }

    /// Returns an iterator over the enabled rules.
    pub fn enabled_rules(self) -> impl Iterator<Item = Rule> {
        Rule::ALL
            .iter()
            .copied()
            .filter(move |rule| self.is_enabled(*rule))
    }
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::safe()
    }
}

impl FromIterator<Rule> for Context {
    /// Creates a context with exactly the given rules enabled.
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |context, rule| context.with(rule, true))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.enabled_rules()).finish()
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use core::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Context, Rule};

    impl Serialize for Context {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(Rule::ALL.len()))?;
            for rule in Rule::ALL {
                map.serialize_entry(rule.name(), &self.is_enabled(*rule))?;
            }
            map.end()
        }
    }

    /// Visitor for `Context`.
    struct ContextVisitor;

    impl<'de> Visitor<'de> for ContextVisitor {
        type Value = Context;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from normalization rule names to booleans")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut context = Context::safe();
            while let Some(name) = access.next_key::<String>()? {
                let rule = name
                    .parse::<Rule>()
                    .map_err(|_| de::Error::unknown_field(&name, &RULE_NAMES))?;
                let enabled = access.next_value::<bool>()?;
                context = context.with(rule, enabled);
            }
            Ok(context)
        }
    }

    /// Names of all rules, for error messages.
    const RULE_NAMES: [&str; 20] = {
        let mut names = [""; 20];
        let mut i = 0;
        while i < Rule::ALL.len() {
            names[i] = Rule::ALL[i].name();
            i += 1;
        }
        names
    };

    impl<'de> Deserialize<'de> for Context {
        /// Deserializes a partial map of overrides on top of the safe context.
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(ContextVisitor)
        }
    }
}
