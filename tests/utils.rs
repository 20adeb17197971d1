//! Utilities for tests.
#![allow(dead_code)]

use core::fmt::{self, Write as _};

/// Returns true if the displayed form of `d` is exactly `s`.
///
/// No allocation is involved, so this checks `Display` output independently
/// of `ToString`.
pub fn eq_display_str<T>(d: &T, s: &str) -> bool
where
    T: ?Sized + fmt::Display,
{
    /// Writer which consumes the expected string chunk by chunk.
    struct CmpWriter<'a>(&'a str);
    impl fmt::Write for CmpWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.0.strip_prefix(s) {
                Some(rest) => {
                    self.0 = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut writer = CmpWriter(s);
    let succeeded = write!(writer, "{}", d).is_ok();
    succeeded && writer.0.is_empty()
}

macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, AsRef::<str>::as_ref(right)),
                    "`eq_display_str(left, right)`\n  left: `{left}`\n right: `{right}`",
                );
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, AsRef::<str>::as_ref(right)),
                    "`eq_display_str(left, right)`\n  left: `{left}`\n right: `{right}`: {}",
                    format_args!($($args)*)
                );
            }
        }
    }};
}
