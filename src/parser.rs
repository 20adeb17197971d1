//! Parser.

pub(crate) mod char;
mod details;
pub(crate) mod str;

pub(crate) use self::details::{decompose_uri_reference, RawComponents};
