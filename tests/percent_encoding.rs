//! Tests for percent encoding.

use uri_canon::normalize::{decode_unreserved, normalize_percent_encoding};
use uri_canon::percent_encoding::decode;
use uri_canon::{canonicalize, Uri};

#[test]
fn decode_all_triplets() {
    assert_eq!(decode("%41%2F%3a%20"), "A/: ");
    assert_eq!(decode("%CE%B1%e3%81%82"), "\u{03B1}\u{3042}");
}

#[test]
fn decode_invalid_utf8() {
    assert_eq!(decode("%FF%41"), "\u{FFFD}A");
    assert_eq!(decode("%CE"), "\u{FFFD}");
}

#[test]
fn decode_malformed() {
    for s in ["%", "%4", "%zz", "100%-off", "a%"] {
        assert_eq!(decode(s), s, "{s:?}");
    }
    assert_eq!(decode("%%41"), "%A");
}

#[test]
fn normalize_triplets() {
    assert_eq!(normalize_percent_encoding("%7e%7E%2f%2F"), "~~%2F%2F");
    assert_eq!(decode_unreserved("%7e%7E%2f%2F"), "~~%2f%2F");
    assert_eq!(normalize_percent_encoding("%ce%b1"), "%CE%B1");
}

#[test]
fn decoded_components() {
    let uri = Uri::parse("http://example.com/a%20b/%CE%B1?q=%26%3D#%23").expect("valid URI");
    assert_eq!(uri.path_decoded(), "/a b/\u{03B1}");
    assert_eq!(uri.query_decoded().as_deref(), Some("q=&="));
    assert_eq!(uri.fragment_decoded().as_deref(), Some("#"));
}

#[test]
fn encode_illegal_characters() {
    assert_eq!(
        canonicalize("//h/\"a\"<b>{c}|d\\e^f`g").expect("valid"),
        "//h/%22a%22%3Cb%3E%7Bc%7D%7Cd%5Ce%5Ef%60g"
    );
    assert_eq!(
        canonicalize("//h/?\u{03B1}=[x]#\u{3042}").expect("valid"),
        "//h/?%CE%B1=%5Bx%5D#%E3%81%82"
    );
}
