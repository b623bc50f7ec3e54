//! Percent-encoding of text for URLs

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but ASCII alphanumerics and `-._~` gets escaped, `/` included
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, ESCAPED).to_string()
}

/// Decode `%XX` escapes
///
/// Malformed escapes pass through unchanged, invalid UTF-8 becomes U+FFFD and
/// `+` stays a plus sign.
pub fn url_decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
