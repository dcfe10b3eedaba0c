//! Percent encoding as defined by [RFC 5849 Section 3.6](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6).

use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode text for use in a base string or `Authorization` header.
///
/// Text is encoded as UTF-8 first. Unreserved characters are kept as-is and
/// every other byte becomes `%XX` with uppercase hex digits.
///
/// ```
/// use oauthsign_oauth1::percent;
///
/// assert_eq!(percent::encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent::encode("-._~"), "-._~");
/// ```
pub fn encode(text: &str) -> String {
    utf8_percent_encode(text, &OAUTH_ENCODE_SET).to_string()
}
