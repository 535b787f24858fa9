//! Absolute-URL validation.
//!
//! A candidate is accepted only when it matches the URL pattern *and*
//! re-parses structurally with a non-empty scheme and host. The two checks
//! can disagree on malformed input, and both must pass.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled pattern for absolute HTTP/HTTPS URLs.
///
/// Host is a dotted domain (labels of 1-63 letters/digits/hyphens, no
/// leading or trailing hyphen, 2-6 letter TLD), `localhost`, or a
/// dotted-quad IPv4 address. Port, path, and query are optional.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("URL pattern must compile")
});

/// Returns whether `candidate` is a well-formed absolute HTTP/HTTPS URL.
///
/// Never panics; any parse failure is reported as `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    if !URL_REGEX.is_match(candidate) {
        return false;
    }

    match Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
