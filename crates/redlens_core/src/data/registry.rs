/// Option label that converts a dropdown into a free-text field.
pub const OTHER: &str = "other...";

/// Value shape a known request header permits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueShape {
    /// Any value, edited as plain text.
    FreeText,
    /// A bounded choice set, plus the `other...` escape to free text.
    BoundedChoice(&'static [&'static str]),
    /// The structured credential sub-form replaces the value field.
    Credential,
}

const ACCEPT_LANGUAGE_VALUES: &[&str] = &["", "en", "en-us", "en-uk", "fr"];

const CACHE_CONTROL_VALUES: &[&str] = &["", "no-cache", "only-if-cached"];

const USER_AGENT_VALUES: &[&str] = &[
    "redlens/1 (https://redlens.dev/about)",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:74.0) Gecko/20100101 Firefox/74.0",
    "Mozilla/5.0 (X11; U; Linux x86_64; en-US) Gecko Firefox/3.0.8",
    "Opera/9.80 (Windows NT 5.1; U; cs) Presto/2.2.15 Version/10.00",
];

/// Known request headers, in dropdown order. Lookup is case-sensitive.
pub const KNOWN_HEADERS: &[(&str, ValueShape)] = &[
    ("Accept-Language", ValueShape::BoundedChoice(ACCEPT_LANGUAGE_VALUES)),
    ("Authorization", ValueShape::Credential),
    ("Cache-Control", ValueShape::BoundedChoice(CACHE_CONTROL_VALUES)),
    ("Cookie", ValueShape::FreeText),
    ("Referer", ValueShape::FreeText),
    ("User-Agent", ValueShape::BoundedChoice(USER_AGENT_VALUES)),
];

/// Headers the analysis engine sets itself; user edits are warned
/// against but never blocked.
pub const PROTECTED_HEADERS: &[&str] = &[
    "accept-encoding",
    "if-modified-since",
    "if-none-match",
    "connection",
    "transfer-encoding",
    "content-length",
];

pub fn lookup(name: &str) -> Option<ValueShape> {
    KNOWN_HEADERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, shape)| *shape)
}

pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn is_protected(name: &str) -> bool {
    PROTECTED_HEADERS
        .iter()
        .any(|protected| protected.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_known("Cookie"));
        assert!(!is_known("cookie"));
        assert_eq!(lookup("Referer"), Some(ValueShape::FreeText));
        assert_eq!(lookup("Authorization"), Some(ValueShape::Credential));
        assert_eq!(lookup("X-Custom"), None);
    }

    #[test]
    fn protected_match_ignores_case() {
        assert!(is_protected("Accept-Encoding"));
        assert!(is_protected("content-length"));
        assert!(!is_protected("Cookie"));
    }
}
