/// Reduces one raw `Set-Cookie` header line to a `name=value` pair
/// suitable for a request `Cookie` header: the text after the first
/// `:` and before the first `;`, split on the first `=`, trimmed at
/// every step. Cookie attributes (path, expiry, flags) are discarded.
/// Returns `None` for lines with no `:` or an empty pre-`;` segment.
pub fn parse_set_cookie(raw: &str) -> Option<String> {
    let (_, after_colon) = raw.split_once(':')?;
    let pair = after_colon.split(';').next().unwrap_or("").trim();
    if pair.is_empty() {
        return None;
    }
    match pair.split_once('=') {
        Some((name, value)) => Some(format!("{}={}", name.trim(), value.trim())),
        None => Some(pair.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_attributes() {
        assert_eq!(
            parse_set_cookie("Set-Cookie: session=xyz; Path=/; HttpOnly"),
            Some("session=xyz".to_string())
        );
    }

    #[test]
    fn trims_each_segment() {
        assert_eq!(
            parse_set_cookie("Set-Cookie:  a = b ; Secure"),
            Some("a=b".to_string())
        );
    }

    #[test]
    fn empty_pair_is_skipped() {
        assert_eq!(parse_set_cookie("Set-Cookie: ;Path=/"), None);
    }

    #[test]
    fn missing_colon_is_skipped() {
        assert_eq!(parse_set_cookie("no header here"), None);
    }
}
