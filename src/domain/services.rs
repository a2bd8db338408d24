/// Returns everything after the first `@` of a principal name.
///
/// Absent, empty, and `@`-less identities yield an empty string. No syntax
/// checking is done; `"user@"` yields `""` and `"a@b@c"` yields `"b@c"`.
pub fn extract_domain(identity: Option<&str>) -> String {
    match identity {
        Some(value) if !value.is_empty() => value
            .split_once('@')
            .map(|(_, domain)| domain.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Exact, case-sensitive comparison against the expected domain.
pub fn is_valid(domain: Option<&str>, expected: &str) -> bool {
    match domain {
        Some(domain) => domain == expected,
        None => false,
    }
}

/// Full check used by the gate: an empty domain never passes, even against an
/// empty expected value.
pub fn is_authorized(domain: &str, expected: &str) -> bool {
    !domain.is_empty() && is_valid(Some(domain), expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_without_at() {
        assert_eq!(extract_domain(Some("alice")), "");
        assert_eq!(extract_domain(Some("contoso.com")), "");
    }

    #[test]
    fn test_extract_domain_local_at_domain() {
        assert_eq!(extract_domain(Some("alice@contoso.com")), "contoso.com");
        assert_eq!(extract_domain(Some("user@")), "");
        assert_eq!(extract_domain(Some("@contoso.com")), "contoso.com");
    }

    #[test]
    fn test_extract_domain_uses_first_at() {
        assert_eq!(extract_domain(Some("a@b@c")), "b@c");
    }

    #[test]
    fn test_extract_domain_absent_or_empty() {
        assert_eq!(extract_domain(None), "");
        assert_eq!(extract_domain(Some("")), "");
    }

    #[test]
    fn test_extract_domain_keeps_non_ascii() {
        assert_eq!(extract_domain(Some("ユーザー@例え.jp")), "例え.jp");
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(Some("contoso.com"), "contoso.com"));
        assert!(!is_valid(Some(""), "contoso.com"));
        assert!(!is_valid(None, "contoso.com"));
        assert!(!is_valid(Some("Example.com"), "example.com"));
        assert!(!is_valid(Some("contoso.com.evil"), "contoso.com"));
    }

    #[test]
    fn test_is_authorized_rejects_empty_domain() {
        assert!(!is_authorized("", ""));
        assert!(!is_authorized("", "contoso.com"));
        assert!(is_authorized("contoso.com", "contoso.com"));
    }
}
