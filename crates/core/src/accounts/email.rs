//! Email format validation

/// Check an email address against the directory's format rules
///
/// Single pass, no regex engine: no whitespace anywhere, exactly one `@`,
/// a non-empty local part, and a domain containing a dot with characters
/// on both sides of the final one.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_missing_at_symbol() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-symbol"));
    }

    #[test]
    fn test_multiple_at_symbols() {
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
    }

    #[test]
    fn test_empty_parts() {
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
    }

    #[test]
    fn test_domain_needs_a_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!is_valid_email("us er@domain.com"));
        assert!(!is_valid_email("user@doma in.com"));
        assert!(!is_valid_email(" user@domain.com"));
    }
}
