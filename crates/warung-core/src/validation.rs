//! Field validators for the auth forms.
//!
//! Pure, stateless functions returning booleans. Aggregation into per-field
//! error messages happens in `crate::auth`.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

// Local part, `@`, then at least two dot-separated domain labels.
// Label lengths follow the usual address-matcher limits.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+._%\-]{1,256}@[A-Za-z0-9][A-Za-z0-9\-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Returns true if `email` is a well-formed address.
pub fn is_email_valid(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Returns true if `password` meets the minimum length.
pub fn is_password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Returns true if `field` is empty after trimming whitespace.
pub fn is_field_empty(field: &str) -> bool {
    field.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_addresses_pass() {
        assert!(is_email_valid("budi@kampus.ac.id"));
        assert!(is_email_valid("a.b+tag@example.com"));
        assert!(is_email_valid("user_name%x@sub.domain.org"));
    }

    #[test]
    fn missing_at_sign_fails() {
        assert!(!is_email_valid("budikampus.ac.id"));
        assert!(!is_email_valid(""));
    }

    #[test]
    fn missing_or_bare_domain_fails() {
        assert!(!is_email_valid("budi@"));
        assert!(!is_email_valid("budi@localhost"));
        assert!(!is_email_valid("budi@.com"));
        assert!(!is_email_valid("@example.com"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(!is_password_valid(""));
        assert!(!is_password_valid("12345"));
        assert!(is_password_valid("123456"));
        assert!(is_password_valid("rahasia-panjang"));
    }

    #[test]
    fn password_length_counts_chars_not_bytes() {
        // Six multi-byte characters are still six characters.
        assert!(is_password_valid("éééééé"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(is_field_empty(""));
        assert!(is_field_empty("   "));
        assert!(is_field_empty("\t\n"));
        assert!(!is_field_empty(" x "));
    }
}
