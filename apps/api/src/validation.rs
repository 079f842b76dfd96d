use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex compiles"));

/// Validates an email address, naming the offending field on failure.
pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field}: '{value}' is not a valid email address"
        )))
    }
}

/// Rejects empty or whitespace-only string fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::Validation(format!("{field}: must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_passes() {
        assert!(validate_email("email", "srishti.186.goel@gmail.com").is_ok());
    }

    #[test]
    fn test_email_with_subdomain_passes() {
        assert!(validate_email("email", "user@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_email_without_at_fails() {
        assert!(validate_email("email", "not-an-email").is_err());
    }

    #[test]
    fn test_email_without_domain_dot_fails() {
        assert!(validate_email("email", "user@localhost").is_err());
    }

    #[test]
    fn test_email_with_spaces_fails() {
        assert!(validate_email("email", "user name@example.com").is_err());
    }

    #[test]
    fn test_empty_email_fails() {
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn test_email_error_names_field() {
        let err = validate_email("personal.email", "bad").unwrap_err();
        assert!(err.to_string().contains("personal.email"));
    }

    #[test]
    fn test_non_empty_passes() {
        assert!(require_non_empty("name", "Srishti").is_ok());
    }

    #[test]
    fn test_empty_fails() {
        assert!(require_non_empty("name", "").is_err());
    }

    #[test]
    fn test_whitespace_only_fails() {
        assert!(require_non_empty("subject", "   ").is_err());
    }

    #[test]
    fn test_non_empty_error_names_field() {
        let err = require_non_empty("message", "").unwrap_err();
        assert!(err.to_string().contains("message"));
    }
}
