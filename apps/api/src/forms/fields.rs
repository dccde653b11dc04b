//! Field-level checks shared by the public forms and the resume builder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

pub const MAX_NAME_CHARS: usize = 255;
pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Returns the trimmed value, or a validation error naming `field`.
pub fn required<'a>(
    field: &str,
    value: Option<&'a str>,
    max_chars: usize,
) -> Result<&'a str, AppError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    check_length(field, value, max_chars)?;
    Ok(value)
}

/// Trimmed value if present and non-blank; length-checked.
pub fn optional<'a>(
    field: &str,
    value: Option<&'a str>,
    max_chars: usize,
) -> Result<Option<&'a str>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => check_length(field, v, max_chars).map(|_| Some(v)),
        None => Ok(None),
    }
}

pub fn email<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    let value = required(field, value, MAX_NAME_CHARS)?;
    if !EMAIL.is_match(value) {
        return Err(AppError::Validation(format!("{field} must be a valid email address")));
    }
    Ok(value)
}

fn check_length(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
    if value.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("name", Some("  Kim "), 10).unwrap(), "Kim");
    }

    #[test]
    fn test_required_rejects_missing_and_blank() {
        assert!(required("name", None, 10).is_err());
        let err = required("name", Some("   "), 10).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: name is required");
    }

    #[test]
    fn test_length_cap() {
        assert!(required("name", Some("abcdef"), 5).is_err());
        assert!(optional("phone", Some("123456"), 5).is_err());
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional("phone", Some("  "), 5).unwrap(), None);
        assert_eq!(optional("phone", None, 5).unwrap(), None);
        assert_eq!(optional("phone", Some("123"), 5).unwrap(), Some("123"));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(email("email", Some("a@b.co")).unwrap(), "a@b.co");
        for bad in ["plain", "a@b", "a b@c.d", "@c.d"] {
            assert!(email("email", Some(bad)).is_err(), "{bad} accepted");
        }
    }
}
