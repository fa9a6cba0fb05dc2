mod company_address;
mod company_id;
mod company_name;

pub use company_address::CompanyAddress;
pub use company_id::CompanyId;
pub use company_name::CompanyName;

use domain_errors::DomainError;
use safe_string::{trim_whitespace, RequiredValidator, SafeString};

/// Shared pipeline for bounded text fields: presence, trimmed length,
/// then the safe-string chains. Every error is tagged with `field`.
pub(crate) fn parse_bounded_text(
    raw: Option<&str>,
    field: &str,
    min_length: usize,
    max_length: usize,
) -> Result<String, DomainError> {
    let raw = RequiredValidator::require(raw).map_err(|e| e.with_field(field))?;
    let trimmed = trim_whitespace(raw);
    if trimmed.is_empty() {
        return Err(DomainError::empty_string().with_field(field));
    }

    let length = trimmed.chars().count();
    if length < min_length {
        return Err(DomainError::string_too_short(min_length, length).with_field(field));
    }
    if length > max_length {
        return Err(DomainError::string_too_long(max_length, length).with_field(field));
    }

    SafeString::create(trimmed)
        .map(SafeString::into_inner)
        .map_err(|e| e.with_field(field))
}

/// Values read back from storage were sanitized when first created, so
/// only presence is re-checked.
pub(crate) fn restore_text(stored: &str, field: &str) -> Result<String, DomainError> {
    if trim_whitespace(stored).is_empty() {
        return Err(DomainError::empty_string().with_field(field));
    }
    Ok(stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_errors::ValidationKind;

    #[test]
    fn test_missing_value() {
        let err = parse_bounded_text(None, "name", 2, 10).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::String));
        assert_eq!(err.context()["field"], "name");
    }

    #[test]
    fn test_length_is_counted_after_trim() {
        let err = parse_bounded_text(Some("  a  "), "name", 2, 10).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::StringTooShort));
        assert_eq!(err.context()["actualLength"], 1);
        assert_eq!(parse_bounded_text(Some("  ab  "), "name", 2, 10).unwrap(), "ab");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let err = parse_bounded_text(Some("\u{FEFF}"), "name", 2, 10).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::EmptyString));
        assert_eq!(parse_bounded_text(Some("\u{FEFF}ab\u{FEFF}"), "name", 2, 10).unwrap(), "ab");
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        assert_eq!(parse_bounded_text(Some("çã"), "name", 2, 2).unwrap(), "çã");
    }

    #[test]
    fn test_restore_keeps_stored_value() {
        assert_eq!(restore_text("O&#x27Reilly", "name").unwrap(), "O&#x27Reilly");
        assert!(restore_text("   ", "name").is_err());
    }
}
