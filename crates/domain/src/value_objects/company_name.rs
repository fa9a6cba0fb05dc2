use std::fmt;

use domain_errors::DomainError;

use super::{parse_bounded_text, restore_text};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    pub const FIELD: &'static str = "name";
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 255;

    /// Validate and sanitize a raw name; `None` means the field was absent
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        parse_bounded_text(raw, Self::FIELD, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    /// Rebuild from a previously persisted value
    pub fn restore(stored: &str) -> Result<Self, DomainError> {
        restore_text(stored, Self::FIELD).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_errors::ValidationKind;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = CompanyName::parse(Some("  Acme Corp  ")).unwrap();
        assert_eq!(name.value(), "Acme Corp");
    }

    #[test]
    fn test_name_is_sanitized() {
        let name = CompanyName::parse(Some("O'Reilly Media")).unwrap();
        assert_eq!(name.value(), "O&#x27Reilly Media");
    }

    #[test]
    fn test_name_bounds() {
        let short = CompanyName::parse(Some("A")).unwrap_err();
        assert_eq!(short.validation_kind(), Some(ValidationKind::StringTooShort));
        assert_eq!(short.context()["minLength"], 2);

        assert!(CompanyName::parse(Some(&"a".repeat(255))).is_ok());
        let long = CompanyName::parse(Some(&"a".repeat(256))).unwrap_err();
        assert_eq!(long.validation_kind(), Some(ValidationKind::StringTooLong));
        assert_eq!(long.context()["field"], "name");
    }

    #[test]
    fn test_stored_length_grows_with_escaping() {
        for quote in ["\"", "'"] {
            let name = CompanyName::parse(Some(&quote.repeat(CompanyName::MAX_LENGTH))).unwrap();
            assert_eq!(name.value().chars().count(), 5 * CompanyName::MAX_LENGTH);
        }
    }

    #[test]
    fn test_empty_name() {
        let err = CompanyName::parse(Some("   ")).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::EmptyString));
        assert_eq!(err.name(), "EmptyStringError");
    }

    #[test]
    fn test_malicious_name() {
        let err = CompanyName::parse(Some("<script>alert(1)</script>Acme")).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::XssDetected));
        assert_eq!(err.context()["field"], "name");
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(
            CompanyName::parse(Some("Acme")).unwrap(),
            CompanyName::parse(Some(" Acme ")).unwrap()
        );
        assert_ne!(
            CompanyName::parse(Some("Acme")).unwrap(),
            CompanyName::parse(Some("Acme Inc")).unwrap()
        );
    }
}
