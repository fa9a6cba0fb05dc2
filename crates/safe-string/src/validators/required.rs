use domain_errors::DomainError;

use super::StringValidator;

/// Strip leading and trailing whitespace, counting U+FEFF as whitespace
pub fn trim_whitespace(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Rejects absent input and input that is empty after trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Unwrap an optional raw value, failing when it is absent
    pub fn require(input: Option<&str>) -> Result<&str, DomainError> {
        input.ok_or_else(|| {
            DomainError::string_validation("Field is required and must not be null")
        })
    }
}

impl StringValidator for RequiredValidator {
    fn validate(&self, input: &str) -> Result<(), DomainError> {
        if trim_whitespace(input).is_empty() {
            return Err(DomainError::empty_string());
        }
        Ok(())
    }
}
