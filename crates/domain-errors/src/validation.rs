use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ValidationKind};

/// One failed field inside an aggregate validation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Failure of a single named field, input to [`DomainError::from_field_errors`]
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: String,
    pub error: DomainError,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: DomainError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

impl DomainError {
    /// Base string validation failure
    pub fn string_validation(message: impl Into<String>) -> Self {
        Self::validation_of(ValidationKind::String, message)
    }

    pub fn empty_string() -> Self {
        Self::validation_of(ValidationKind::EmptyString, "String must not be empty")
    }

    pub fn string_too_short(min_length: usize, actual_length: usize) -> Self {
        Self::validation_of(
            ValidationKind::StringTooShort,
            format!(
                "String must have at least {} characters (actual: {})",
                min_length, actual_length
            ),
        )
        .with_context("minLength", min_length)
        .with_context("actualLength", actual_length)
    }

    pub fn string_too_long(max_length: usize, actual_length: usize) -> Self {
        Self::validation_of(
            ValidationKind::StringTooLong,
            format!(
                "String must have at most {} characters (actual: {})",
                max_length, actual_length
            ),
        )
        .with_context("maxLength", max_length)
        .with_context("actualLength", actual_length)
    }

    pub fn invalid_characters(invalid_chars: &[String]) -> Self {
        Self::validation_of(
            ValidationKind::InvalidCharacters,
            format!("String contains invalid characters: {}", invalid_chars.join(", ")),
        )
        .with_context("invalidChars", invalid_chars.to_vec())
    }

    pub fn xss_detected(pattern: &str) -> Self {
        Self::validation_of(
            ValidationKind::XssDetected,
            format!("Potentially malicious XSS pattern detected: {}", pattern),
        )
        .with_context("pattern", pattern)
    }

    pub fn sql_injection_detected(pattern: &str) -> Self {
        Self::validation_of(
            ValidationKind::SqlInjectionDetected,
            format!("Potentially malicious SQL injection pattern detected: {}", pattern),
        )
        .with_context("pattern", pattern)
    }

    /// Collapse independent field failures into one `VALIDATION_ERRORS` report.
    ///
    /// Field order is preserved in both the details and the synthesized
    /// message. Returns `None` when there is nothing to report.
    pub fn from_field_errors<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = FieldError>,
    {
        let details: Vec<ValidationErrorDetail> = errors
            .into_iter()
            .map(|FieldError { field, error }| ValidationErrorDetail {
                field,
                message: error.message().to_string(),
                code: error.name().to_string(),
            })
            .collect();

        if details.is_empty() {
            return None;
        }

        let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
        let message = format!("Validation failed for fields: {}", fields.join(", "));
        Some(Self::aggregate(message, details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_too_short_carries_lengths() {
        let error = DomainError::string_too_short(2, 1).with_field("name");
        assert_eq!(error.validation_kind(), Some(ValidationKind::StringTooShort));
        assert_eq!(error.context()["minLength"], 2);
        assert_eq!(error.context()["actualLength"], 1);
        assert_eq!(error.context()["field"], "name");
        assert_eq!(error.code(), codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_too_long_carries_lengths() {
        let error = DomainError::string_too_long(255, 256);
        assert_eq!(error.context()["maxLength"], 255);
        assert_eq!(error.context()["actualLength"], 256);
        assert_eq!(error.name(), "StringTooLongError");
    }

    #[test]
    fn test_invalid_characters_lists_chars() {
        let error = DomainError::invalid_characters(&["<".to_string(), ">".to_string()]);
        assert_eq!(error.message(), "String contains invalid characters: <, >");
        assert_eq!(error.context()["invalidChars"], serde_json::json!(["<", ">"]));
    }

    #[test]
    fn test_malicious_input_errors_carry_pattern() {
        let xss = DomainError::xss_detected("<script>");
        assert_eq!(xss.context()["pattern"], "<script>");
        assert_eq!(xss.name(), "XssDetectedError");

        let sql = DomainError::sql_injection_detected("UNION SELECT");
        assert_eq!(sql.context()["pattern"], "UNION SELECT");
        assert_eq!(sql.name(), "SqlInjectionDetectedError");
    }

    #[test]
    fn test_from_field_errors_preserves_order() {
        let aggregate = DomainError::from_field_errors(vec![
            FieldError::new("name", DomainError::empty_string()),
            FieldError::new("address", DomainError::string_too_short(5, 3)),
            FieldError::new("id", DomainError::validation("bad id")),
        ])
        .unwrap();

        assert_eq!(aggregate.code(), codes::VALIDATION_ERRORS);
        assert_eq!(
            aggregate.message(),
            "Validation failed for fields: name, address, id"
        );

        let fields: Vec<&str> = aggregate.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "address", "id"]);
        assert_eq!(aggregate.errors()[0].code, "EmptyStringError");
        assert_eq!(aggregate.errors()[1].code, "StringTooShortError");
        assert_eq!(aggregate.errors()[2].code, "ValidationError");
        assert_eq!(aggregate.errors()[0].message, "String must not be empty");
    }

    #[test]
    fn test_from_field_errors_exposes_details_in_context() {
        let aggregate = DomainError::from_field_errors(vec![FieldError::new(
            "name",
            DomainError::empty_string(),
        )])
        .unwrap();

        let errors = aggregate.context()["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "name");
        assert_eq!(errors[0]["code"], "EmptyStringError");
    }

    #[test]
    fn test_from_field_errors_empty_yields_none() {
        assert!(DomainError::from_field_errors(Vec::new()).is_none());
    }
}
