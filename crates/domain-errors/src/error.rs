use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::codes;
use crate::validation::ValidationErrorDetail;

/// Free-form diagnostic payload attached to every domain error
pub type ErrorContext = Map<String, Value>;

/// Refinement of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    General,
    String,
    EmptyString,
    StringTooShort,
    StringTooLong,
    InvalidCharacters,
    XssDetected,
    SqlInjectionDetected,
}

impl ValidationKind {
    /// Type name reported as the `code` of an aggregated field failure
    pub fn name(&self) -> &'static str {
        match self {
            ValidationKind::General => "ValidationError",
            ValidationKind::String => "StringValidationError",
            ValidationKind::EmptyString => "EmptyStringError",
            ValidationKind::StringTooShort => "StringTooShortError",
            ValidationKind::StringTooLong => "StringTooLongError",
            ValidationKind::InvalidCharacters => "InvalidCharactersError",
            ValidationKind::XssDetected => "XssDetectedError",
            ValidationKind::SqlInjectionDetected => "SqlInjectionDetectedError",
        }
    }
}

/// Closed set of error families
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Domain error with a caller-supplied code and no further classification
    Generic,
    BusinessRule,
    Validation(ValidationKind),
    NotFound,
    /// Several independent field failures reported together
    ValidationErrors(Vec<ValidationErrorDetail>),
}

/// Structured failure carrying a stable code, a message, context and the
/// capture timestamp.
///
/// Values are immutable once built; the `with_*` builders consume and
/// return the error so context can be attached at construction sites.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    code: String,
    context: ErrorContext,
    occurred_at: DateTime<Utc>,
}

impl DomainError {
    fn build(kind: ErrorKind, message: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            kind,
            message: message.into(),
            code: if code.trim().is_empty() {
                codes::DOMAIN_ERROR.to_string()
            } else {
                code
            },
            context: ErrorContext::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Generic domain error with a custom code; a blank code becomes `DOMAIN_ERROR`
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::build(ErrorKind::Generic, message, code)
    }

    pub fn business_rule(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::build(ErrorKind::BusinessRule, message, code)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::validation_of(ValidationKind::General, message)
    }

    pub(crate) fn validation_of(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self::build(ErrorKind::Validation(kind), message, codes::VALIDATION_ERROR)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::build(ErrorKind::NotFound, message, codes::NOT_FOUND)
    }

    pub(crate) fn aggregate(message: String, errors: Vec<ValidationErrorDetail>) -> Self {
        let mut error = Self::build(
            ErrorKind::ValidationErrors(Vec::new()),
            message,
            codes::VALIDATION_ERRORS,
        );
        error.context.insert(
            "errors".to_string(),
            serde_json::to_value(&errors).unwrap_or(Value::Array(Vec::new())),
        );
        error.kind = ErrorKind::ValidationErrors(errors);
        error
    }

    /// Attach a single context entry, replacing any previous value for `key`
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Tag the error with the field it belongs to, keeping an existing tag
    pub fn with_field(mut self, field: &str) -> Self {
        self.context
            .entry("field")
            .or_insert_with(|| Value::String(field.to_string()));
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Capture time in ISO-8601 with millisecond precision
    pub fn timestamp(&self) -> String {
        self.occurred_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Type name of the error, e.g. `XssDetectedError`
    pub fn name(&self) -> &'static str {
        match &self.kind {
            ErrorKind::Generic => "DomainError",
            ErrorKind::BusinessRule => "BusinessRuleError",
            ErrorKind::Validation(kind) => kind.name(),
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::ValidationErrors(_) => "ValidationErrors",
        }
    }

    /// Field details of an aggregate; empty for every other kind
    pub fn errors(&self) -> &[ValidationErrorDetail] {
        match &self.kind {
            ErrorKind::ValidationErrors(errors) => errors,
            _ => &[],
        }
    }

    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self.kind {
            ErrorKind::Validation(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    pub fn is_validation_errors(&self) -> bool {
        matches!(self.kind, ErrorKind::ValidationErrors(_))
    }

    /// Validation failures are business-rule failures too
    pub fn is_business_rule(&self) -> bool {
        matches!(self.kind, ErrorKind::BusinessRule | ErrorKind::Validation(_))
    }
}
