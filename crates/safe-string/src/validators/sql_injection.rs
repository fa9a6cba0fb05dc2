use domain_errors::DomainError;
use lazy_static::lazy_static;
use regex::Regex;

use super::StringValidator;

lazy_static! {
    /// Checked in order; the first match is reported
    static ref SQL_INJECTION_PATTERNS: Vec<Regex> = [
        r"(?i);\s*(DROP|DELETE|UPDATE|INSERT|CREATE|ALTER|EXEC|EXECUTE)\s+",
        r"(?i)UNION\s+SELECT",
        r"(?m)--\s*$",
        r"(?s)/\*.*?\*/",
        r"(?i)';\s*--",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Rejects destructive statements after a separator, `UNION SELECT`,
/// trailing line comments, block comments and `'; --`
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlInjectionDetectionValidator;

impl StringValidator for SqlInjectionDetectionValidator {
    fn validate(&self, input: &str) -> Result<(), DomainError> {
        match SQL_INJECTION_PATTERNS
            .iter()
            .find_map(|pattern| pattern.find(input))
        {
            Some(found) => Err(DomainError::sql_injection_detected(found.as_str().trim())),
            None => Ok(()),
        }
    }
}
