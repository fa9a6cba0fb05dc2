use domain_errors::DomainError;
use lazy_static::lazy_static;
use regex::Regex;

use super::StringValidator;

lazy_static! {
    /// Checked in order; the first match is reported
    static ref XSS_PATTERNS: Vec<Regex> = [
        r"(?is)<script.*?>.*?</script>",
        r"(?is)<style.*?>.*?</style>",
        r"(?is)<iframe.*?>",
        r#"(?i)on[a-z0-9_]+\s*=\s*["'][^"']*["']"#,
        r"(?i)javascript:\s*",
        r"(?is)<object.*?>",
        r"(?is)<embed.*?>",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Rejects script/style/iframe/object/embed tags, inline event handlers
/// and `javascript:` URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct XssDetectionValidator;

impl StringValidator for XssDetectionValidator {
    fn validate(&self, input: &str) -> Result<(), DomainError> {
        match XSS_PATTERNS.iter().find_map(|pattern| pattern.find(input)) {
            Some(found) => Err(DomainError::xss_detected(found.as_str())),
            None => Ok(()),
        }
    }
}
