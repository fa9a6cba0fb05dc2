use super::{SanitizationResult, StringSanitizer};

/// Escapes `<`, `>`, `"` and `'` as HTML entities
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl StringSanitizer for HtmlSanitizer {
    fn sanitize(&self, input: &str) -> SanitizationResult {
        let sanitized = input
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;");

        SanitizationResult::compare(input, sanitized)
    }
}
