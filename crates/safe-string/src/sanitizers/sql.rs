use super::{SanitizationResult, StringSanitizer};

/// Strips statement separators and comment markers, doubles single quotes
/// and escapes backslashes
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlSanitizer;

impl StringSanitizer for SqlSanitizer {
    fn sanitize(&self, input: &str) -> SanitizationResult {
        let sanitized = input
            .replace(';', "")
            .replace("--", "")
            .replace("/*", "")
            .replace("*/", "")
            .replace('\'', "''")
            .replace('\\', "\\\\");

        SanitizationResult::compare(input, sanitized)
    }
}
