mod html;
mod sql;

pub use html::HtmlSanitizer;
pub use sql::SqlSanitizer;

/// Output of a sanitizer stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationResult {
    pub value: String,
    pub modified: bool,
}

impl SanitizationResult {
    /// Compare `value` against the stage input to derive `modified`
    pub fn compare(input: &str, value: String) -> Self {
        let modified = value != input;
        Self { value, modified }
    }
}

/// Total transformation over a string; never fails
pub trait StringSanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> SanitizationResult;
}

/// Each stage receives the previous stage's output. `modified` is set when
/// any stage changed its input.
pub struct SanitizerChain {
    sanitizers: Vec<Box<dyn StringSanitizer>>,
}

impl SanitizerChain {
    pub fn new(sanitizers: Vec<Box<dyn StringSanitizer>>) -> Self {
        Self { sanitizers }
    }

    /// HTML escaping, then SQL character neutralization
    pub fn standard() -> Self {
        Self::new(vec![Box::new(HtmlSanitizer), Box::new(SqlSanitizer)])
    }
}

impl StringSanitizer for SanitizerChain {
    fn sanitize(&self, input: &str) -> SanitizationResult {
        let initial = SanitizationResult {
            value: input.to_string(),
            modified: false,
        };

        self.sanitizers.iter().fold(initial, |acc, sanitizer| {
            let next = sanitizer.sanitize(&acc.value);
            SanitizationResult {
                value: next.value,
                modified: acc.modified || next.modified,
            }
        })
    }
}

impl Default for SanitizerChain {
    fn default() -> Self {
        Self::standard()
    }
}
