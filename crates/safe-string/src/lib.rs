//! Validation and sanitization of free-text input.
//!
//! Validators reject dangerous input and stop at the first failure.
//! Sanitizers never reject; each stage feeds the next one. [`SafeString`]
//! runs the standard validator chain and then the standard sanitizer chain.

pub mod safe_string;
pub mod sanitizers;
pub mod validators;

pub use safe_string::SafeString;
pub use sanitizers::{
    HtmlSanitizer, SanitizationResult, SanitizerChain, SqlSanitizer, StringSanitizer,
};
pub use validators::{
    trim_whitespace, RequiredValidator, SqlInjectionDetectionValidator, StringValidator,
    ValidatorChain, XssDetectionValidator,
};
