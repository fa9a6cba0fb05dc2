use std::fmt;

use domain_errors::DomainError;
use lazy_static::lazy_static;

use crate::sanitizers::{SanitizerChain, StringSanitizer};
use crate::validators::{StringValidator, ValidatorChain};

lazy_static! {
    static ref VALIDATORS: ValidatorChain = ValidatorChain::standard();
    static ref SANITIZERS: SanitizerChain = SanitizerChain::standard();
}

/// Immutable string that passed validation and was sanitized
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
    /// Validate `input` with the standard validator chain, then sanitize it.
    ///
    /// Validation errors are returned as produced by the failing validator.
    /// Sanitization runs on the raw input; trimming is the caller's concern.
    pub fn create(input: &str) -> Result<Self, DomainError> {
        Self::create_with(input, &*VALIDATORS, &*SANITIZERS)
    }

    /// Same as [`SafeString::create`] with caller-supplied chains
    pub fn create_with(
        input: &str,
        validator: &dyn StringValidator,
        sanitizer: &dyn StringSanitizer,
    ) -> Result<Self, DomainError> {
        validator.validate(input)?;
        Ok(Self(sanitizer.sanitize(input).value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
