mod required;
mod sql_injection;
mod xss;

pub use required::{trim_whitespace, RequiredValidator};
pub use sql_injection::SqlInjectionDetectionValidator;
pub use xss::XssDetectionValidator;

use domain_errors::DomainError;

/// A single check over one input string
pub trait StringValidator: Send + Sync {
    fn validate(&self, input: &str) -> Result<(), DomainError>;
}

/// Validators run in list order; the first failure is returned untouched
/// and later validators are not consulted.
pub struct ValidatorChain {
    validators: Vec<Box<dyn StringValidator>>,
}

impl ValidatorChain {
    pub fn new(validators: Vec<Box<dyn StringValidator>>) -> Self {
        Self { validators }
    }

    /// Required, then XSS detection, then SQL injection detection
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RequiredValidator),
            Box::new(XssDetectionValidator),
            Box::new(SqlInjectionDetectionValidator),
        ])
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl StringValidator for ValidatorChain {
    fn validate(&self, input: &str) -> Result<(), DomainError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

impl Default for ValidatorChain {
    fn default() -> Self {
        Self::standard()
    }
}
