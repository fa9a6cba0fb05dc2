pub mod error;
pub mod handlers;
pub mod validation;

pub use error::{DomainError, ErrorContext, ErrorKind, ValidationKind};
pub use handlers::{
    CategoryHandler, ErrorCategory, ErrorHandler, ErrorHandlerChain, ErrorResponse,
    CANONICAL_ORDER,
};
pub use validation::{FieldError, ValidationErrorDetail};

/// Stable machine-readable codes shared across crates
pub mod codes {
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const VALIDATION_ERRORS: &str = "VALIDATION_ERRORS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
}
