//! Mapping from domain errors to protocol-level responses.
//!
//! Handlers are tried in list order; the first one that recognizes the error
//! produces the response. The order in [`CANONICAL_ORDER`] is load-bearing:
//! validation failures are business-rule failures too, so the validation
//! handler must run before the business-rule one.

mod category;
mod chain;

pub use category::{CategoryHandler, ErrorCategory, CANONICAL_ORDER};
pub use chain::ErrorHandlerChain;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::codes;
use crate::error::{DomainError, ErrorContext};
use crate::validation::ValidationErrorDetail;

/// Response record derived from a domain error, produced fresh per call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub timestamp: String,
    pub context: ErrorContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationErrorDetail>>,
}

impl ErrorResponse {
    /// Copy code, message, timestamp and context from `error`
    pub fn from_error(error: &DomainError, status_code: u16) -> Self {
        Self {
            status_code,
            code: error.code().to_string(),
            message: error.message().to_string(),
            timestamp: error.timestamp(),
            context: error.context().clone(),
            errors: None,
        }
    }

    /// Response used when no handler recognized the error
    pub fn internal_fallback() -> Self {
        Self {
            status_code: 500,
            code: codes::INTERNAL_ERROR.to_string(),
            message: "An unexpected error occurred".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            context: ErrorContext::new(),
            errors: None,
        }
    }
}

/// One link of the handler chain
pub trait ErrorHandler: Send + Sync {
    /// Produce a response if this handler recognizes `error`, `None` to delegate
    fn handle(&self, error: &DomainError) -> Option<ErrorResponse>;
}
