use super::{CategoryHandler, ErrorCategory, ErrorHandler, ErrorResponse, CANONICAL_ORDER};
use crate::error::DomainError;

/// Ordered, immutable list of handlers. Total: every error yields a response.
pub struct ErrorHandlerChain {
    handlers: Vec<Box<dyn ErrorHandler>>,
}

impl ErrorHandlerChain {
    /// Chain in [`CANONICAL_ORDER`]
    pub fn new() -> Self {
        Self::from_categories(&CANONICAL_ORDER)
    }

    pub fn from_categories(categories: &[ErrorCategory]) -> Self {
        let handlers = categories
            .iter()
            .map(|category| Box::new(CategoryHandler::new(*category)) as Box<dyn ErrorHandler>)
            .collect();
        Self { handlers }
    }

    /// Chain made of caller-supplied handlers, tried in order
    pub fn custom(handlers: Vec<Box<dyn ErrorHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handle(&self, error: &DomainError) -> ErrorResponse {
        self.handlers
            .iter()
            .find_map(|handler| handler.handle(error))
            .unwrap_or_else(ErrorResponse::internal_fallback)
    }
}

impl Default for ErrorHandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ErrorHandlerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorHandlerChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
