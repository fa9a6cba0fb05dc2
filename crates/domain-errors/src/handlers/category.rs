use super::{ErrorHandler, ErrorResponse};
use crate::error::DomainError;

/// Error family recognized by one handler of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    ValidationErrors,
    Validation,
    BusinessRule,
    /// Catch-all, recognizes every error
    Unclassified,
}

/// Precedence of the default chain
pub const CANONICAL_ORDER: [ErrorCategory; 5] = [
    ErrorCategory::NotFound,
    ErrorCategory::ValidationErrors,
    ErrorCategory::Validation,
    ErrorCategory::BusinessRule,
    ErrorCategory::Unclassified,
];

impl ErrorCategory {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorCategory::NotFound => 404,
            ErrorCategory::ValidationErrors | ErrorCategory::Validation => 400,
            ErrorCategory::BusinessRule => 422,
            ErrorCategory::Unclassified => 500,
        }
    }

    pub fn matches(self, error: &DomainError) -> bool {
        match self {
            ErrorCategory::NotFound => error.is_not_found(),
            ErrorCategory::ValidationErrors => error.is_validation_errors(),
            ErrorCategory::Validation => error.is_validation(),
            ErrorCategory::BusinessRule => error.is_business_rule(),
            ErrorCategory::Unclassified => true,
        }
    }
}

/// Handler recognizing exactly one [`ErrorCategory`]
#[derive(Debug, Clone, Copy)]
pub struct CategoryHandler {
    category: ErrorCategory,
}

impl CategoryHandler {
    pub fn new(category: ErrorCategory) -> Self {
        Self { category }
    }
}

impl ErrorHandler for CategoryHandler {
    fn handle(&self, error: &DomainError) -> Option<ErrorResponse> {
        if !self.category.matches(error) {
            return None;
        }

        let mut response = ErrorResponse::from_error(error, self.category.status_code());
        if self.category == ErrorCategory::ValidationErrors {
            response.errors = Some(error.errors().to_vec());
        }
        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn test_not_found_handler_ignores_other_errors() {
        let handler = CategoryHandler::new(ErrorCategory::NotFound);
        assert!(handler.handle(&DomainError::validation("x")).is_none());
        assert_eq!(
            handler.handle(&DomainError::not_found("x")).unwrap().status_code,
            404
        );
    }

    #[test]
    fn test_business_rule_handler_also_matches_validation() {
        let handler = CategoryHandler::new(ErrorCategory::BusinessRule);
        let response = handler.handle(&DomainError::validation("x")).unwrap();
        assert_eq!(response.status_code, 422);
    }

    #[test]
    fn test_validation_errors_handler_lists_details() {
        let handler = CategoryHandler::new(ErrorCategory::ValidationErrors);
        let error = DomainError::from_field_errors(vec![
            FieldError::new("name", DomainError::empty_string()),
            FieldError::new("address", DomainError::empty_string()),
        ])
        .unwrap();

        let response = handler.handle(&error).unwrap();
        assert_eq!(response.status_code, 400);
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].field, "address");
        assert!(response.context.contains_key("errors"));
    }

    #[test]
    fn test_unclassified_matches_everything() {
        let handler = CategoryHandler::new(ErrorCategory::Unclassified);
        for error in [
            DomainError::new("a", "A"),
            DomainError::not_found("b"),
            DomainError::business_rule("c", "C"),
        ] {
            assert_eq!(handler.handle(&error).unwrap().status_code, 500);
        }
    }
}
