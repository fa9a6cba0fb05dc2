use domain_errors::DomainError;

/// Message used when an identifier is missing or not UUID-shaped
pub const INVALID_COMPANY_ID: &str = "Company ID is required and must be a valid UUID";

pub fn invalid_company_id() -> DomainError {
    DomainError::validation(INVALID_COMPANY_ID).with_field("id")
}

/// Lookup miss for a well-formed identifier
pub fn company_not_found(id: &str) -> DomainError {
    DomainError::not_found(format!("Company with ID {} not found", id)).with_context("entityId", id)
}
