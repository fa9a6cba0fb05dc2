pub mod repositories;

pub use repositories::{InMemoryCompanyRepository, PostgresCompanyRepository};

use domain_errors::{codes, DomainError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Stored company {id} is invalid: {reason}")]
    CorruptRecord { id: String, reason: String },
}

impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::new(err.to_string(), codes::PERSISTENCE_ERROR)
    }
}
