use async_trait::async_trait;
use domain_errors::DomainError;

use crate::aggregates::company::Company;
use crate::errors::company_not_found;
use crate::value_objects::CompanyId;

/// Storage port for companies
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert or replace by id
    async fn save(&self, company: &Company) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError>;

    /// All companies in storage order
    async fn find_all(&self) -> Result<Vec<Company>, DomainError>;
}

/// Like [`CompanyRepository::find_by_id`] but a miss is a `NOT_FOUND` error
/// carrying the id as `entityId`
pub async fn find_by_id_or_fail(
    repository: &dyn CompanyRepository,
    id: &CompanyId,
) -> Result<Company, DomainError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| company_not_found(id.value()))
}
