use std::sync::Arc;

use domain_errors::DomainError;
use tracing::info;

use super::CompanyOutput;
use crate::repositories::{find_by_id_or_fail, CompanyRepository};
use crate::value_objects::CompanyId;

pub struct GetCompanyByIdInteractor {
    repository: Arc<dyn CompanyRepository>,
}

impl GetCompanyByIdInteractor {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// Malformed ids fail validation; unknown ids fail with not-found
    pub async fn execute(&self, id: &str) -> Result<CompanyOutput, DomainError> {
        let id = CompanyId::parse(Some(id))?;
        info!("Fetching company: {}", id);

        let company = find_by_id_or_fail(self.repository.as_ref(), &id).await?;
        Ok(CompanyOutput::from(&company))
    }
}
