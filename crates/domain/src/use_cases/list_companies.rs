use std::sync::Arc;

use domain_errors::DomainError;
use tracing::info;

use super::CompanyOutput;
use crate::repositories::CompanyRepository;

pub struct ListCompaniesInteractor {
    repository: Arc<dyn CompanyRepository>,
}

impl ListCompaniesInteractor {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<CompanyOutput>, DomainError> {
        let companies = self.repository.find_all().await?;
        info!("Listing {} companies", companies.len());
        Ok(companies.iter().map(CompanyOutput::from).collect())
    }
}
