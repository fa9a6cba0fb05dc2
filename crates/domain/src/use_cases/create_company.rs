use std::sync::Arc;

use domain_errors::DomainError;
use tracing::{info, warn};

use super::CompanyOutput;
use crate::aggregates::company::Company;
use crate::commands::company_commands::CreateCompanyCommand;
use crate::providers::{Clock, IdProvider};
use crate::repositories::CompanyRepository;

pub struct CreateCompanyInteractor {
    repository: Arc<dyn CompanyRepository>,
    ids: Arc<dyn IdProvider>,
    clock: Arc<dyn Clock>,
}

impl CreateCompanyInteractor {
    pub fn new(
        repository: Arc<dyn CompanyRepository>,
        ids: Arc<dyn IdProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            ids,
            clock,
        }
    }

    /// Validate the command, persist the new company and return it
    pub async fn execute(&self, command: CreateCompanyCommand) -> Result<CompanyOutput, DomainError> {
        let company = Company::create(
            command.name.as_deref(),
            command.address.as_deref(),
            self.ids.as_ref(),
            self.clock.as_ref(),
        )
        .map_err(|e| {
            warn!("Rejected company input: {}", e);
            e
        })?;

        self.repository.save(&company).await?;

        info!("Created company: {}", company.id());
        Ok(CompanyOutput::from(&company))
    }
}
