use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use common::config::{AppConfig, RepositoryKind};
use domain::{
    Clock, CompanyRepository, CreateCompanyInteractor, GetCompanyByIdInteractor, IdProvider,
    ListCompaniesInteractor, SystemClock, UuidProvider,
};
use domain_errors::{DomainError, ErrorHandlerChain};
use persistence::{InMemoryCompanyRepository, PostgresCompanyRepository};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::error::{ApiError, RequestContext};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub create_company: Arc<CreateCompanyInteractor>,
    pub get_company: Arc<GetCompanyByIdInteractor>,
    pub list_companies: Arc<ListCompaniesInteractor>,
    pub error_handlers: Arc<ErrorHandlerChain>,
    /// Offset used for `createdAtFormatted`
    pub display_offset: FixedOffset,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn CompanyRepository>,
        ids: Arc<dyn IdProvider>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            create_company: Arc::new(CreateCompanyInteractor::new(
                repository.clone(),
                ids,
                clock,
            )),
            get_company: Arc::new(GetCompanyByIdInteractor::new(repository.clone())),
            list_companies: Arc::new(ListCompaniesInteractor::new(repository)),
            error_handlers: Arc::new(ErrorHandlerChain::new()),
            display_offset,
        }
    }

    /// Wire the repository selected by `config`
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let repository: Arc<dyn CompanyRepository> = match config.repository {
            RepositoryKind::InMemory => {
                info!("Using in-memory company repository");
                Arc::new(InMemoryCompanyRepository::new())
            }
            RepositoryKind::Postgres => {
                info!(
                    "Connecting to database (max connections: {})",
                    config.database.max_connections
                );
                let pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(&config.database.url())
                    .await?;

                let repository = PostgresCompanyRepository::new(pool);
                repository.ensure_schema().await?;
                Arc::new(repository)
            }
        };

        let offset_secs = config.display_utc_offset_hours * 3600;
        let display_offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| {
            anyhow!(
                "Invalid display offset: {} hours",
                config.display_utc_offset_hours
            )
        })?;

        Ok(Self::new(
            repository,
            Arc::new(UuidProvider),
            Arc::new(SystemClock),
            display_offset,
        ))
    }

    /// Map a domain error to its HTTP response through the shared chain
    pub fn reject(&self, error: DomainError, request: RequestContext) -> ApiError {
        ApiError::new(&error, &self.error_handlers, request)
    }
}
