use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Company, CompanyId, CompanyRepository, CompanySnapshot};
use domain_errors::DomainError;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use crate::PersistenceError;

/// Row layout of the `companies` table
#[derive(Debug, Clone, FromRow)]
struct CompanyRow {
    id: String,
    name: String,
    address: String,
    created_at: DateTime<Utc>,
}

impl CompanyRow {
    fn into_company(self) -> Result<Company, PersistenceError> {
        let id = self.id.clone();
        Company::restore(CompanySnapshot {
            id: self.id,
            name: self.name,
            address: self.address,
            created_at: self.created_at,
        })
        .map_err(|e| PersistenceError::CorruptRecord {
            id,
            reason: e.to_string(),
        })
    }
}

/// PostgreSQL implementation of CompanyRepository
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `companies` table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Companies schema ready");
        Ok(())
    }

    async fn upsert(&self, company: &Company) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, name, address, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(company.id().value())
        .bind(company.name().value())
        .bind(company.address().value())
        .bind(company.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn select_by_id(&self, id: &CompanyId) -> Result<Option<Company>, PersistenceError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, address, created_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CompanyRow::into_company).transpose()
    }

    async fn select_all(&self) -> Result<Vec<Company>, PersistenceError> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, address, created_at
            FROM companies
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CompanyRow::into_company).collect()
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn save(&self, company: &Company) -> Result<(), DomainError> {
        self.upsert(company).await.map_err(|e| {
            error!("Failed to save company {}: {}", company.id(), e);
            e.into()
        })
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError> {
        self.select_by_id(id).await.map_err(|e| {
            error!("Failed to fetch company {}: {}", id, e);
            e.into()
        })
    }

    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        self.select_all().await.map_err(|e| {
            error!("Failed to list companies: {}", e);
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_errors::codes;

    #[test]
    fn test_corrupt_row_is_reported() {
        let row = CompanyRow {
            id: "not-a-uuid".to_string(),
            name: "Acme".to_string(),
            address: "Rua das Flores".to_string(),
            created_at: Utc::now(),
        };

        let err = row.into_company().unwrap_err();
        assert!(matches!(err, PersistenceError::CorruptRecord { ref id, .. } if id == "not-a-uuid"));

        let domain_err: DomainError = err.into();
        assert_eq!(domain_err.code(), codes::PERSISTENCE_ERROR);
    }

    #[test]
    fn test_valid_row_restores_company() {
        let row = CompanyRow {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Acme".to_string(),
            address: "Rua das Flores".to_string(),
            created_at: Utc::now(),
        };

        let company = row.into_company().unwrap();
        assert_eq!(company.name().value(), "Acme");
    }
}
