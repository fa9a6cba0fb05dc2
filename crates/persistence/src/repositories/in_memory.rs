use async_trait::async_trait;
use domain::{Company, CompanyId, CompanyRepository};
use domain_errors::DomainError;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local store keeping insertion order
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<Vec<Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn clear(&self) {
        self.companies.write().await.clear();
    }

    pub async fn count(&self) -> usize {
        self.companies.read().await.len()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn save(&self, company: &Company) -> Result<(), DomainError> {
        let mut companies = self.companies.write().await;
        match companies.iter_mut().find(|c| c.id() == company.id()) {
            Some(existing) => {
                debug!("Replacing company: {}", company.id());
                *existing = company.clone();
            }
            None => companies.push(company.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError> {
        Ok(self
            .companies
            .read()
            .await
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        Ok(self.companies.read().await.clone())
    }
}
