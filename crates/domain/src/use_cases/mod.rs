mod create_company;
mod get_company_by_id;
mod list_companies;

pub use create_company::CreateCompanyInteractor;
pub use get_company_by_id::GetCompanyByIdInteractor;
pub use list_companies::ListCompaniesInteractor;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregates::company::Company;

/// Company as returned by the use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyOutput {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for CompanyOutput {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id().value().to_string(),
            name: company.name().value().to_string(),
            address: company.address().value().to_string(),
            created_at: company.created_at(),
        }
    }
}
