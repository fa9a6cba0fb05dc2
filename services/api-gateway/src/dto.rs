use chrono::{DateTime, FixedOffset, Utc};
use domain::{to_iso_string, CompanyOutput, CreateCompanyCommand};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/companies`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl From<CreateCompanyRequest> for CreateCompanyCommand {
    fn from(request: CreateCompanyRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_at: String,
    pub created_at_formatted: String,
}

impl CompanyResponse {
    pub fn from_output(output: CompanyOutput, offset: FixedOffset) -> Self {
        Self {
            created_at: to_iso_string(output.created_at),
            created_at_formatted: format_display_date(output.created_at, offset),
            id: output.id,
            name: output.name,
            address: output.address,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListCompaniesResponse {
    pub companies: Vec<CompanyResponse>,
}

/// `dd/mm/yyyy às HH:MM` in the given offset
pub fn format_display_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset)
        .format("%d/%m/%Y às %H:%M")
        .to_string()
}
