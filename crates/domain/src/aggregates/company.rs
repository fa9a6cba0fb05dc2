use chrono::{DateTime, Utc};
use domain_errors::{DomainError, FieldError};
use serde::{Deserialize, Serialize};

use crate::providers::{to_iso_string, Clock, IdProvider};
use crate::value_objects::{CompanyAddress, CompanyId, CompanyName};

/// Plain persisted form of a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Company aggregate. Fields are only reachable through validated value
/// objects; updates produce a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    id: CompanyId,
    name: CompanyName,
    address: CompanyAddress,
    created_at: DateTime<Utc>,
}

impl Company {
    /// Build a new company from raw input.
    ///
    /// Name and address are validated independently; when either fails the
    /// error is a `VALIDATION_ERRORS` aggregate listing every failed field
    /// in `name`, `address` order.
    pub fn create(
        name: Option<&str>,
        address: Option<&str>,
        ids: &dyn IdProvider,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        match (CompanyName::parse(name), CompanyAddress::parse(address)) {
            (Ok(name), Ok(address)) => Ok(Self {
                id: CompanyId::generate(ids)?,
                name,
                address,
                created_at: clock.now(),
            }),
            (name, address) => Err(aggregate(vec![
                failure(CompanyName::FIELD, name),
                failure(CompanyAddress::FIELD, address),
            ])),
        }
    }

    /// Rebuild a company read back from storage
    pub fn restore(snapshot: CompanySnapshot) -> Result<Self, DomainError> {
        let id = CompanyId::parse(Some(&snapshot.id));
        let name = CompanyName::restore(&snapshot.name);
        let address = CompanyAddress::restore(&snapshot.address);

        match (id, name, address) {
            (Ok(id), Ok(name), Ok(address)) => Ok(Self {
                id,
                name,
                address,
                created_at: snapshot.created_at,
            }),
            (id, name, address) => Err(aggregate(vec![
                failure(CompanyId::FIELD, id),
                failure(CompanyName::FIELD, name),
                failure(CompanyAddress::FIELD, address),
            ])),
        }
    }

    pub fn with_name(&self, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: CompanyName::parse(Some(name))?,
            ..self.clone()
        })
    }

    pub fn with_address(&self, address: &str) -> Result<Self, DomainError> {
        Ok(Self {
            address: CompanyAddress::parse(Some(address))?,
            ..self.clone()
        })
    }

    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    pub fn address(&self) -> &CompanyAddress {
        &self.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_iso(&self) -> String {
        to_iso_string(self.created_at)
    }

    pub fn to_snapshot(&self) -> CompanySnapshot {
        CompanySnapshot {
            id: self.id.value().to_string(),
            name: self.name.value().to_string(),
            address: self.address.value().to_string(),
            created_at: self.created_at,
        }
    }
}

fn failure<T>(field: &str, result: Result<T, DomainError>) -> Option<FieldError> {
    result.err().map(|error| FieldError::new(field, error))
}

fn aggregate(failures: Vec<Option<FieldError>>) -> DomainError {
    DomainError::from_field_errors(failures.into_iter().flatten())
        .unwrap_or_else(|| DomainError::validation("Validation failed"))
}
