use std::fmt;

use domain_errors::DomainError;
use lazy_static::lazy_static;
use regex::Regex;
use safe_string::{trim_whitespace, RequiredValidator, SafeString};

use crate::errors::invalid_company_id;
use crate::providers::IdProvider;

lazy_static! {
    static ref UUID_SHAPE: Regex =
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
}

/// Company identifier in 8-4-4-4-12 hex form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyId(String);

impl CompanyId {
    pub const FIELD: &'static str = "id";

    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let raw = RequiredValidator::require(raw).map_err(|e| e.with_field(Self::FIELD))?;
        let trimmed = trim_whitespace(raw);
        if trimmed.is_empty() {
            return Err(DomainError::empty_string().with_field(Self::FIELD));
        }
        if !UUID_SHAPE.is_match(trimmed) {
            return Err(invalid_company_id());
        }

        SafeString::create(trimmed)
            .map(|safe| Self(safe.into_inner()))
            .map_err(|e| e.with_field(Self::FIELD))
    }

    /// Draw a fresh identifier from `ids`, which must also accept it
    pub fn generate(ids: &dyn IdProvider) -> Result<Self, DomainError> {
        let id = ids.generate();
        if !ids.is_valid(&id) {
            return Err(invalid_company_id());
        }
        Self::parse(Some(&id))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
