use std::fmt;

use domain_errors::DomainError;

use super::{parse_bounded_text, restore_text};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyAddress(String);

impl CompanyAddress {
    pub const FIELD: &'static str = "address";
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 500;

    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        parse_bounded_text(raw, Self::FIELD, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    pub fn restore(stored: &str) -> Result<Self, DomainError> {
        restore_text(stored, Self::FIELD).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
