use serde::{Deserialize, Serialize};

/// Command to create a new company. Fields stay optional so that a missing
/// value reaches domain validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCompanyCommand {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CreateCompanyCommand {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: Some(address.into()),
        }
    }
}
