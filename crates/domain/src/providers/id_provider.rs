use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    static ref UUID_V4: Regex = Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
    )
    .unwrap();
}

/// Source of new entity identifiers
pub trait IdProvider: Send + Sync {
    fn generate(&self) -> String;

    fn is_valid(&self, id: &str) -> bool;
}

/// Random version 4 UUIDs in lowercase hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn is_valid(&self, id: &str) -> bool {
        UUID_V4.is_match(id)
    }
}
