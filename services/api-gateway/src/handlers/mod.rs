pub mod create_company;
pub mod get_company;
pub mod health;
pub mod list_companies;
pub mod metrics;
pub mod root;
