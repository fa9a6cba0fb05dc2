//! Companies domain: value objects, the company aggregate, the repository
//! port and the use cases that drive them.

pub mod aggregates;
pub mod commands;
pub mod errors;
pub mod providers;
pub mod repositories;
pub mod use_cases;
pub mod value_objects;

pub use aggregates::company::{Company, CompanySnapshot};
pub use commands::company_commands::CreateCompanyCommand;
pub use providers::{to_iso_string, Clock, FixedClock, IdProvider, SystemClock, UuidProvider};
pub use repositories::{find_by_id_or_fail, CompanyRepository};
pub use use_cases::{
    CompanyOutput, CreateCompanyInteractor, GetCompanyByIdInteractor, ListCompaniesInteractor,
};
pub use value_objects::{CompanyAddress, CompanyId, CompanyName};
