mod company_repository;

pub use company_repository::{find_by_id_or_fail, CompanyRepository};

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
