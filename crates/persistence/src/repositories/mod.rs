mod in_memory;
mod postgres;

pub use in_memory::InMemoryCompanyRepository;
pub use postgres::PostgresCompanyRepository;
