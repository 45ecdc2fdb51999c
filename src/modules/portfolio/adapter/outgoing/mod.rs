pub mod portfolio_repository_json;

pub use portfolio_repository_json::PortfolioRepositoryJson;
