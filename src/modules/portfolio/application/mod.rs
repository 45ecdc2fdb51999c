pub mod portfolio_use_cases;
pub mod ports;
pub mod services;

pub use portfolio_use_cases::PortfolioUseCases;
