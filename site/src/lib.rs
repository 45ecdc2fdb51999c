//! Presentational logic of the portfolio site: data loading with status,
//! locales, display formatting, the contact form and saved preferences.

pub mod api_client;
pub mod config;
pub mod contact_form;
pub mod error;
pub mod format;
pub mod i18n;
pub mod load_state;
pub mod models;
pub mod page;
pub mod preferences;
pub mod relay;
pub mod sections;
pub mod validation;

pub use api_client::PortfolioClient;
pub use config::SiteConfig;
pub use contact_form::{
    ContactFormSession, StatusKind, StatusMessage, SubmitBlocked, SubmitOutcome,
};
pub use error::{ConfigError, FetchError, PreferencesError};
pub use i18n::{Locale, Translations};
pub use load_state::{LoadState, Resource, SectionView};
pub use page::PortfolioPage;
pub use preferences::{Preferences, Theme};
pub use relay::{FormRelay, FormspreeRelay};
