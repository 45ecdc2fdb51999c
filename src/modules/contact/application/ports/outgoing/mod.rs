//! Delivery goes through the site's relay port so both sides share one
//! contract and one Formspree adapter.

pub use portfolio_site::relay::{FormRelay, FormspreeRelay};
