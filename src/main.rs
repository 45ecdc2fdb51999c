pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::portfolio;

use std::sync::Arc;

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, LogFormat};
use crate::contact::application::{
    ports::{
        incoming::use_cases::SendContactMessageUseCase,
        outgoing::{FormRelay, FormspreeRelay},
    },
    services::SendContactMessageService,
};
use crate::health::HealthInfo;
use crate::portfolio::adapter::outgoing::PortfolioRepositoryJson;
use crate::portfolio::application::{
    ports::outgoing::PortfolioRepository,
    services::{
        GetExperiencesService, GetProfileService, GetProjectsService, GetSingleProjectService,
        GetStackService,
    },
    PortfolioUseCases,
};
use crate::shared::api::{
    cors::cors_for_origins, json_config::custom_json_config, request_context::request_context,
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub send_contact_message_use_case: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

impl AppState {
    pub fn new<R, F>(repository: R, relay: F) -> Self
    where
        R: PortfolioRepository + Clone + 'static,
        F: FormRelay + 'static,
    {
        Self {
            portfolio: PortfolioUseCases {
                get_profile: Arc::new(GetProfileService::new(repository.clone())),
                get_projects: Arc::new(GetProjectsService::new(repository.clone())),
                get_single_project: Arc::new(GetSingleProjectService::new(repository.clone())),
                get_stack: Arc::new(GetStackService::new(repository.clone())),
                get_experiences: Arc::new(GetExperiencesService::new(repository)),
            },
            send_contact_message_use_case: Arc::new(SendContactMessageService::new(relay)),
        }
    }
}

/// `.env.{RUST_ENV}` first, then `.env`.
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log_format);

    info!(
        app = %config.app_name,
        environment = %config.environment,
        "Starting application..."
    );

    let repository = PortfolioRepositoryJson::new(config.data_dir.clone());
    if let Err(e) = repository.check().await {
        warn!(error = %e, "Portfolio data directory is not readable; /ready will report unhealthy");
    }

    let http = reqwest::Client::builder()
        .timeout(config.relay_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let relay = FormspreeRelay::new(http, &config.formspree_url, &config.formspree_form_id);
    if relay.endpoint().is_none() {
        warn!("FORMSPREE_FORM_ID is not set; contact messages will not be delivered");
    }

    let state = AppState::new(repository.clone(), relay);
    let repository: Arc<dyn PortfolioRepository + Send + Sync> = Arc::new(repository);
    let health_info = web::Data::new(HealthInfo::new(config.environment.clone()));
    let openapi = ApiDoc::openapi();
    let allowed_origins = config.allowed_origins.clone();

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_for_origins(&allowed_origins))
            .wrap(from_fn(request_context))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&repository)))
            .app_data(health_info.clone())
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server stopped with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_stack_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_experiences_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::send_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
