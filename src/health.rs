use std::sync::Arc;
use std::time::Instant;

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::application::ports::outgoing::PortfolioRepository;

/// Process facts reported by the liveness probe.
#[derive(Debug, Clone)]
pub struct HealthInfo {
    pub version: &'static str,
    pub environment: String,
    pub started_at: Instant,
}

impl HealthInfo {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "API is running")]
    message: &'static str,
    #[schema(example = "0.1.0")]
    version: &'static str,
    #[schema(example = "development")]
    environment: String,
    #[schema(example = 42)]
    uptime_seconds: u64,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    data: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health(info: web::Data<HealthInfo>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: "API is running",
        version: info.version,
        environment: info.environment.clone(),
        uptime_seconds: info.started_at.elapsed().as_secs(),
    })
}

/// READINESS PROBE
/// - Checks the portfolio data source
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to serve", body = ReadinessResponse),
        (status = 503, description = "Data source unavailable", body = ReadinessResponse)
    )
)]
#[get("/ready")]
pub async fn readiness(
    repository: web::Data<Arc<dyn PortfolioRepository + Send + Sync>>,
) -> impl Responder {
    match repository.check().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            data: "ok",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                data: "unhealthy",
            })
        }
    }
}
