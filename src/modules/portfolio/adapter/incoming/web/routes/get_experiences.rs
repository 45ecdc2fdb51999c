use actix_web::{get, web, HttpResponse, Responder};
use portfolio_site::models::ExperiencesResponse;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetExperiencesError,
    shared::api::ApiResponse,
    AppState,
};

/// List experiences
///
/// Current positions first, then by start date, most recent first.
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "portfolio",
    responses(
        (status = 200, description = "Experiences", body = inline(SuccessResponse<ExperiencesResponse>)),
        (status = 500, description = "Experiences could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_experiences.execute().await {
        Ok(experiences) => ApiResponse::success(ExperiencesResponse::from(experiences)),
        Err(err) => map_get_experiences_error(err),
    }
}

fn map_get_experiences_error(err: GetExperiencesError) -> HttpResponse {
    match err {
        GetExperiencesError::QueryFailed(message) => {
            tracing::error!(error = %message, "Failed to load experiences");
            ApiResponse::internal_error()
        }
    }
}
