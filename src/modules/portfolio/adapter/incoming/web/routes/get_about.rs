use actix_web::{get, web, HttpResponse, Responder};
use portfolio_site::models::Profile;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetProfileError,
    shared::api::ApiResponse,
    AppState,
};

/// Get profile
///
/// Returns the portfolio owner's profile and contact links.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "portfolio",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<Profile>)),
        (status = 500, description = "Profile could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_profile.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_get_profile_error(err),
    }
}

fn map_get_profile_error(err: GetProfileError) -> HttpResponse {
    match err {
        GetProfileError::QueryFailed(message) => {
            tracing::error!(error = %message, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
