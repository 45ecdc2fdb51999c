use actix_web::{get, web, HttpResponse, Responder};
use portfolio_site::models::StackResponse;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetStackError,
    shared::api::ApiResponse,
    AppState,
};

/// Get technology stack
///
/// Returns every skill, plus the same skills grouped by category.
#[utoipa::path(
    get,
    path = "/api/stack",
    tag = "portfolio",
    responses(
        (status = 200, description = "Skills", body = inline(SuccessResponse<StackResponse>)),
        (status = 500, description = "Stack could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/stack")]
pub async fn get_stack_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_stack.execute().await {
        Ok(stack) => ApiResponse::success(stack),
        Err(err) => map_get_stack_error(err),
    }
}

fn map_get_stack_error(err: GetStackError) -> HttpResponse {
    match err {
        GetStackError::QueryFailed(message) => {
            tracing::error!(error = %message, "Failed to load stack");
            ApiResponse::internal_error()
        }
    }
}
