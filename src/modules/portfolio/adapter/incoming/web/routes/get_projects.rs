use actix_web::{get, web, HttpResponse, Responder};
use portfolio_site::models::ProjectsResponse;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetProjectsError,
    shared::api::ApiResponse,
    AppState,
};

/// List projects
///
/// Featured projects come first, then the rest by name.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Project summaries",
            body = inline(SuccessResponse<ProjectsResponse>),
            example = json!({
                "success": true,
                "data": {
                    "projects": [{
                        "id": "portfolio-api",
                        "name": "Portfolio API",
                        "short_description": "REST API serving this portfolio",
                        "technologies": ["Rust", "actix-web"],
                        "featured": true
                    }],
                    "total": 1
                }
            })
        ),
        (status = 500, description = "Projects could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_projects.execute().await {
        Ok(projects) => ApiResponse::success(ProjectsResponse::from(projects)),
        Err(err) => map_get_projects_error(err),
    }
}

fn map_get_projects_error(err: GetProjectsError) -> HttpResponse {
    match err {
        GetProjectsError::QueryFailed(message) => {
            tracing::error!(error = %message, "Failed to load projects");
            ApiResponse::internal_error()
        }
    }
}
