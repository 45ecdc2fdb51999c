use actix_web::{get, web, HttpResponse, Responder};
use portfolio_site::models::ProjectDetail;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetSingleProjectError,
    shared::api::ApiResponse,
    AppState,
};

/// Get project
///
/// Returns the full detail of one project.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "portfolio",
    params(
        ("project_id" = String, Path, description = "Project identifier", example = "portfolio-api")
    ),
    responses(
        (status = 200, description = "Project detail", body = inline(SuccessResponse<ProjectDetail>)),
        (
            status = 404,
            description = "No project with that id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
        (status = 500, description = "Project could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.portfolio.get_single_project.execute(&project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_get_single_project_error(err, &project_id),
    }
}

fn map_get_single_project_error(err: GetSingleProjectError, project_id: &str) -> HttpResponse {
    match err {
        GetSingleProjectError::NotFound => ApiResponse::not_found(
            "PROJECT_NOT_FOUND",
            &format!("Project '{}' not found", project_id),
        ),
        GetSingleProjectError::QueryFailed(message) => {
            tracing::error!(error = %message, project_id, "Failed to load project");
            ApiResponse::internal_error()
        }
    }
}
