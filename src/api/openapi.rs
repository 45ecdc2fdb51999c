use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::contact::adapter::incoming::web::routes::ContactResponse;
use crate::health::{HealthResponse, ReadinessResponse};
use portfolio_site::models::{
    ContactForm, Experience, ExperiencesResponse, ProjectDetail, ProjectSummary, ProjectsResponse,
    Profile, SkillCategory, SkillItem, StackResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Content and contact endpoints for the personal portfolio site"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Portfolio
        crate::portfolio::adapter::incoming::web::routes::get_about_handler,
        crate::portfolio::adapter::incoming::web::routes::get_projects_handler,
        crate::portfolio::adapter::incoming::web::routes::get_single_project_handler,
        crate::portfolio::adapter::incoming::web::routes::get_stack_handler,
        crate::portfolio::adapter::incoming::web::routes::get_experiences_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::send_contact_message_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            HealthResponse,
            ReadinessResponse,
            Profile,
            ProjectSummary,
            ProjectDetail,
            ProjectsResponse,
            SkillCategory,
            SkillItem,
            StackResponse,
            Experience,
            ExperiencesResponse,
            ContactForm,
            ContactResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "portfolio", description = "Profile, projects, stack and experiences"),
        (name = "contact", description = "Contact form relay")
    )
)]
pub struct ApiDoc;
