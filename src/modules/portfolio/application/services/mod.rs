pub mod get_experiences_service;
pub mod get_profile_service;
pub mod get_projects_service;
pub mod get_single_project_service;
pub mod get_stack_service;

pub use get_experiences_service::GetExperiencesService;
pub use get_profile_service::GetProfileService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use get_stack_service::GetStackService;
