pub mod get_experiences_use_case;
pub mod get_profile_use_case;
pub mod get_projects_use_case;
pub mod get_single_project_use_case;
pub mod get_stack_use_case;

pub use get_experiences_use_case::{GetExperiencesError, GetExperiencesUseCase};
pub use get_profile_use_case::{GetProfileError, GetProfileUseCase};
pub use get_projects_use_case::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project_use_case::{GetSingleProjectError, GetSingleProjectUseCase};
pub use get_stack_use_case::{GetStackError, GetStackUseCase};
