use std::sync::Arc;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetExperiencesUseCase, GetProfileUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    GetStackUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_stack: Arc<dyn GetStackUseCase + Send + Sync>,
    pub get_experiences: Arc<dyn GetExperiencesUseCase + Send + Sync>,
}
