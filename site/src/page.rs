use crate::api_client::PortfolioClient;
use crate::load_state::Resource;
use crate::models::{ExperiencesResponse, ProjectsResponse, Profile, StackResponse};

/// The data-backed sections of the single page. Each section loads on its
/// own; one failing does not affect the others.
#[derive(Debug)]
pub struct PortfolioPage {
    pub about: Resource<Profile>,
    pub projects: Resource<ProjectsResponse>,
    pub stack: Resource<StackResponse>,
    pub experiences: Resource<ExperiencesResponse>,
}

impl PortfolioPage {
    pub fn load(client: &PortfolioClient) -> Self {
        let about = client.clone();
        let projects = client.clone();
        let stack = client.clone();
        let experiences = client.clone();

        Self {
            about: Resource::spawn(move || async move { about.about().await }),
            projects: Resource::spawn(move || async move { projects.projects().await }),
            stack: Resource::spawn(move || async move { stack.stack().await }),
            experiences: Resource::spawn(move || async move { experiences.experiences().await }),
        }
    }
}
