use async_trait::async_trait;
use chrono::NaiveDate;
use portfolio_site::models::{Experience, ProjectDetail, Profile, SkillCategory, SkillItem};

use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub fn sample_profile() -> Profile {
    Profile {
        name: "Argenis Lopez".to_string(),
        title: "Backend Developer".to_string(),
        location: "São Paulo, Brazil".to_string(),
        email: "argenis@example.com".to_string(),
        phone: "+55 11 99999-9999".to_string(),
        github: "https://github.com/argenis".to_string(),
        linkedin: "https://linkedin.com/in/argenis".to_string(),
        description: "Backend developer focused on APIs.".to_string(),
        availability: "Open to offers".to_string(),
    }
}

pub fn sample_project(id: &str, name: &str, featured: bool) -> ProjectDetail {
    ProjectDetail {
        id: id.to_string(),
        name: name.to_string(),
        short_description: format!("{} in short", name),
        full_description: format!("{} in full detail.", name),
        technologies: vec!["Rust".to_string()],
        features: vec!["Fast".to_string()],
        learnings: vec![],
        repository: Some(format!("https://github.com/argenis/{}", id)),
        demo: None,
        featured,
    }
}

pub fn sample_skill(name: &str, category: SkillCategory, level: u8) -> SkillItem {
    SkillItem {
        name: name.to_string(),
        category,
        level,
        icon: None,
    }
}

/// `start` and `end` are (year, month); days are always the 1st.
pub fn sample_experience(id: &str, start: (i32, u32), end: Option<(i32, u32)>) -> Experience {
    let date = |(y, m): (i32, u32)| NaiveDate::from_ymd_opt(y, m, 1).unwrap();

    Experience {
        id: id.to_string(),
        role: "Backend Developer".to_string(),
        company: "Tech".to_string(),
        location: "Remote".to_string(),
        start_date: date(start),
        end_date: end.map(date),
        description: "Built APIs. Reviewed code.".to_string(),
        technologies: vec!["Rust".to_string()],
        current: end.is_none(),
    }
}

// ============================================================
// In-memory repository
// ============================================================

#[derive(Debug, Clone)]
pub struct InMemoryPortfolioRepository {
    pub profile: Profile,
    pub projects: Vec<ProjectDetail>,
    pub stack: Vec<SkillItem>,
    pub experiences: Vec<Experience>,
    pub error: Option<PortfolioRepositoryError>,
}

impl Default for InMemoryPortfolioRepository {
    fn default() -> Self {
        Self {
            profile: sample_profile(),
            projects: vec![sample_project("portfolio-api", "Portfolio API", true)],
            stack: vec![sample_skill("Rust", SkillCategory::Backend, 4)],
            experiences: vec![sample_experience("exp-1", (2022, 1), None)],
            error: None,
        }
    }
}

impl InMemoryPortfolioRepository {
    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(PortfolioRepositoryError::ReadFailed {
                source_name: "memory".to_string(),
                message: message.to_string(),
            }),
            ..Default::default()
        }
    }

    fn check_error(&self) -> Result<(), PortfolioRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn get_profile(&self) -> Result<Profile, PortfolioRepositoryError> {
        self.check_error()?;
        Ok(self.profile.clone())
    }

    async fn get_projects(&self) -> Result<Vec<ProjectDetail>, PortfolioRepositoryError> {
        self.check_error()?;
        Ok(self.projects.clone())
    }

    async fn get_project_by_id(
        &self,
        id: &str,
    ) -> Result<Option<ProjectDetail>, PortfolioRepositoryError> {
        self.check_error()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_stack(&self) -> Result<Vec<SkillItem>, PortfolioRepositoryError> {
        self.check_error()?;
        Ok(self.stack.clone())
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError> {
        self.check_error()?;
        Ok(self.experiences.clone())
    }

    async fn check(&self) -> Result<(), PortfolioRepositoryError> {
        self.check_error()
    }
}
