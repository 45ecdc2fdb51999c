//! Wire shapes shared by the API server and the site.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Profile {
    #[cfg_attr(feature = "openapi", schema(example = "Argenis Lopez"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Backend Developer | Rust | actix-web"))]
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub description: String,
    pub availability: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Backend,
    Database,
    Frontend,
    Devops,
    Tools,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Devops => "devops",
            SkillCategory::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SkillItem {
    pub name: String,
    pub category: SkillCategory,
    /// Proficiency from 1 (basic) to 5 (advanced).
    pub level: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub learnings: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectDetail {
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            short_description: self.short_description.clone(),
            technologies: self.technologies.clone(),
            featured: self.featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2023-01-01"))]
    pub start_date: NaiveDate,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "2024-06-01"))]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectSummary>,
    pub total: usize,
}

impl From<Vec<ProjectSummary>> for ProjectsResponse {
    fn from(projects: Vec<ProjectSummary>) -> Self {
        let total = projects.len();
        Self { projects, total }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StackResponse {
    pub stack: Vec<SkillItem>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub by_category: BTreeMap<SkillCategory, Vec<SkillItem>>,
}

impl StackResponse {
    /// Groups items by category; order inside each group follows the input.
    pub fn group(stack: Vec<SkillItem>) -> Self {
        let mut by_category: BTreeMap<SkillCategory, Vec<SkillItem>> = BTreeMap::new();
        for item in &stack {
            by_category
                .entry(item.category)
                .or_default()
                .push(item.clone());
        }
        Self { stack, by_category }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExperiencesResponse {
    pub experiences: Vec<Experience>,
    pub total: usize,
}

impl From<Vec<Experience>> for ExperiencesResponse {
    fn from(experiences: Vec<Experience>) -> Self {
        let total = experiences.len();
        Self { experiences, total }
    }
}

/// Contact form payload, as posted to the form relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactForm {
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "maria@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "Job opportunity"))]
    pub subject: String,
    #[cfg_attr(feature = "openapi", schema(example = "Hi, I saw your portfolio and would like to talk..."))]
    pub message: String,
}
