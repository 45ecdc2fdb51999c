//! Display data derived from API records, one presentation per section.

use chrono::NaiveDate;

use crate::format::{description_sentences, duration_months, format_period, skill_percentage};
use crate::i18n::Translations;
use crate::models::{Experience, ProjectSummary, SkillCategory, StackResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub icon: Option<String>,
    pub percentage: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    /// Stable identifier for anchors and styling.
    pub key: &'static str,
    pub label: &'static str,
    pub bars: Vec<SkillBar>,
}

pub fn skill_groups(stack: &StackResponse, translations: &Translations) -> Vec<SkillGroup> {
    stack
        .by_category
        .iter()
        .map(|(category, items)| SkillGroup {
            category: *category,
            key: category.as_str(),
            label: translations.stack.category(*category),
            bars: items
                .iter()
                .map(|item| SkillBar {
                    name: item.name.clone(),
                    icon: item.icon.clone(),
                    percentage: skill_percentage(item.level),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceCard {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub duration_months: u32,
    pub bullets: Vec<String>,
    pub technologies: Vec<String>,
    pub current: bool,
}

impl ExperienceCard {
    /// Builds the card, counting months of ongoing roles up to `today`.
    pub fn new(experience: &Experience, translations: &Translations, today: NaiveDate) -> Self {
        Self {
            role: experience.role.clone(),
            company: experience.company.clone(),
            location: experience.location.clone(),
            period: format_period(
                experience.start_date,
                experience.end_date,
                translations.locale,
            ),
            duration_months: duration_months(experience.start_date, experience.end_date, today),
            bullets: description_sentences(&experience.description),
            technologies: experience.technologies.clone(),
            current: experience.current || experience.end_date.is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Badge text for featured projects.
    pub badge: Option<&'static str>,
}

impl ProjectCard {
    pub fn new(project: &ProjectSummary, translations: &Translations) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.short_description.clone(),
            technologies: project.technologies.clone(),
            badge: project.featured.then_some(translations.projects.featured),
        }
    }
}
