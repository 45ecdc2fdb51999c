use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use portfolio_site::models::{Experience, ProjectDetail, Profile, SkillItem};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

const ABOUT_FILE: &str = "about.json";
const PROJECTS_FILE: &str = "projects.json";
const STACK_FILE: &str = "stack.json";
const EXPERIENCES_FILE: &str = "experiences.json";

const SKILL_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

/// Reads portfolio content from JSON files in a data directory.
/// Files are read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct PortfolioRepositoryJson {
    data_dir: Arc<PathBuf>,
}

impl PortfolioRepositoryJson {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Arc::new(data_dir.into()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, PortfolioRepositoryError> {
        let path = self.data_dir.join(file);
        debug!(path = %path.display(), "Reading portfolio data");

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read portfolio data");
            PortfolioRepositoryError::ReadFailed {
                source_name: file.to_string(),
                message: e.to_string(),
            }
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            error!(path = %path.display(), error = %e, "Malformed portfolio data");
            PortfolioRepositoryError::InvalidData {
                source_name: file.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryJson {
    async fn get_profile(&self) -> Result<Profile, PortfolioRepositoryError> {
        self.read(ABOUT_FILE).await
    }

    async fn get_projects(&self) -> Result<Vec<ProjectDetail>, PortfolioRepositoryError> {
        self.read(PROJECTS_FILE).await
    }

    async fn get_project_by_id(
        &self,
        id: &str,
    ) -> Result<Option<ProjectDetail>, PortfolioRepositoryError> {
        let projects = self.get_projects().await?;
        Ok(projects.into_iter().find(|p| p.id == id))
    }

    async fn get_stack(&self) -> Result<Vec<SkillItem>, PortfolioRepositoryError> {
        let stack: Vec<SkillItem> = self.read(STACK_FILE).await?;

        if let Some(item) = stack.iter().find(|i| !SKILL_LEVELS.contains(&i.level)) {
            return Err(PortfolioRepositoryError::InvalidData {
                source_name: STACK_FILE.to_string(),
                message: format!("level {} of '{}' is outside 1..=5", item.level, item.name),
            });
        }

        Ok(stack)
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError> {
        self.read(EXPERIENCES_FILE).await
    }

    async fn check(&self) -> Result<(), PortfolioRepositoryError> {
        let metadata = tokio::fs::metadata(self.data_dir.as_path())
            .await
            .map_err(|e| PortfolioRepositoryError::ReadFailed {
                source_name: self.data_dir.display().to_string(),
                message: e.to_string(),
            })?;

        if !metadata.is_dir() {
            return Err(PortfolioRepositoryError::ReadFailed {
                source_name: self.data_dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        Ok(())
    }
}
