use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use portfolio_site::models::{Experience, ProjectDetail, ProjectSummary, Profile, StackResponse};

use crate::contact::application::ports::incoming::use_cases::{
    SendContactMessageCommand, SendContactMessageError, SendContactMessageUseCase,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase, GetProfileError, GetProfileUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    GetStackError, GetStackUseCase,
};
use crate::tests::support::portfolio_fixtures::sample_profile;

// ============================================================
// Portfolio
// ============================================================

#[derive(Clone)]
pub struct StubGetProfileUseCase {
    result: Result<Profile, GetProfileError>,
}

impl StubGetProfileUseCase {
    pub fn success(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetProfileError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<ProjectSummary>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn success(projects: Vec<ProjectSummary>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetProjectsError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectSummary>, GetProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<ProjectDetail, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn found(project: ProjectDetail) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetSingleProjectError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: &str) -> Result<ProjectDetail, GetSingleProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetStackUseCase {
    result: Result<StackResponse, GetStackError>,
}

impl StubGetStackUseCase {
    pub fn success(stack: StackResponse) -> Self {
        Self { result: Ok(stack) }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetStackError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetStackUseCase for StubGetStackUseCase {
    async fn execute(&self) -> Result<StackResponse, GetStackError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetExperiencesUseCase {
    result: Result<Vec<Experience>, GetExperiencesError>,
}

impl StubGetExperiencesUseCase {
    pub fn success(experiences: Vec<Experience>) -> Self {
        Self {
            result: Ok(experiences),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            result: Err(GetExperiencesError::QueryFailed(message.to_string())),
        }
    }
}

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        self.result.clone()
    }
}

// ============================================================
// Contact
// ============================================================

/// Counts calls so tests can assert that invalid forms never reach delivery.
#[derive(Clone)]
pub struct StubSendContactMessageUseCase {
    delivered: bool,
    calls: Arc<AtomicUsize>,
}

impl StubSendContactMessageUseCase {
    pub fn delivered() -> Self {
        Self {
            delivered: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            delivered: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(
        &self,
        _command: SendContactMessageCommand,
    ) -> Result<(), SendContactMessageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delivered {
            Ok(())
        } else {
            Err(SendContactMessageError::DeliveryFailed)
        }
    }
}

/// Default profile stub for builders that do not care about `/api/about`.
pub fn default_get_profile() -> StubGetProfileUseCase {
    StubGetProfileUseCase::success(sample_profile())
}
