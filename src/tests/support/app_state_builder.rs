use std::sync::Arc;

use actix_web::web;
use portfolio_site::models::StackResponse;

use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetExperiencesUseCase, GetProfileUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    GetStackUseCase,
};
use crate::portfolio::application::PortfolioUseCases;
use crate::tests::support::stubs::{
    default_get_profile, StubGetExperiencesUseCase, StubGetProjectsUseCase,
    StubGetSingleProjectUseCase, StubGetStackUseCase, StubSendContactMessageUseCase,
};
use crate::AppState;

/// Every use case starts as a harmless stub; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    send_contact_message: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get_profile: Arc::new(default_get_profile()),
                get_projects: Arc::new(StubGetProjectsUseCase::success(vec![])),
                get_single_project: Arc::new(StubGetSingleProjectUseCase::not_found()),
                get_stack: Arc::new(StubGetStackUseCase::success(StackResponse::group(vec![]))),
                get_experiences: Arc::new(StubGetExperiencesUseCase::success(vec![])),
            },
            send_contact_message: Arc::new(StubSendContactMessageUseCase::delivered()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.get_profile = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_single_project = Arc::new(uc);
        self
    }

    pub fn with_get_stack(mut self, uc: impl GetStackUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.get_stack = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_experiences = Arc::new(uc);
        self
    }

    pub fn with_send_contact_message(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_contact_message = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            send_contact_message_use_case: self.send_contact_message,
        })
    }
}
