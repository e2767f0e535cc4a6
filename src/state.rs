//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AliasPolicy, AssignmentService, RemovalService, ResolutionService,
};
use crate::infrastructure::persistence::SqliteAliasRepository;
use crate::utils::alias_generator::RandomAliasGenerator;

/// Basic auth credentials accepted on mutating routes.
#[derive(Debug, Clone)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns true if the pair matches the configured credentials.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

/// Application state shared across handlers.
///
/// Every field is an `Arc`; cloning the state per request is cheap and all
/// handlers see the same store handle.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<SqliteAliasRepository>,
    pub assignment_service: Arc<AssignmentService<SqliteAliasRepository, RandomAliasGenerator>>,
    pub resolution_service: Arc<ResolutionService<SqliteAliasRepository>>,
    pub removal_service: Arc<RemovalService<SqliteAliasRepository>>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Wires the services around a single repository.
    pub fn new(
        repository: Arc<SqliteAliasRepository>,
        policy: AliasPolicy,
        credentials: Credentials,
    ) -> Self {
        let assignment_service = Arc::new(AssignmentService::new(
            repository.clone(),
            Arc::new(RandomAliasGenerator),
            policy,
        ));
        let resolution_service = Arc::new(ResolutionService::new(repository.clone()));
        let removal_service = Arc::new(RemovalService::new(repository.clone()));

        Self {
            repository,
            assignment_service,
            resolution_service,
            removal_service,
            credentials: Arc::new(credentials),
        }
    }
}
