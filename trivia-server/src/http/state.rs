//! Application state shared across handlers

use std::sync::Arc;

use super::server::ServerConfig;
use crate::db::TriviaRepository;

/// Shared application state, built once per process (or per test)
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    repo: Arc<dyn TriviaRepository>,
    config: ServerConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn TriviaRepository>, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { repo, config }),
        }
    }

    pub fn repo(&self) -> &dyn TriviaRepository {
        self.inner.repo.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
