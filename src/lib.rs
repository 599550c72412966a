//! In-memory CRUD API for user records
//!
//! Users are validated on construction, kept in a process-local concurrent
//! map and served over HTTP/JSON. Nothing survives a restart.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService, UuidV7Generator};
use tracing::info;

/// Create the application state with an empty record store
pub fn create_app_state() -> AppState {
    create_app_state_with_repository(Arc::new(InMemoryUserRepository::new()))
}

/// Create the application state around an existing record store
pub fn create_app_state_with_repository(repository: Arc<InMemoryUserRepository>) -> AppState {
    info!("Using in-memory storage for users");

    let user_service = UserService::new(repository, Arc::new(UuidV7Generator::new()));

    AppState::new(Arc::new(user_service))
}
