//! Registration API
//!
//! An HTTP service for registering user accounts:
//! - Validation and normalization of user records
//! - Password hashing with bcrypt
//! - Privacy-aware sanitization of responses
//! - Structured `AppError` values mapped onto HTTP statuses

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Wire the services described by `config` into the router state
pub fn create_app_state(config: &AppConfig) -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = UserService::new(repository);

    tracing::debug!(
        show_email = config.privacy.show_email,
        show_full_name = config.privacy.show_full_name,
        show_auth_service = config.privacy.show_auth_service,
        "Creating application state"
    );

    AppState::new(Arc::new(user_service), config.privacy.sanitize_options())
}
