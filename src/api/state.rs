//! Application state for shared services

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::user::SanitizeOptions;
use crate::domain::{AppError, User, UserPatch};
use crate::infrastructure::user::UserService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    /// Options applied to every user leaving the API
    pub sanitize_options: Arc<SanitizeOptions>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>, sanitize_options: SanitizeOptions) -> Self {
        Self {
            user_service,
            sanitize_options: Arc::new(sanitize_options),
        }
    }

    /// Strip the fields the configured privacy settings hide
    pub fn sanitize(&self, mut user: User) -> User {
        user.sanitize(&self.sanitize_options);
        user
    }
}

/// Trait for user service operations
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, user: User, is_admin: bool) -> Result<User, AppError>;
    async fn get(&self, id: &str) -> Result<User, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn patch(&self, id: &str, patch: UserPatch) -> Result<User, AppError>;
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, user: User, is_admin: bool) -> Result<User, AppError> {
        UserService::register(self, user, is_admin).await
    }

    async fn get(&self, id: &str) -> Result<User, AppError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        UserService::list(self).await
    }

    async fn patch(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        UserService::patch(self, id, patch).await
    }
}
