//! User service for registration and profile updates

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::error::{AppError, STATUS_NOT_FOUND};
use crate::domain::user::{hash_password, validate_password, User, UserPatch, UserRepository};

/// Run CPU-bound work (bcrypt) on the blocking pool.
///
/// A panic in `work` is resumed on the caller, so hash failures stay fatal.
async fn run_blocking<T, F>(location: &str, work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(AppError::internal(
            location,
            "app.user.blocking_task.app_error",
            e.to_string(),
        )),
    }
}

/// User service orchestrating lifecycle, validation and storage
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// Fields a non-admin caller may not set are dropped before the user is
    /// prepared, validated and stored.
    pub async fn register(&self, mut user: User, is_admin: bool) -> Result<User, AppError> {
        validate_password(&user.password, "")?;

        user.sanitize_input(is_admin);
        let user = run_blocking("UserService.register", move || {
            user.pre_save();
            user
        })
        .await?;
        user.is_valid()?;

        debug!(user_id = %user.id, username = %user.username, "Registering user");

        let user = self.repository.save(user).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Get a user by id
    pub async fn get(&self, id: &str) -> Result<User, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| missing_user_error("UserService.get", id))
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repository.list().await?)
    }

    /// Apply a partial update to a stored user.
    ///
    /// A password in the patch replaces the stored hash.
    pub async fn patch(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let mut user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| missing_user_error("UserService.patch", id))?;

        user.patch(&patch);

        if let Some(password) = patch.password.as_deref().filter(|p| !p.is_empty()) {
            validate_password(password, &user.id)?;
            let password = password.to_string();
            user.password =
                run_blocking("UserService.patch", move || hash_password(&password)).await?;
        }

        user.pre_update();
        user.is_valid()?;

        debug!(user_id = %user.id, "Updating user");

        let user = self.repository.update(user).await?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }
}

fn missing_user_error(location: &str, id: &str) -> AppError {
    AppError::new(
        location,
        "app.user.get.missing.app_error",
        None,
        format!("user_id={}", id),
        STATUS_NOT_FOUND,
    )
}
