//! User repository trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Storage collaborator for users.
///
/// Implementations key users by id and keep usernames and emails unique.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by id
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by normalized username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by normalized email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
