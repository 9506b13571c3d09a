//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<String, User>,
    /// username -> user id
    username_index: HashMap<String, String>,
    /// email -> user id
    email_index: HashMap<String, String>,
}

impl UserTable {
    fn check_unique(&self, user: &User) -> Result<(), DomainError> {
        if let Some(owner) = self.username_index.get(&user.username) {
            if *owner != user.id {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    user.username
                )));
            }
        }

        if let Some(owner) = self.email_index.get(&user.email) {
            if *owner != user.id {
                return Err(DomainError::conflict(format!(
                    "Email '{}' already exists",
                    user.email
                )));
            }
        }

        Ok(())
    }

    fn index(&mut self, user: &User) {
        self.username_index
            .insert(user.username.clone(), user.id.clone());

        if !user.email.is_empty() {
            self.email_index.insert(user.email.clone(), user.id.clone());
        }
    }

    fn unindex(&mut self, user: &User) {
        self.username_index.remove(&user.username);
        self.email_index.remove(&user.email);
    }

    fn lookup(&self, index: &HashMap<String, String>, key: &str) -> Option<User> {
        index.get(key).and_then(|id| self.users.get(id)).cloned()
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.users.contains_key(&user.id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                user.id
            )));
        }

        table.check_unique(&user)?;
        table.index(&user);
        table.users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let previous = table
            .users
            .get(&user.id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user.id)))?;

        table.check_unique(&user)?;
        table.unindex(&previous);
        table.index(&user);
        table.users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.get(id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.lookup(&table.username_index, username))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.lookup(&table.email_index, email))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;

        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);

        Ok(users)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;

        match table.users.remove(id) {
            Some(user) => {
                table.unindex(&user);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
