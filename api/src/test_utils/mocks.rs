//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured to misbehave, so tests
//! can reach error paths the real store never takes on its own.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

// ============================================================================
// Mock User Repository
// ============================================================================

#[derive(Default)]
pub struct MockUserRepository {
    users: RwLock<HashMap<UserId, User>>,
    fail: bool,
    vanish_after_read: bool,
    fixed_next_id: Option<UserId>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an internal error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Remove a user right after it has been read, simulating a concurrent
    /// delete landing between a read and the following write
    pub fn vanishing_after_read(mut self) -> Self {
        self.vanish_after_read = true;
        self
    }

    /// Always report the same next ID, as if another caller had read it
    /// and not inserted yet
    pub fn with_fixed_next_id(mut self, id: UserId) -> Self {
        self.fixed_next_id = Some(id);
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Internal("mock storage failure".to_string()))
        } else {
            Ok(())
        }
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::NotFound(format!("User {} not found", id))
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.check()?;
        Ok(self.users.read().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        self.check()?;
        let mut users = self.users.write().unwrap();
        let user = users.get(&id).cloned().ok_or_else(|| not_found(id))?;
        if self.vanish_after_read {
            users.remove(&id);
        }
        Ok(user)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check()?;
        self.users.write().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.check()?;
        let mut users = self.users.write().unwrap();
        if !users.contains_key(&user.id) {
            return Err(not_found(user.id));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.check()?;
        self.users
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn next_id(&self) -> Result<UserId, DomainError> {
        self.check()?;
        if let Some(id) = self.fixed_next_id {
            return Ok(id);
        }
        let users = self.users.read().unwrap();
        Ok(UserId(users.keys().map(|id| id.0).max().unwrap_or(0) + 1))
    }
}
