//! In-memory adapter for UserRepository

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Users plus the ID counter, guarded together
#[derive(Debug)]
struct UserTable {
    users: HashMap<UserId, User>,
    next_id: i64,
}

/// Process-local implementation of UserRepository
///
/// A single reader/writer lock covers the map and the counter. Reads take
/// the shared side, every mutation takes the exclusive side. The lock is
/// never held across an await point.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>, DomainError> {
        self.table
            .read()
            .map_err(|_| DomainError::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>, DomainError> {
        self.table
            .write()
            .map_err(|_| DomainError::Internal("user store lock poisoned".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::NotFound(format!("User {} not found", id))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.read()?;
        Ok(table.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        let table = self.read()?;
        table.users.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.write()?;
        if user.id.0 >= table.next_id {
            table.next_id = user
                .id
                .0
                .checked_add(1)
                .ok_or_else(|| DomainError::Validation("user id out of range".to_string()))?;
        }
        table.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.write()?;
        match table.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(not_found(user.id)),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut table = self.write()?;
        table.users.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn next_id(&self) -> Result<UserId, DomainError> {
        let table = self.read()?;
        Ok(UserId(table.next_id))
    }
}
