//! User service
//!
//! Business rules for creating, reading, updating and deleting users.
//! Errors raised by the entity or the repository are returned as-is.

use std::sync::Arc;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// List every user
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.get_all().await
    }

    /// Find a user by ID
    pub async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        self.users.get_by_id(id).await
    }

    /// Create a user with the next free ID
    ///
    /// Reading the next ID and inserting are two separate repository calls.
    /// Two concurrent callers can observe the same ID, in which case the
    /// later insert replaces the earlier one.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        age: i32,
    ) -> Result<User, DomainError> {
        let id = self.users.next_id().await?;
        let user = User::new(id, name, email, age)?;
        let user = self.users.create(user).await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// Apply a partial update to an existing user
    ///
    /// Empty strings and a zero age leave the corresponding field unchanged.
    pub async fn update_user(
        &self,
        id: UserId,
        name: &str,
        email: &str,
        age: i32,
    ) -> Result<User, DomainError> {
        let mut user = self.users.get_by_id(id).await?;

        user.update(name, email, age);
        user.validate()?;

        // Fails with NotFound if the user was deleted since it was read
        let user = self.users.update(user).await?;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    /// Delete a user
    ///
    /// Checks existence first, then deletes. A concurrent delete between the
    /// two steps surfaces as NotFound from the repository.
    pub async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        self.users.get_by_id(id).await?;
        self.users.delete(id).await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
