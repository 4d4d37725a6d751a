//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{User, UserId};
use crate::error::DomainError;

/// Repository for User entities
///
/// Each call is atomic on its own. Sequences of calls made by a caller
/// (for example `next_id` followed by `create`) are not.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every stored user, in no particular order
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID
    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError>;

    /// Insert a user under its own ID, advancing the ID counter past it
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user wholesale
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;

    /// Peek at the next ID to hand out, without reserving it
    async fn next_id(&self) -> Result<UserId, DomainError>;
}
