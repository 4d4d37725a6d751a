//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{User, UserId};

/// Create a valid test user with a specific ID
pub fn test_user_with_id(id: i64) -> User {
    test_user_named(id, &format!("user-{}", id))
}

/// Create a valid test user with a specific ID and name
pub fn test_user_named(id: i64, name: &str) -> User {
    User::new(
        UserId(id),
        name,
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        30,
    )
    .expect("fixture user must be valid")
}
