//! User domain entity
//!
//! The validated user record owned by the store.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::DomainError;

/// Unique identifier for a user, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A user of the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a validated user. Both timestamps are set to the same instant.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let user = Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            created_at: now,
            updated_at: now,
        };
        user.validate()?;
        Ok(user)
    }

    /// Partial update: empty strings and a zero age leave the field untouched.
    ///
    /// Consequently age can never be set back to 0 and a name or email can
    /// never be cleared through this method. `updated_at` is bumped on every
    /// call, even when nothing changed.
    pub fn update(&mut self, name: &str, email: &str, age: i32) {
        if !name.is_empty() {
            self.name = name.to_string();
        }
        if !email.is_empty() {
            self.email = email.to_string();
        }
        if age != 0 {
            self.age = age;
        }
        self.touch();
    }

    /// Check the entity invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        if self.email.is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }
        if self.age < 0 {
            return Err(DomainError::Validation(
                "age must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    fn touch(&mut self) {
        // The clock may not have advanced since the last write.
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}
