//! In-memory adapters
//!
//! Repository implementations that live for the lifetime of the process.

pub mod user_repo;

pub use user_repo::InMemoryUserRepository;
