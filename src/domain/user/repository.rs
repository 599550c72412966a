//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Message carried by every not-found error raised for users
pub const USER_NOT_FOUND: &str = "the user with the specified ID does not exist";

/// Repository trait for user storage
///
/// Implementations hold entities by value and hand out clones. The only
/// error an implementation raises is `DomainError::NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a user under `id`, replacing any existing entry
    async fn insert(&self, id: UserId, user: User) -> Result<User, DomainError>;

    /// Snapshot of every stored user, in no particular order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Replace an existing user; the existence check and the write are atomic
    async fn update(&self, id: &UserId, user: User) -> Result<User, DomainError>;

    /// Remove an existing user
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.find_all().await?.len())
    }
}
