//! User service for record management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

use super::id_generator::IdGenerator;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// Request for replacing an existing user's fields
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// User service for managing user records
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Create a new user under a freshly generated ID
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let id = self.id_generator.generate()?;

        info!(id = %id, "Creating user");

        let user = User::new(id, request.first_name, request.last_name, request.biography)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.insert(id, user).await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");
        self.repository.find_all().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &UserId) -> Result<User, DomainError> {
        debug!(id = %id, "Getting user");
        self.repository.find_by_id(id).await
    }

    /// Replace an existing user's fields
    pub async fn update(&self, id: &UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        info!(id = %id, "Updating user");

        let user = User::new(*id, request.first_name, request.last_name, request.biography)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(id, user).await
    }

    /// Delete a user
    pub async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        info!(id = %id, "Deleting user");
        self.repository.delete(id).await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
