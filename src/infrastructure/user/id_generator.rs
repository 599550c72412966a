//! User identifier generation

use std::fmt::Debug;

use uuid::Uuid;

use crate::domain::user::UserId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Trait for producing fresh user identifiers
///
/// A failed generation is reported to clients as an internal error.
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync + Debug {
    /// Generate an identifier that has never been handed out before
    fn generate(&self) -> Result<UserId, DomainError>;
}

/// Time-ordered UUIDv7 generator
#[derive(Debug, Clone, Default)]
pub struct UuidV7Generator;

impl UuidV7Generator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> Result<UserId, DomainError> {
        Ok(UserId::from_uuid(Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_v7() {
        let id = UuidV7Generator::new().generate().unwrap();
        assert_eq!(id.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn test_generated_ids_are_unique_and_ordered() {
        let generator = UuidV7Generator::new();
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        assert_ne!(first, second);
        assert!(first < second);
    }
}
