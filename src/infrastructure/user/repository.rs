//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository, USER_NOT_FOUND};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Writers hold the write guard across the existence check and the mutation,
/// so a concurrent delete can never slip between them. Data is lost when the
/// process terminates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, id: UserId, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let users = self.users.read().await;

        users
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    async fn update(&self, id: &UserId, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(DomainError::not_found(USER_NOT_FOUND)),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const BIO: &str = "a valid twenty-char bio!!";

    fn new_id() -> UserId {
        UserId::from_uuid(Uuid::now_v7())
    }

    fn create_test_user(id: UserId, first_name: &str) -> User {
        User::new(id, first_name, "Liddell", BIO).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();
        let user = create_test_user(id, "Alice");

        let stored = repo.insert(id, user.clone()).await.unwrap();
        assert_eq!(stored, user);

        let retrieved = repo.find_by_id(&id).await.unwrap();
        assert_eq!(retrieved, user);
    }

    #[tokio::test]
    async fn test_insert_overwrites() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();

        repo.insert(id, create_test_user(id, "Alice")).await.unwrap();
        repo.insert(id, create_test_user(id, "Bob")).await.unwrap();

        let retrieved = repo.find_by_id(&id).await.unwrap();
        assert_eq!(retrieved.first_name(), "Bob");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();

        let err = repo.find_by_id(&id).await.unwrap_err();
        assert_eq!(err, DomainError::not_found(USER_NOT_FOUND));

        let err = repo
            .update(&id, create_test_user(id, "Alice"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = repo.delete(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();

        repo.insert(id, create_test_user(id, "Alice")).await.unwrap();

        let updated = repo
            .update(&id, create_test_user(id, "Alicia"))
            .await
            .unwrap();
        assert_eq!(updated.first_name(), "Alicia");

        let retrieved = repo.find_by_id(&id).await.unwrap();
        assert_eq!(retrieved.first_name(), "Alicia");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();

        repo.insert(id, create_test_user(id, "Alice")).await.unwrap();

        assert!(repo.delete(&id).await.is_ok());
        assert!(repo.delete(&id).await.unwrap_err().is_not_found());
        assert!(repo.find_by_id(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_after_delete_does_not_resurrect() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();

        repo.insert(id, create_test_user(id, "Alice")).await.unwrap();
        repo.delete(&id).await.unwrap();

        assert!(repo
            .update(&id, create_test_user(id, "Alicia"))
            .await
            .is_err());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_and_count() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        for name in ["Alice", "Bob", "Carol"] {
            let id = new_id();
            repo.insert(id, create_test_user(id, name)).await.unwrap();
        }

        let mut names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.first_name().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_independent_instances() {
        let a = InMemoryUserRepository::new();
        let b = InMemoryUserRepository::new();
        let id = new_id();

        a.insert(id, create_test_user(id, "Alice")).await.unwrap();

        assert!(b.find_by_id(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deletes_succeed_once() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();
        repo.insert(id, create_test_user(id, "Alice")).await.unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.delete(&id).await.is_ok() })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert!(repo.find_by_id(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_and_delete_never_resurrect() {
        for _ in 0..20 {
            let repo = InMemoryUserRepository::new();
            let id = new_id();
            repo.insert(id, create_test_user(id, "Alice")).await.unwrap();

            let mut handles = Vec::new();
            for i in 0..16 {
                let repo = repo.clone();
                handles.push(tokio::spawn(async move {
                    if i == 8 {
                        let _ = repo.delete(&id).await;
                    } else {
                        let name = format!("Writer{i}");
                        let _ = repo.update(&id, create_test_user(id, &name)).await;
                    }
                }));
            }

            for handle in handles {
                handle.await.unwrap();
            }

            // The delete always completes, and no update may land after it
            assert!(repo.find_by_id(&id).await.unwrap_err().is_not_found());
            assert_eq!(repo.count().await.unwrap(), 0);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_keep_a_written_value() {
        let repo = InMemoryUserRepository::new();
        let id = new_id();
        repo.insert(id, create_test_user(id, "Initial")).await.unwrap();

        let names: Vec<String> = (0..16).map(|i| format!("Writer{i}")).collect();

        let handles: Vec<_> = names
            .iter()
            .cloned()
            .map(|name| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.update(&id, create_test_user(id, &name)).await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let last = repo.find_by_id(&id).await.unwrap();
        assert!(names.iter().any(|n| n == last.first_name()));
    }
}
