//! User entity and related types

use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use super::validation::{validate_user_fields, InvalidUserId, UserValidationError};

/// User identifier - a UUID, time-ordered when generated by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse a textual UUID, as received in a request path
    pub fn parse(id: &str) -> Result<Self, InvalidUserId> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| InvalidUserId(id.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated user record
///
/// Fields are private and there are no setters: the only way to obtain a
/// `User` is [`User::new`], so every value in circulation satisfies the
/// length rules. Changes are made by building a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    biography: String,
}

impl User {
    /// Create a new user, checking every field before anything is built
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let biography = biography.into();

        validate_user_fields(&first_name, &last_name, &biography)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            biography,
        })
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }
}
