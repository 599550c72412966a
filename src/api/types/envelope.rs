//! Success envelope and user payloads

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Body of POST and PUT requests
///
/// Missing fields decode as empty strings so they are reported by the
/// required-fields check instead of as a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub biography: String,
}

impl UserRequest {
    pub fn has_missing_fields(&self) -> bool {
        self.first_name.is_empty() || self.last_name.is_empty() || self.biography.is_empty()
    }
}

/// User as rendered on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            biography: user.biography().to_string(),
        }
    }
}
