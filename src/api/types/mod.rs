//! Request and response types shared by the HTTP handlers

pub mod envelope;
pub mod error;
pub mod json;
pub mod path;

pub use envelope::{DataResponse, UserRequest, UserResponse};
pub use error::{ApiError, ApiErrorResponse, GENERIC_ERROR_MESSAGE};
pub use json::Json;
pub use path::UserIdPath;
