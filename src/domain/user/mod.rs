//! User domain
//!
//! This module provides the validated user entity, its field rules and the
//! repository trait the record store implements.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::{UserRepository, USER_NOT_FOUND};
pub use validation::{
    validate_user_fields, FieldViolation, InvalidUserId, UserValidationError,
    MAX_BIOGRAPHY_LENGTH, MAX_NAME_LENGTH, MIN_BIOGRAPHY_LENGTH, MIN_NAME_LENGTH,
};
