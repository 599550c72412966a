//! User validation utilities

use std::fmt;

use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 20;
pub const MIN_BIOGRAPHY_LENGTH: usize = 20;
pub const MAX_BIOGRAPHY_LENGTH: usize = 450;

/// A single violated field rule
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("first name length should be between {min} and {max} characters")]
    FirstNameLength { min: usize, max: usize },

    #[error("last name length should be between {min} and {max} characters")]
    LastNameLength { min: usize, max: usize },

    #[error("biography length should be between {min} and {max} characters")]
    BiographyLength { min: usize, max: usize },
}

impl FieldViolation {
    /// Name of the offending field as it appears on the wire
    pub fn field(&self) -> &'static str {
        match self {
            Self::FirstNameLength { .. } => "first_name",
            Self::LastNameLength { .. } => "last_name",
            Self::BiographyLength { .. } => "biography",
        }
    }
}

/// Every rule a candidate user broke, reported together
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct UserValidationError {
    violations: Vec<FieldViolation>,
}

impl UserValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Wire names of the offending fields, in check order
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(FieldViolation::field).collect()
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// User ID parse failure, raised for malformed path parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid UUID for parameter 'id': {0}")]
pub struct InvalidUserId(pub String);

/// Length in characters, bounds inclusive
fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Validate the text fields of a user
///
/// Rules (bounds inclusive, lengths in characters):
/// - First and last name: 2 to 20
/// - Biography: 20 to 450
///
/// All fields are checked; the error carries every violation.
pub fn validate_user_fields(
    first_name: &str,
    last_name: &str,
    biography: &str,
) -> Result<(), UserValidationError> {
    let mut violations = Vec::new();

    if !within(first_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        violations.push(FieldViolation::FirstNameLength {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    if !within(last_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        violations.push(FieldViolation::LastNameLength {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    if !within(biography, MIN_BIOGRAPHY_LENGTH, MAX_BIOGRAPHY_LENGTH) {
        violations.push(FieldViolation::BiographyLength {
            min: MIN_BIOGRAPHY_LENGTH,
            max: MAX_BIOGRAPHY_LENGTH,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(UserValidationError { violations })
    }
}
