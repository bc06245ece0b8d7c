//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),

    /// The phone to edit is not stored on the record.
    PhoneNotFound(String),

    /// The same phone appears twice where phones must be distinct.
    DuplicatePhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "invalid phone format: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "invalid birthday format: {}", date),
            Self::PhoneNotFound(phone) => write!(f, "phone not found: {}", phone),
            Self::DuplicatePhone(phone) => write!(f, "duplicate phone: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("12ab".to_string()).to_string(),
            "invalid phone format: 12ab"
        );
        assert_eq!(
            ValidationError::InvalidBirthday("2023-02-30".to_string()).to_string(),
            "invalid birthday format: 2023-02-30"
        );
        assert_eq!(
            ValidationError::PhoneNotFound("1234567890".to_string()).to_string(),
            "phone not found: 1234567890"
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "contact name cannot be empty"
        );
    }
}
