//! Field-level validation messages.

use crate::validate::Field;
use thiserror::Error;

/// Why a field value was rejected. The `Display` text is the inline message
/// shown under the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{} must contain letters and spaces only", .0.label())]
    LettersOnly(Field),

    #[error("Postal code must be exactly 4 digits")]
    PostalCode,

    #[error("Enter a valid email (e.g., user@example.com)")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Password must include uppercase, lowercase, number, and special character")]
    PasswordTooWeak,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Enter the name as shown on the card")]
    InvalidCardName,

    #[error("Card number must be 16 digits")]
    CardNumberLength,

    #[error("Card number is invalid")]
    CardChecksum,

    #[error("Use the MM/YY format")]
    ExpirationFormat,

    #[error("Month must be between 01 and 12")]
    ExpirationMonth,

    #[error("Card has expired")]
    CardExpired,

    #[error("CVC must be 3 or 4 digits")]
    InvalidCvc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::Required(Field::Email).to_string(),
            "Email is required"
        );
        assert_eq!(
            FieldError::LettersOnly(Field::City).to_string(),
            "City must contain letters and spaces only"
        );
        assert_eq!(
            FieldError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
