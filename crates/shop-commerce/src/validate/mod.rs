//! Form validation module.
//!
//! Stateless per-field validators for the shipping, payment and account
//! forms, plus the [`FormErrors`] context that collects their messages.

mod error;
mod field;
mod form;
mod rules;

pub use error::FieldError;
pub use field::Field;
pub use form::FormErrors;
pub use rules::{
    is_numeric_keystroke, luhn_checksum, sanitize_numeric_input, validate_card_name,
    validate_card_number, validate_confirm_password, validate_cvc, validate_email,
    validate_expiration, validate_name, validate_password, validate_postal_code,
    validate_required, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS,
};
