//! Single-field validators.
//!
//! Each validator is a pure function over one field's value. Recording the
//! outcome for display is left to [`FormErrors`](crate::validate::FormErrors).

use crate::validate::{Field, FieldError};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Symbols accepted as a password's special character.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Shortest accepted password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("Invalid regex"));
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid regex"));
static CARD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'\-]{1,49}$").expect("Invalid regex"));
static EXPIRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("Invalid regex"));
static CVC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("Invalid regex"));

/// Value must be non-blank.
pub fn validate_required(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(())
}

/// Required, letters and spaces only (first/last name, city, province).
pub fn validate_name(field: Field, value: &str) -> Result<(), FieldError> {
    validate_required(field, value)?;
    if !value.trim().chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(FieldError::LettersOnly(field));
    }
    Ok(())
}

/// Required, exactly four digits.
pub fn validate_postal_code(value: &str) -> Result<(), FieldError> {
    validate_required(Field::PostalCode, value)?;
    if !POSTAL_CODE_RE.is_match(value.trim()) {
        return Err(FieldError::PostalCode);
    }
    Ok(())
}

/// Required, `local@domain.tld` with a top-level domain of two or more
/// characters.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    validate_required(Field::Email, value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// At least six characters with a lowercase letter, an uppercase letter, a
/// digit and one of [`PASSWORD_SYMBOLS`]. Not trimmed.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    let strong = value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if !strong {
        return Err(FieldError::PasswordTooWeak);
    }
    Ok(())
}

/// Confirmation must equal the password exactly.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Required; starts with a letter, 2 to 50 characters of letters, spaces,
/// `.`, `'` or `-`.
pub fn validate_card_name(value: &str) -> Result<(), FieldError> {
    validate_required(Field::CardName, value)?;
    if !CARD_NAME_RE.is_match(value.trim()) {
        return Err(FieldError::InvalidCardName);
    }
    Ok(())
}

/// Sixteen digits once separators are stripped, passing the Luhn check.
pub fn validate_card_number(value: &str) -> Result<(), FieldError> {
    validate_required(Field::CardNumber, value)?;
    let digits = sanitize_numeric_input(value);
    if digits.len() != 16 {
        return Err(FieldError::CardNumberLength);
    }
    if !luhn_checksum(&digits) {
        return Err(FieldError::CardChecksum);
    }
    Ok(())
}

/// Luhn check over a string of ASCII digits.
///
/// Walking from the rightmost digit, every second digit (the first one
/// left of the check digit, then every other) is doubled, with 9
/// subtracted when the result exceeds 9. Valid when the sum is a multiple
/// of 10. Empty input and non-digits fail.
pub fn luhn_checksum(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// `MM/YY`, month 01 to 12, not before the month containing `today`.
pub fn validate_expiration(value: &str, today: NaiveDate) -> Result<(), FieldError> {
    validate_required(Field::Expiration, value)?;
    let caps = EXPIRATION_RE
        .captures(value.trim())
        .ok_or(FieldError::ExpirationFormat)?;
    let month: u32 = caps[1].parse().map_err(|_| FieldError::ExpirationFormat)?;
    let year: i32 = caps[2].parse().map_err(|_| FieldError::ExpirationFormat)?;
    if !(1..=12).contains(&month) {
        return Err(FieldError::ExpirationMonth);
    }

    let year = 2000 + year;
    if (year, month) < (today.year(), today.month()) {
        return Err(FieldError::CardExpired);
    }
    Ok(())
}

/// Three or four digits.
pub fn validate_cvc(value: &str) -> Result<(), FieldError> {
    validate_required(Field::Cvc, value)?;
    if !CVC_RE.is_match(value.trim()) {
        return Err(FieldError::InvalidCvc);
    }
    Ok(())
}

/// Strip everything but ASCII digits, applied to numeric inputs on every
/// keystroke so a minus sign or letter never lands in the field.
pub fn sanitize_numeric_input(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether a single typed character is allowed in a numeric input.
pub fn is_numeric_keystroke(key: char) -> bool {
    key.is_ascii_digit()
}
