//! Shipping details form.

use crate::validate::{
    sanitize_numeric_input, validate_name, validate_postal_code, validate_required, Field,
    FormErrors,
};
use serde::{Deserialize, Serialize};

/// Shipping details entered on the cart page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    /// Four-digit postal code.
    pub postal_code: String,
}

impl ShippingForm {
    /// Create a form from its fields. The postal code is sanitized to
    /// digits the way the input sanitizes each keystroke.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street_address: impl Into<String>,
        city: impl Into<String>,
        province: impl Into<String>,
        postal_code: &str,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street_address: street_address.into(),
            city: city.into(),
            province: province.into(),
            postal_code: sanitize_numeric_input(postal_code),
        }
    }

    /// Validate every field into `errors`. Returns whether all passed.
    pub fn validate(&self, errors: &mut FormErrors) -> bool {
        let results = [
            errors.check(Field::FirstName, validate_name(Field::FirstName, &self.first_name)),
            errors.check(Field::LastName, validate_name(Field::LastName, &self.last_name)),
            errors.check(
                Field::StreetAddress,
                validate_required(Field::StreetAddress, &self.street_address),
            ),
            errors.check(Field::City, validate_name(Field::City, &self.city)),
            errors.check(Field::Province, validate_name(Field::Province, &self.province)),
            errors.check(Field::PostalCode, validate_postal_code(&self.postal_code)),
        ];
        results.iter().all(|ok| *ok)
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        [
            self.street_address.trim(),
            self.city.trim(),
            self.province.trim(),
            self.postal_code.trim(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}
