//! Per-form validation state.

use crate::validate::{Field, FieldError};
use std::collections::BTreeMap;

/// Inline messages for one form, keyed by field.
///
/// Validators stay pure; the form aggregates feed their results through
/// [`FormErrors::check`], which sets or clears the field's message the way
/// the page shows and hides the text under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` for `field`: store the error or clear any previous
    /// one. Returns whether the field passed.
    pub fn check(&mut self, field: Field, result: Result<(), FieldError>) -> bool {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(error) => {
                self.errors.insert(field, error);
                false
            }
        }
    }

    /// Set the error for a field.
    pub fn record(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Clear the error for a field.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Error for a field, if any.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Message shown under the field; empty when it passed.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    /// Check if every field passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields and their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_email;

    #[test]
    fn test_check_sets_and_clears() {
        let mut errors = FormErrors::new();

        assert!(!errors.check(Field::Email, validate_email("nope")));
        assert_eq!(
            errors.message(Field::Email),
            "Enter a valid email (e.g., user@example.com)"
        );

        assert!(errors.check(Field::Email, validate_email("ann@shop.ph")));
        assert_eq!(errors.message(Field::Email), "");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_iter_in_form_order() {
        let mut errors = FormErrors::new();
        errors.record(Field::Cvc, FieldError::InvalidCvc);
        errors.record(Field::FirstName, FieldError::Required(Field::FirstName));

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::Cvc]);
        assert_eq!(errors.len(), 2);

        errors.clear(Field::Cvc);
        assert_eq!(errors.get(Field::Cvc), None);
    }
}
