//! Payment card form.

use crate::validate::{
    sanitize_numeric_input, validate_card_name, validate_card_number, validate_cvc,
    validate_expiration, Field, FormErrors,
};
use chrono::NaiveDate;
use std::fmt;

/// Card details entered in the payment dialog. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub card_name: String,
    pub card_number: String,
    /// `MM/YY`.
    pub expiration: String,
    pub cvc: String,
}

impl PaymentForm {
    pub fn new(
        card_name: impl Into<String>,
        card_number: impl Into<String>,
        expiration: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            card_name: card_name.into(),
            card_number: card_number.into(),
            expiration: expiration.into(),
            cvc: cvc.into(),
        }
    }

    /// Validate every field into `errors`, checking expiration against
    /// `today`. Returns whether all passed.
    pub fn validate(&self, errors: &mut FormErrors, today: NaiveDate) -> bool {
        let results = [
            errors.check(Field::CardName, validate_card_name(&self.card_name)),
            errors.check(Field::CardNumber, validate_card_number(&self.card_number)),
            errors.check(Field::Expiration, validate_expiration(&self.expiration, today)),
            errors.check(Field::Cvc, validate_cvc(&self.cvc)),
        ];
        results.iter().all(|ok| *ok)
    }

    /// Card number with all but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        let digits = sanitize_numeric_input(&self.card_number);
        let last_four = &digits[digits.len().saturating_sub(4)..];
        format!("**** **** **** {last_four}")
    }
}

impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentForm")
            .field("card_name", &self.card_name)
            .field("card_number", &self.masked_number())
            .field("expiration", &self.expiration)
            .field("cvc", &"***")
            .finish()
    }
}
