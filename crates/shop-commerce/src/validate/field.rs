//! Form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated form field across the shipping, payment and account forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    FirstName,
    LastName,
    StreetAddress,
    City,
    Province,
    PostalCode,
    Email,
    Password,
    ConfirmPassword,
    CardName,
    CardNumber,
    Expiration,
    Cvc,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::StreetAddress,
        Field::City,
        Field::Province,
        Field::PostalCode,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::CardName,
        Field::CardNumber,
        Field::Expiration,
        Field::Cvc,
    ];

    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::StreetAddress => "Street address",
            Field::City => "City",
            Field::Province => "Province",
            Field::PostalCode => "Postal code",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::CardName => "Name on card",
            Field::CardNumber => "Card number",
            Field::Expiration => "Expiration date",
            Field::Cvc => "CVC",
        }
    }

    /// Input id in the page markup (e.g., "postal-code").
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::StreetAddress => "street-address",
            Field::City => "city",
            Field::Province => "province",
            Field::PostalCode => "postal-code",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
            Field::CardName => "card-name",
            Field::CardNumber => "card-number",
            Field::Expiration => "expiration",
            Field::Cvc => "cvc",
        }
    }

    /// Whether the input only accepts digits as it is typed.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::PostalCode | Field::Cvc)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Field::ALL
            .into_iter()
            .find(|field| field.id() == wanted)
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!("postal-code".parse::<Field>(), Ok(Field::PostalCode));
        assert_eq!("CARD_NUMBER".parse::<Field>(), Ok(Field::CardNumber));
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_ids_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Field::StreetAddress).unwrap();
        assert_eq!(json, r#""street-address""#);
    }
}
