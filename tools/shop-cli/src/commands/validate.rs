//! Single-field validation command.

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use shop_commerce::validate::{
    sanitize_numeric_input, validate_card_name, validate_card_number, validate_confirm_password,
    validate_cvc, validate_email, validate_expiration, validate_name, validate_password,
    validate_postal_code, validate_required, Field, FieldError,
};

use super::ValidateArgs;
use crate::context::Context;

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let field: Field = args.field.parse().map_err(|e: String| anyhow!(e))?;
    let today = chrono::Local::now().date_naive();
    let value = if field.is_numeric() {
        sanitize_numeric_input(&args.value)
    } else {
        args.value
    };

    let result = check_field(field, &value, args.password.as_deref(), today)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "field": field,
            "valid": result.is_ok(),
            "message": result.err().map(|e| e.to_string()),
        }));
        return Ok(());
    }

    match result {
        Ok(()) => {
            ctx.output.success(&format!("{} is valid", field.label()));
            Ok(())
        }
        Err(e) => bail!(e),
    }
}

/// Run the validator that guards `field` in its form.
fn check_field(
    field: Field,
    value: &str,
    password: Option<&str>,
    today: NaiveDate,
) -> Result<Result<(), FieldError>> {
    let result = match field {
        Field::FirstName | Field::LastName | Field::City | Field::Province => {
            validate_name(field, value)
        }
        Field::StreetAddress => validate_required(field, value),
        Field::PostalCode => validate_postal_code(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::ConfirmPassword => {
            let Some(password) = password else {
                bail!("--password is required to check confirm-password");
            };
            validate_confirm_password(password, value)
        }
        Field::CardName => validate_card_name(value),
        Field::CardNumber => validate_card_number(value),
        Field::Expiration => validate_expiration(value, today),
        Field::Cvc => validate_cvc(value),
    };
    Ok(result)
}
