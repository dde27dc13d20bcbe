//! Checkout command.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use shop_commerce::cart::CartEngine;
use shop_commerce::checkout::{CheckoutError, CheckoutFlow, PaymentForm, ShippingForm};
use shop_commerce::validate::Field;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.store()?;
    let engine = CartEngine::new(&store, &catalog, &ctx.config.shop);
    let signed_in = ctx.current_user(&store)?.is_some();

    let mut flow = CheckoutFlow::new();
    ctx.output.header(&format!("Step {}: {}", flow.step().number(), flow.step().display_name()));

    // Session and cart are checked before asking for any details.
    if !signed_in {
        return fail(ctx, CheckoutError::LoginRequired);
    }
    if engine.item_count() == 0 {
        return fail(ctx, CheckoutError::EmptyCart);
    }

    let shipping = ShippingForm::new(
        field(args.first_name, Field::FirstName)?,
        field(args.last_name, Field::LastName)?,
        field(args.street_address, Field::StreetAddress)?,
        field(args.city, Field::City)?,
        field(args.province, Field::Province)?,
        &field(args.postal_code, Field::PostalCode)?,
    );
    if let Err(e) = flow.begin(&engine, signed_in, shipping) {
        return fail(ctx, e);
    }

    let summary = engine.compute_summary();
    ctx.output.header(&format!("Step {}: {}", flow.step().number(), flow.step().display_name()));
    if let Some(shipping) = flow.shipping() {
        ctx.output.kv("Ship to", &shipping.one_line());
    }
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Total", &summary.total.to_string());

    let payment = PaymentForm::new(
        field(args.card_name, Field::CardName)?,
        field(args.card_number, Field::CardNumber)?,
        field(args.expiration, Field::Expiration)?,
        field(args.cvc, Field::Cvc)?,
    );

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Pay {} now?", summary.total))
            .default(true)
            .interact()?;
        if !confirmed {
            flow.cancel();
            ctx.output.warn("Checkout cancelled; your cart is unchanged");
            return Ok(());
        }
    }

    let today = chrono::Local::now().date_naive();
    let receipt = match flow.submit_payment(&engine, &payment, today) {
        Ok(receipt) => receipt,
        Err(e) => return fail(ctx, e),
    };

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
    } else if ctx.output.is_html() {
        ctx.output.html(&shop_commerce::view::render_notification(&receipt.notification()));
    } else {
        ctx.output.notification(&receipt.notification());
    }

    Ok(())
}

/// Use the flag value, or prompt for it.
fn field(value: Option<String>, field: Field) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let input: String = Input::new()
        .with_prompt(field.label())
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

fn fail(ctx: &Context, error: CheckoutError) -> Result<()> {
    if ctx.output.is_html() {
        ctx.output.html(&shop_commerce::view::render_notification(&error.notification()));
    } else {
        ctx.output.notification(&error.notification());
    }
    if let Some(errors) = error.form_errors() {
        ctx.output.form_errors(errors);
    }
    bail!(error)
}
