//! Cart commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use shop_cache::Store;
use shop_commerce::cart::{AddToCartDirective, CartEngine, QuantityChange};
use shop_commerce::{view, CommerceError, Notification, ProductId};
use url::Url;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.store()?;
    let engine = CartEngine::new(&store, &catalog, &ctx.config.shop);

    match args.command.unwrap_or(CartCommand::Show {
        filter: String::new(),
    }) {
        CartCommand::Show { filter } => show(&engine, &filter, ctx),
        CartCommand::Add { id, qty } => add(&engine, &store, id, qty, ctx),
        CartCommand::Inc { line } => step(&engine, line, true, ctx),
        CartCommand::Dec { line } => step(&engine, line, false, ctx),
        CartCommand::Set {
            line,
            qty,
            allow_remove,
        } => set(&engine, line, qty, allow_remove, ctx),
        CartCommand::Remove { line, yes } => remove(&engine, line, yes, ctx),
        CartCommand::Clear { yes } => clear(&engine, yes, ctx),
        CartCommand::OpenUrl { url } => open_url(&engine, &url, ctx),
    }
}

fn show<S: Store>(engine: &CartEngine<'_, S>, filter: &str, ctx: &Context) -> Result<()> {
    let cart = engine.cart();
    let summary = engine.compute_summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart,
            "summary": summary,
        }));
        return Ok(());
    }

    if ctx.output.is_html() {
        ctx.output.html(&view::render_cart_badge(summary.item_count));
        ctx.output.html(&view::render_cart(&cart, filter));
        ctx.output.html(&view::render_order_summary(&summary));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({})", summary.item_count));
    if cart.is_empty() {
        ctx.output.info(view::EMPTY_CART_MESSAGE);
        return Ok(());
    }

    let visible = cart.matching(filter);
    for (index, item) in cart.items().iter().enumerate() {
        if !visible.contains(&index) {
            continue;
        }
        ctx.output.table_row(
            &[
                &format!("{}.", index + 1),
                &item.name,
                &format!("x{}", item.quantity),
                &item.unit_price.to_string(),
                &item.line_total().to_string(),
            ],
            &[4, 28, 6, 12, 12],
        );
    }
    if visible.is_empty() {
        ctx.output.info("No cart items match the filter.");
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &summary.subtotal.to_string());
    ctx.output.kv("Shipping", &summary.shipping_fee.to_string());
    ctx.output.kv("Total", &summary.total.to_string());

    Ok(())
}

fn add<S: Store>(
    engine: &CartEngine<'_, S>,
    store: S,
    id: u64,
    qty: u32,
    ctx: &Context,
) -> Result<()> {
    if ctx.current_user(store)?.is_none() {
        let notification = Notification::login_required_to_add();
        bail!("{}: {}", notification.title, notification.message);
    }
    if qty == 0 {
        bail!("Quantity must be at least 1");
    }

    let product_id = ProductId::new(id);
    let Some(product) = engine.add_or_increment(product_id, qty) else {
        ctx.output.notification(&Notification::product_not_found());
        return Err(CommerceError::ProductNotFound(product_id).into());
    };

    ctx.output
        .notification(&Notification::item_added(&product.name, qty));
    ctx.output
        .debug(&format!("Cart now holds {} item(s)", engine.item_count()));
    report_json(engine, ctx);
    Ok(())
}

fn step<S: Store>(engine: &CartEngine<'_, S>, line: usize, up: bool, ctx: &Context) -> Result<()> {
    let index = line_index(engine, line)?;
    let changed = if up {
        engine.increment(index)
    } else {
        engine.decrement(index)
    };

    if changed {
        ctx.output.success(&format!("Updated line {}", line));
    } else if !up {
        ctx.output
            .warn("Quantity is already 1. Use `shop cart remove` to delete the line.");
    } else {
        ctx.output.warn("Quantity is already at the maximum.");
    }
    report_json(engine, ctx);
    Ok(())
}

fn set<S: Store>(
    engine: &CartEngine<'_, S>,
    line: usize,
    qty: i64,
    allow_remove: bool,
    ctx: &Context,
) -> Result<()> {
    let index = line_index(engine, line)?;
    match engine.set_quantity(index, qty, allow_remove) {
        QuantityChange::Updated { from, to } => {
            ctx.output
                .success(&format!("Line {}: {} → {}", line, from, to));
        }
        QuantityChange::Removed(item) => {
            ctx.output.success(&format!("Removed {}", item.name));
        }
        QuantityChange::Unchanged => ctx.output.info("Quantity unchanged"),
        QuantityChange::OutOfBounds => bail!("No cart line {}", line),
    }
    report_json(engine, ctx);
    Ok(())
}

fn remove<S: Store>(engine: &CartEngine<'_, S>, line: usize, yes: bool, ctx: &Context) -> Result<()> {
    let index = line_index(engine, line)?;
    let mut prompt_error = None;

    let removed = engine.remove(index, |item| {
        if yes {
            return true;
        }
        match Confirm::new()
            .with_prompt(format!("Remove {} from your cart?", item.name))
            .default(false)
            .interact()
        {
            Ok(confirmed) => confirmed,
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        }
    });

    if let Some(e) = prompt_error {
        return Err(e).context("Failed to read confirmation");
    }

    match removed {
        Some(item) => ctx.output.success(&format!("Removed {}", item.name)),
        None => ctx.output.warn("Removal cancelled"),
    }
    report_json(engine, ctx);
    Ok(())
}

fn clear<S: Store>(engine: &CartEngine<'_, S>, yes: bool, ctx: &Context) -> Result<()> {
    if engine.item_count() == 0 {
        ctx.output.info(view::EMPTY_CART_MESSAGE);
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove every item from your cart?")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    engine.clear();
    ctx.output.success("Cart cleared");
    report_json(engine, ctx);
    Ok(())
}

fn open_url<S: Store>(engine: &CartEngine<'_, S>, raw: &str, ctx: &Context) -> Result<()> {
    let mut url = Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))?;
    let directive = AddToCartDirective::parse(&url);

    match engine.apply_url(&mut url) {
        Some(product) => {
            let qty = directive.map(|d| d.quantity).unwrap_or(1);
            ctx.output
                .notification(&Notification::item_added(&product.name, qty));
        }
        None if directive.is_some() => {
            ctx.output.notification(&Notification::product_not_found());
        }
        None => ctx.output.info("No add-to-cart action in the URL"),
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "url": url.as_str(),
            "item_count": engine.item_count(),
        }));
    } else {
        println!("{}", url);
    }
    Ok(())
}

/// Convert a 1-based line number into a cart index.
fn line_index<S: Store>(engine: &CartEngine<'_, S>, line: usize) -> Result<usize> {
    let len = engine.cart().len();
    match line.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => bail!("No cart line {} (cart has {} line(s))", line, len),
    }
}

fn report_json<S: Store>(engine: &CartEngine<'_, S>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&engine.compute_summary());
    }
}
