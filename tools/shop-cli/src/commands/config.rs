//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let shop = &ctx.config.shop;
    ctx.output.header("Current Configuration");

    ctx.output.info("[shop]");
    ctx.output.kv("shipping_fee", &shop.shipping_fee().to_string());
    ctx.output.kv("page_size", &shop.page_size.to_string());
    ctx.output.kv("storage_namespace", &shop.storage_namespace);
    ctx.output.kv("cart_key", &shop.cart_key());

    ctx.output.info("[storage]");
    ctx.output.kv(
        "path",
        &ctx.resolve_path(&ctx.config.storage.path).display().to_string(),
    );

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &ctx.resolve_path(path).display().to_string()),
        None => ctx.output.kv("path", "(bundled)"),
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
