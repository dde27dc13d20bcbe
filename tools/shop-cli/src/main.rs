//! Shop CLI - Command line storefront for Organic Shop.
//!
//! Commands:
//! - `shop products` - Browse the catalog by category or name
//! - `shop product` - Show one product with similar items
//! - `shop categories` - List categories with counts
//! - `shop cart` - Show and change the cart
//! - `shop checkout` - Pay for the cart
//! - `shop signup` / `shop login` / `shop logout` / `shop whoami` - Session
//! - `shop links` - Carry the signed-in user onto page links
//! - `shop validate` - Check a single form field
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, CategoriesArgs, CheckoutArgs, ConfigArgs, LinksArgs, LoginArgs, LogoutArgs,
    ProductArgs, ProductsArgs, SignupArgs, ValidateArgs,
};

/// Shop CLI - Browse, fill a cart and check out from the terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true, conflicts_with = "html")]
    json: bool,

    /// Print the rendered HTML fragment
    #[arg(long, global = true)]
    html: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, filtered by category or name
    Products(ProductsArgs),

    /// Show a product and similar items
    Product(ProductArgs),

    /// List categories with product counts
    Categories(CategoriesArgs),

    /// Show and change the cart
    Cart(CartArgs),

    /// Pay for the cart
    Checkout(CheckoutArgs),

    /// Create an account and sign in
    Signup(SignupArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout(LogoutArgs),

    /// Show the signed-in user
    Whoami,

    /// Add the signed-in user to same-origin links
    Links(LinksArgs),

    /// Validate a single form field
    Validate(ValidateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json, cli.html);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::list(args, &ctx),
        Commands::Product(args) => commands::products::show(args, &ctx),
        Commands::Categories(args) => commands::products::categories(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Signup(args) => commands::auth::signup(args, &ctx),
        Commands::Login(args) => commands::auth::login(args, &ctx),
        Commands::Logout(args) => commands::auth::logout(args, &ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Links(args) => commands::auth::links(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
