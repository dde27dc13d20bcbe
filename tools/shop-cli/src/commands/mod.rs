//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category slug.
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Name search (overrides the category).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number.
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: u64,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Category to mark active.
    #[arg(short, long, default_value = "all")]
    pub active: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

/// Cart lines are addressed by their 1-based position in `shop cart show`.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and order summary.
    Show {
        /// Only show lines whose name contains this text.
        #[arg(short, long, default_value = "")]
        filter: String,
    },
    /// Add a product (requires login).
    Add {
        /// Product id.
        id: u64,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Add one unit to a line.
    Inc {
        /// Line number.
        line: usize,
    },
    /// Take one unit from a line (a line at 1 stays at 1).
    Dec {
        /// Line number.
        line: usize,
    },
    /// Set a line's quantity.
    Set {
        /// Line number.
        line: usize,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
        /// Remove the line when the quantity drops to zero.
        #[arg(long)]
        allow_remove: bool,
    },
    /// Remove a line.
    Remove {
        /// Line number.
        line: usize,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Apply an add-to-cart link (?action=add&id=N&qty=M).
    OpenUrl {
        /// Page URL.
        url: String,
    },
}

/// Arguments for the checkout command. Missing fields are prompted for.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub street_address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub province: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Name as shown on the card.
    #[arg(long)]
    pub card_name: Option<String>,
    #[arg(long)]
    pub card_number: Option<String>,
    /// Expiration as MM/YY.
    #[arg(long)]
    pub expiration: Option<String>,
    #[arg(long)]
    pub cvc: Option<String>,
    /// Skip confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the signup command.
#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    /// Page URL to sign in on.
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Page URL to sign in on.
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the logout command.
#[derive(Args)]
pub struct LogoutArgs {
    /// Page URL to sign out of.
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the links command.
#[derive(Args)]
pub struct LinksArgs {
    /// Current page URL (its `user` parameter is carried over).
    pub page: String,
    /// Link hrefs found on the page.
    #[arg(required = true)]
    pub hrefs: Vec<String>,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Field id (e.g., postal-code, card-number).
    pub field: String,
    /// Value to check.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Password to compare against when checking confirm-password.
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
