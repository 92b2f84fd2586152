//! SecureView CLI - storefront state from the command line.
//!
//! All state lives in a file-backed key-value store under the data
//! directory, one key per file, so every command sees what the previous
//! command persisted.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! sv-cli catalog list
//! sv-cli catalog show prod_001
//!
//! # Sign in and shop
//! sv-cli auth login test@example.com -p password123
//! sv-cli cart add prod_001 -q 2
//! sv-cli checkout --name "Test User" --street "1 Main St" --city Pune \
//!     --postal-code 411001 --country India --receipt upi-receipt.png
//! sv-cli orders list
//!
//! # Manage orders as an admin
//! sv-cli auth login admin@example.com -p adminpassword
//! sv-cli admin set-status PSOID001 shipped
//! ```
//!
//! # Configuration
//!
//! - `SECUREVIEW_DATA_DIR` - where state files live (default `.secureview`)
//! - `SECUREVIEW_LATENCY_MS` - simulated backend delay for auth and checkout

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use secureview_storefront::kv::FileStore;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "sv-cli")]
#[command(author, version, about = "SecureView storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist (requires sign-in)
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Sign in, sign up, and manage the profile
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Place an order from the current cart
    Checkout {
        /// Recipient name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        street: String,

        /// City
        #[arg(long)]
        city: String,

        /// Postal code
        #[arg(long)]
        postal_code: String,

        /// Country
        #[arg(long)]
        country: String,

        /// Payment receipt filename; omit for direct payment
        #[arg(long)]
        receipt: Option<String>,
    },
    /// View your order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Order management console (requires an admin sign-in)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally one category
    List {
        /// Category to filter by
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product and record the view
    Show {
        /// Product id, e.g. `prod_001`
        product_id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: String,
    },
    /// Set the quantity of a cart line
    Update {
        /// Product id
        product_id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Show the cart contents and total
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product to the wishlist
    Add {
        /// Product id
        product_id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        product_id: String,
    },
    /// Show the wishlist
    Show,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in with an email or phone number
    Login {
        /// Email address or phone number
        identifier: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Save a new address
    AddAddress {
        /// Address label, e.g. `Home`
        #[arg(short, long)]
        name: String,

        /// Street address
        #[arg(long)]
        street: String,

        /// City
        #[arg(long)]
        city: String,

        /// Postal code
        #[arg(long)]
        postal_code: String,

        /// Country
        #[arg(long)]
        country: String,
    },
    /// Remove a saved address
    RemoveAddress {
        /// Address id, e.g. `addr_1a2b...`
        address_id: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List your orders, newest first
    List,
    /// Show one of your orders in full
    Show {
        /// Order id, e.g. `PSOID001`
        order_id: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List every order from every user
    List,
    /// Show any order in full
    Show {
        /// Order id
        order_id: String,
    },
    /// Set the status of an order
    SetStatus {
        /// Order id
        order_id: String,

        /// New status, e.g. `shipped` or `Awaiting Payment Confirmation`
        status: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let latency = config.latency;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(category.as_deref()),
            CatalogAction::Show { product_id } => commands::catalog::show(&store, &product_id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&store, &product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&store, &product_id)?,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&store, &product_id, quantity)?,
            CartAction::Show => commands::cart::show(&store),
            CartAction::Clear => commands::cart::clear(&store)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { product_id } => commands::wishlist::add(&store, &product_id)?,
            WishlistAction::Remove { product_id } => {
                commands::wishlist::remove(&store, &product_id)?;
            }
            WishlistAction::Show => commands::wishlist::show(&store)?,
        },
        Commands::Auth { action } => match action {
            AuthAction::Login {
                identifier,
                password,
            } => commands::auth::login(&store, latency, &identifier, &password)?,
            AuthAction::Signup {
                name,
                email,
                phone,
                password,
            } => commands::auth::signup(&store, latency, &name, &email, &phone, &password)?,
            AuthAction::Logout => commands::auth::logout(&store)?,
            AuthAction::Whoami => commands::auth::whoami(&store),
            AuthAction::AddAddress {
                name,
                street,
                city,
                postal_code,
                country,
            } => commands::auth::add_address(&store, &name, &street, &city, &postal_code, &country)?,
            AuthAction::RemoveAddress { address_id } => {
                commands::auth::remove_address(&store, &address_id)?;
            }
        },
        Commands::Checkout {
            name,
            street,
            city,
            postal_code,
            country,
            receipt,
        } => commands::checkout::place_order(
            &store,
            latency,
            &name,
            &street,
            &city,
            &postal_code,
            &country,
            receipt.as_deref(),
        )?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&store)?,
            OrdersAction::Show { order_id } => commands::orders::show(&store, &order_id)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::List => commands::admin::list(&store)?,
            AdminAction::Show { order_id } => commands::admin::show(&store, &order_id)?,
            AdminAction::SetStatus { order_id, status } => {
                commands::admin::set_status(&store, &order_id, &status)?;
            }
        },
    }
    Ok(())
}
