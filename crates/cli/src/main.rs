//! QuickCart CLI - a thin storefront front-end over quickcart-core.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (also logs you in for this invocation)
//! quickcart register -u alice -e alice@example.com -p 'Sunny-day1' -c 'Sunny-day1'
//!
//! # Log in; --remember keeps the session across invocations
//! quickcart login alice -p 'Sunny-day1' --remember
//!
//! # Browse and shop
//! quickcart catalog
//! quickcart cart add p1
//! quickcart cart show
//! quickcart checkout
//! ```
//!
//! State lives in the platform data directory unless `--data-dir` is given.
//! The product catalog is read from `catalog.toml` unless `--catalog` points
//! elsewhere.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quickcart_core::Store;

mod commands;

#[derive(Parser)]
#[command(name = "quickcart")]
#[command(author, version, about = "QuickCart storefront demo")]
struct Cli {
    /// Directory holding the quickcart database
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the product catalog manifest
    #[arg(long, global = true, default_value = "catalog.toml")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        /// Username (at least 3 characters)
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (needs 8+ characters mixing cases and digits)
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm_password: String,
    },
    /// Log in with a username or email
    Login {
        /// Username or email
        identifier: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Keep the session across invocations
        #[arg(long)]
        remember: bool,
    },
    /// End the active session
    Logout,
    /// Show the active session
    Whoami,
    /// List catalog products
    Catalog {
        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place the demo order and clear the cart
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Catalog product id
        product_id: String,
    },
    /// Remove a product entirely
    Remove {
        /// Catalog product id
        product_id: String,
    },
    /// Set a product's quantity (0 removes it)
    Set {
        /// Catalog product id
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Show cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &cli.data_dir {
        Some(dir) => Store::open(dir.join("quickcart.db"))?,
        None => Store::open_default()?,
    };

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => commands::account::register(&store, &username, &email, &password, &confirm_password)?,
        Commands::Login {
            identifier,
            password,
            remember,
        } => commands::account::login(&store, &identifier, &password, remember)?,
        Commands::Logout => commands::account::logout(&store)?,
        Commands::Whoami => commands::account::whoami(&store),
        Commands::Catalog { category } => {
            commands::catalog::list(&cli.catalog, category.as_deref())?;
        }
        Commands::Cart { action } => match action {
            CartAction::Add { product_id } => {
                commands::cart::add(&store, &cli.catalog, &product_id)?;
            }
            CartAction::Remove { product_id } => commands::cart::remove(&store, &product_id)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&store, &product_id, quantity)?,
            CartAction::Show => commands::cart::show(&store),
            CartAction::Clear => commands::cart::clear(&store)?,
        },
        Commands::Checkout => commands::cart::checkout(&store)?,
    }

    Ok(())
}
