//! Majik Bloom CLI - storefront shell.
//!
//! Each invocation behaves like one page load: the cart is rehydrated from
//! its persisted document, the command is applied, the cart is persisted,
//! and the resulting view is rendered.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! mb-cli products
//!
//! # Put two of product 1 in the cart, then look at it
//! mb-cli add 1
//! mb-cli add 1
//! mb-cli cart
//!
//! # Adjust quantities
//! mb-cli increment 1
//! mb-cli set 1 5
//! mb-cli decrement 1
//!
//! # Finish up
//! mb-cli remove 1
//! mb-cli checkout
//!
//! # Ask the shop a question
//! mb-cli contact -n "Ada" -e ada@example.com -m "When do you restock?"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// The shell renders views on stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use majik_bloom_storefront::cart::storage::FileStorage;
use majik_bloom_storefront::catalog::Catalog;
use majik_bloom_storefront::config::StorefrontConfig;
use majik_bloom_storefront::state::Storefront;

mod commands;

#[derive(Parser)]
#[command(name = "mb-cli")]
#[command(author, version, about = "Majik Bloom storefront shell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Show the cart with totals
    Cart,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
    },
    /// Increase a line's quantity by one
    Increment {
        /// Product id
        id: String,
    },
    /// Decrease a line's quantity by one (stops at 1)
    Decrement {
        /// Product id
        id: String,
    },
    /// Set a line's quantity
    Set {
        /// Product id
        id: String,

        /// New quantity (at least 1)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Check out (demo confirmation only)
    Checkout,
    /// Send a message to the shop
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email address
        #[arg(short, long)]
        email: String,

        /// Your message
        #[arg(short, long)]
        message: String,
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
    let config = StorefrontConfig::from_env()?;
    let storage = FileStorage::new(&config.cart_path);
    let mut shop = Storefront::init(config, Catalog::demo(), storage);

    match cli.command {
        Commands::Products => commands::products::list(&shop),
        Commands::Cart => commands::cart::show(&shop),
        Commands::Add { id } => commands::cart::add(&mut shop, &id),
        Commands::Increment { id } => commands::cart::increment(&mut shop, &id),
        Commands::Decrement { id } => commands::cart::decrement(&mut shop, &id),
        Commands::Set { id, quantity } => commands::cart::set(&mut shop, &id, quantity),
        Commands::Remove { id } => commands::cart::remove(&mut shop, &id),
        Commands::Checkout => commands::cart::checkout(&shop),
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::submit(name, email, message),
    }

    Ok(())
}
