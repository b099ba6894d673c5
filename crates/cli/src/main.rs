//! Time Rush CLI - Catalog, cart, and store administration tools.
//!
//! # Usage
//!
//! ```bash
//! # List active products in a category
//! tr-cli products list --category sport
//!
//! # Add a product (admin)
//! tr-cli --password timerush products add --name "Orient Bambino" --price 189
//!
//! # Put two of a product in the cart
//! tr-cli cart add orient-bambino-v2 --qty 2
//!
//! # Export the catalog and settings
//! tr-cli --password timerush export backup.json
//! ```
//!
//! # Commands
//!
//! - `products` - Browse and manage the catalog
//! - `cart` - Inspect and change the cart
//! - `settings` - Show or update store settings
//! - `password` - Change the admin password
//! - `export` / `import` - Back up or restore the catalog and settings

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{Context, ProductFields};
use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "tr-cli")]
#[command(author, version, about = "Time Rush CLI tools")]
struct Cli {
    /// Directory holding the store files (overrides `TIME_RUSH_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Admin password (overrides `TIME_RUSH_ADMIN_PASSWORD`)
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect and change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show or update store settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Manage the admin password
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },
    /// Export products and settings to a JSON file (admin)
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Import products and/or settings from a JSON file (admin)
    Import {
        /// Source file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Case-insensitive search over id, name, and brand
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only products in this category (`all` for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Include inactive products (admin)
        #[arg(long)]
        all: bool,
    },
    /// Show one product
    Show {
        /// Product id
        id: String,
    },
    /// Create a product (admin)
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Edit a product (admin)
    Edit {
        /// Id of the product to edit
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product (admin)
    Delete {
        /// Product id
        id: String,
    },
    /// Replace the catalog with the built-in defaults (admin)
    Reset,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and subtotal
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Quantity to add
        #[arg(short, long)]
        qty: Option<i64>,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product id
        id: String,

        /// New quantity
        qty: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the current settings
    Show,
    /// Update settings; omitted fields keep their value (admin)
    Set {
        #[arg(long)]
        store_name: Option<String>,

        #[arg(long)]
        tagline: Option<String>,

        #[arg(long)]
        currency_symbol: Option<String>,

        #[arg(long)]
        contact_email: Option<String>,
    },
}

#[derive(Subcommand)]
enum PasswordAction {
    /// Change the admin password; `--password` must be the current one
    Set {
        /// New password
        new_password: String,
    },
}

#[tokio::main]
async fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn run(cli: Cli, mut config: CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(password) = cli.password {
        config.admin_password = Some(SecretString::from(password));
    }

    let ctx = Context::open(&config)?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List {
                query,
                category,
                all,
            } => commands::products::list(&ctx, query, category, all)?,
            ProductAction::Show { id } => commands::products::show(&ctx, &id)?,
            ProductAction::Add { fields } => commands::products::add(&ctx, &fields)?,
            ProductAction::Edit { id, fields } => commands::products::edit(&ctx, &id, &fields)?,
            ProductAction::Delete { id } => commands::products::delete(&ctx, &id)?,
            ProductAction::Reset => commands::products::reset(&ctx)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx),
            CartAction::Add { id, qty } => commands::cart::add(&ctx, &id, qty)?,
            CartAction::Set { id, qty } => commands::cart::set(&ctx, &id, qty),
            CartAction::Remove { id } => commands::cart::remove(&ctx, &id),
            CartAction::Clear => commands::cart::clear(&ctx),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&ctx),
            SettingsAction::Set {
                store_name,
                tagline,
                currency_symbol,
                contact_email,
            } => commands::settings::set(
                &ctx,
                &time_rush_admin::SettingsForm {
                    store_name: store_name.unwrap_or_default(),
                    tagline: tagline.unwrap_or_default(),
                    currency_symbol: currency_symbol.unwrap_or_default(),
                    contact_email: contact_email.unwrap_or_default(),
                },
            )?,
        },
        Commands::Password { action } => match action {
            PasswordAction::Set { new_password } => {
                commands::settings::change_password(&ctx, &SecretString::from(new_password))?;
            }
        },
        Commands::Export { path } => commands::transfer::export(&ctx, &path).await?,
        Commands::Import { path } => commands::transfer::import(&ctx, &path).await?,
    }
    Ok(())
}
