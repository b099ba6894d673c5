//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! tr-cli products list --query seiko --category featured
//! tr-cli products show tissot-prx-40
//! tr-cli --password timerush products add --name "Orient Bambino" --price 189
//! tr-cli --password timerush products edit orient-bambino --badge New
//! tr-cli --password timerush products delete orient-bambino
//! tr-cli --password timerush products reset
//! ```

use time_rush_admin::{EditMode, ProductFilter, ProductForm};
use time_rush_core::{Product, find_product};

use super::{CliError, Context, ProductFields};

/// List products. Only active products are shown unless `all` is set,
/// which requires admin access.
pub fn list(
    ctx: &Context,
    query: String,
    category: Option<String>,
    all: bool,
) -> Result<(), CliError> {
    let filter = ProductFilter { query, category };

    let products = if all {
        ctx.authenticated_admin()?.list_products(&filter)?
    } else {
        filter
            .apply(ctx.storefront().load_products())
            .into_iter()
            .filter(|p| p.active)
            .collect()
    };

    let settings = ctx.storefront().load_settings();
    print_table(&products, |amount| {
        ctx.storefront().format_money(amount, Some(&settings))
    });
    Ok(())
}

/// Show a single product.
pub fn show(ctx: &Context, id: &str) -> Result<(), CliError> {
    let products = ctx.storefront().load_products();
    let product =
        find_product(&products, id).ok_or_else(|| CliError::ProductNotFound(id.to_string()))?;

    let settings = ctx.storefront().load_settings();
    print_product(product, |amount| {
        ctx.storefront().format_money(amount, Some(&settings))
    });
    Ok(())
}

/// Create a product from the given fields.
pub fn add(ctx: &Context, fields: &ProductFields) -> Result<(), CliError> {
    let admin = ctx.authenticated_admin()?;
    let form = fields.apply(ProductForm::default());
    let product = admin.save_product(&EditMode::Create, &form)?;

    tracing::info!(id = %product.id, "Product created");
    Ok(())
}

/// Edit a product, keeping every field that was not given.
pub fn edit(ctx: &Context, id: &str, fields: &ProductFields) -> Result<(), CliError> {
    let admin = ctx.authenticated_admin()?;
    let products = ctx.storefront().load_products();
    let existing =
        find_product(&products, id).ok_or_else(|| CliError::ProductNotFound(id.to_string()))?;

    let form = fields.apply(ProductForm::from_product(existing));
    let mode = EditMode::Edit {
        original_id: existing.id.clone(),
    };
    let product = admin.save_product(&mode, &form)?;

    tracing::info!(id = %product.id, "Product updated");
    Ok(())
}

/// Delete a product.
pub fn delete(ctx: &Context, id: &str) -> Result<(), CliError> {
    ctx.authenticated_admin()?.delete_product(id)?;
    tracing::info!(%id, "Product deleted");
    Ok(())
}

/// Replace the catalog with the built-in defaults.
pub fn reset(ctx: &Context) -> Result<(), CliError> {
    let products = ctx.authenticated_admin()?.reset_to_default()?;
    tracing::info!(count = products.len(), "Catalog reset to defaults");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_table(products: &[Product], money: impl Fn(f64) -> String) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for product in products {
        let badge = product.display_badge().unwrap_or_default();
        let status = if product.active { "" } else { " (inactive)" };
        println!(
            "{:<28} {:<32} {:>12}  [{}] {}{}",
            product.id,
            product.name,
            money(product.price),
            product.categories.join(", "),
            badge,
            status
        );
    }
}

#[allow(clippy::print_stdout)]
fn print_product(product: &Product, money: impl Fn(f64) -> String) {
    println!("{} ({})", product.name, product.id);
    if !product.brand.is_empty() {
        println!("  Brand:      {}", product.brand);
    }
    println!("  Categories: {}", product.categories.join(", "));
    if product.is_on_sale() {
        println!(
            "  Price:      {} (was {}, -{}%)",
            money(product.price),
            money(product.compare_at_price),
            product.discount_percent()
        );
    } else {
        println!("  Price:      {}", money(product.price));
    }
    if let Some(badge) = product.display_badge() {
        println!("  Badge:      {badge}");
    }
    println!("  Active:     {}", product.active);
    if !product.short_description.is_empty() {
        println!("  {}", product.short_description);
    }
    for highlight in &product.highlights {
        println!("  - {highlight}");
    }
    for (key, value) in &product.specs {
        println!("  {key}: {value}");
    }
}
