//! Cart commands.

use time_rush_core::find_product;

use super::{CliError, Context};

/// Print cart lines, the item count and the subtotal.
#[allow(clippy::print_stdout)]
pub fn show(ctx: &Context) {
    let storefront = ctx.storefront();
    let cart = storefront.load_cart();
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    let products = storefront.load_products();
    let settings = storefront.load_settings();

    for line in cart.lines(&products) {
        println!(
            "{:>3} x {:<32} {:>12}",
            line.quantity,
            line.product.name,
            storefront.format_money(line.line_total(), Some(&settings))
        );
    }
    println!(
        "{} item(s), subtotal {}",
        cart.count(),
        storefront.format_money(cart.subtotal(&products), Some(&settings))
    );
}

/// Add a product to the cart. The product must exist and be active.
pub fn add(ctx: &Context, id: &str, qty: Option<i64>) -> Result<(), CliError> {
    let storefront = ctx.storefront();
    let products = storefront.load_products();
    match find_product(&products, id) {
        Some(product) if product.active => {
            let cart = storefront.add_to_cart(&product.id, qty);
            tracing::info!(id = %product.id, quantity = cart.quantity(&product.id), "Added to cart");
            Ok(())
        }
        _ => Err(CliError::ProductNotFound(id.to_string())),
    }
}

pub fn set(ctx: &Context, id: &str, qty: i64) {
    let cart = ctx.storefront().set_qty(id, qty);
    tracing::info!(%id, quantity = cart.quantity(id), "Cart updated");
}

pub fn remove(ctx: &Context, id: &str) {
    ctx.storefront().remove_from_cart(id);
    tracing::info!(%id, "Removed from cart");
}

pub fn clear(ctx: &Context) {
    ctx.storefront().clear_cart();
    tracing::info!("Cart cleared");
}
