//! Export and import commands.

use std::path::Path;

use super::{CliError, Context};

/// Write products and settings to `path`.
pub async fn export(ctx: &Context, path: &Path) -> Result<(), CliError> {
    ctx.authenticated_admin()?.export_file(path).await?;
    Ok(())
}

/// Load products and/or settings from `path`.
pub async fn import(ctx: &Context, path: &Path) -> Result<(), CliError> {
    let summary = ctx.authenticated_admin()?.import_file(path).await?;

    match summary.products {
        Some(count) => tracing::info!(count, "Imported products"),
        None => tracing::info!("No products in import"),
    }
    if summary.settings {
        tracing::info!("Imported settings");
    }
    Ok(())
}
