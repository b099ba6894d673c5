//! Settings and admin password commands.

use secrecy::SecretString;
use time_rush_admin::SettingsForm;

use super::{CliError, Context};

/// Print the current settings.
#[allow(clippy::print_stdout)]
pub fn show(ctx: &Context) {
    let settings = ctx.storefront().load_settings();
    println!("Store name:      {}", settings.store_name);
    println!("Tagline:         {}", settings.tagline);
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Contact email:   {}", settings.contact_email);
    for (key, value) in &settings.extra {
        println!("{key}: {value}");
    }
}

/// Apply the settings form. Blank fields keep their current value.
pub fn set(ctx: &Context, form: &SettingsForm) -> Result<(), CliError> {
    let settings = ctx.authenticated_admin()?.save_settings_form(form)?;
    tracing::info!(store_name = %settings.store_name, "Settings saved");
    Ok(())
}

/// Change the admin password. The configured password is the old one.
pub fn change_password(ctx: &Context, new: &SecretString) -> Result<(), CliError> {
    let admin = ctx.authenticated_admin()?;
    let old = ctx.password().ok_or(CliError::MissingPassword)?;
    admin.change_password(old, new)?;
    Ok(())
}
