//! Command implementations.
//!
//! Every command runs against a [`Context`]: the file-backed storefront in
//! the configured data directory plus an in-memory admin session that only
//! lives for the duration of one invocation.

pub mod cart;
pub mod products;
pub mod settings;
pub mod transfer;

use clap::Args;
use secrecy::SecretString;
use thiserror::Error;

use time_rush_admin::{AdminController, AdminError, ProductForm};
use time_rush_storefront::{FileStore, MemoryStore, StoreError, Storefront};

use crate::config::CliConfig;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Admin command run without a password.
    #[error("Admin password required: pass --password or set TIME_RUSH_ADMIN_PASSWORD")]
    MissingPassword,

    /// Product lookup failed.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Admin operation failed.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// Store could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Shared state for one CLI invocation.
pub struct Context {
    admin: AdminController<FileStore, MemoryStore>,
    password: Option<SecretString>,
}

impl Context {
    /// Open the store in the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &CliConfig) -> Result<Self, CliError> {
        let store = FileStore::open(&config.data_dir)?;
        tracing::debug!(dir = %config.data_dir.display(), "Opened store");

        Ok(Self {
            admin: AdminController::new(Storefront::new(store), MemoryStore::new()),
            password: config.admin_password.clone(),
        })
    }

    pub const fn storefront(&self) -> &Storefront<FileStore> {
        self.admin.storefront()
    }

    /// Log in with the configured password and hand out the controller.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingPassword`] when no password is configured,
    /// or the login failure.
    pub fn authenticated_admin(&self) -> Result<&AdminController<FileStore, MemoryStore>, CliError> {
        if !self.admin.is_authenticated() {
            let password = self.password.as_ref().ok_or(CliError::MissingPassword)?;
            self.admin.login(password)?;
        }
        Ok(&self.admin)
    }

    pub const fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }
}

/// Product editor fields. Omitted fields keep their current value on edit
/// and their form default on add.
#[derive(Debug, Clone, Default, Args)]
pub struct ProductFields {
    /// Product id (slugged; defaults to the name on add)
    #[arg(long)]
    pub new_id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    /// Primary category
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub compare_at_price: Option<String>,

    #[arg(long)]
    pub badge: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub short_description: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated highlights
    #[arg(long)]
    pub highlights: Option<String>,

    /// Specs as `key: value` lines
    #[arg(long)]
    pub specs: Option<String>,

    /// Whether the product is listed on the storefront
    #[arg(long)]
    pub active: Option<bool>,
}

impl ProductFields {
    /// Apply the given fields over a form.
    #[must_use]
    pub fn apply(&self, mut form: ProductForm) -> ProductForm {
        fn set(target: &mut String, value: Option<&String>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut form.id, self.new_id.as_ref());
        set(&mut form.name, self.name.as_ref());
        set(&mut form.brand, self.brand.as_ref());
        set(&mut form.category, self.category.as_ref());
        set(&mut form.price, self.price.as_ref());
        set(&mut form.compare_at_price, self.compare_at_price.as_ref());
        set(&mut form.badge, self.badge.as_ref());
        set(&mut form.image, self.image.as_ref());
        set(&mut form.short_description, self.short_description.as_ref());
        set(&mut form.description, self.description.as_ref());
        set(&mut form.highlights, self.highlights.as_ref());
        set(&mut form.specs, self.specs.as_ref());
        if let Some(active) = self.active {
            form.active = active;
        }
        form
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_apply_only_given_values() {
        let fields = ProductFields {
            name: Some("Orient Bambino".to_string()),
            price: Some("189".to_string()),
            active: Some(false),
            ..ProductFields::default()
        };

        let form = fields.apply(ProductForm::default());
        assert_eq!(form.name, "Orient Bambino");
        assert_eq!(form.price, "189");
        assert_eq!(form.category, "classic");
        assert!(!form.active);
        assert!(form.id.is_empty());
    }

    #[test]
    fn test_missing_password_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            admin_password: None,
            log_format: crate::config::LogFormat::Pretty,
        };
        let ctx = Context::open(&config).unwrap();
        assert!(matches!(
            ctx.authenticated_admin(),
            Err(CliError::MissingPassword)
        ));
    }

    #[test]
    fn test_login_with_default_password() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            admin_password: Some(SecretString::from("timerush")),
            log_format: crate::config::LogFormat::Pretty,
        };
        let ctx = Context::open(&config).unwrap();
        assert!(ctx.authenticated_admin().is_ok());
        assert!(ctx.password().is_some());
    }
}
