//! Admin dashboard operations.
//!
//! [`AdminController`] is what the dashboard's event handlers call. Every
//! operation past the login gate checks the session flag first; validation
//! failures are returned before anything is written.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::instrument;

use time_rush_core::{ExportDocument, Product, Settings};
use time_rush_storefront::{KeyValueStore, Storefront, keys};

use crate::forms::{ProductForm, SettingsForm};
use crate::transfer::{ImportPlan, ImportSummary};
use crate::{AdminError, ProductFilter};

/// Shortest admin password accepted by [`AdminController::change_password`].
pub const MIN_PASSWORD_LENGTH: usize = 4;

const AUTHED: &str = "1";
const NOT_AUTHED: &str = "0";

/// Whether the product editor creates a product or edits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    /// Edit the product currently stored under `original_id`.
    Edit { original_id: String },
}

/// Admin operations over a storefront and a session-scoped flag store.
#[derive(Debug)]
pub struct AdminController<S, Sess> {
    storefront: Storefront<S>,
    session: Sess,
}

impl<S: KeyValueStore, Sess: KeyValueStore> AdminController<S, Sess> {
    pub const fn new(storefront: Storefront<S>, session: Sess) -> Self {
        Self {
            storefront,
            session,
        }
    }

    pub const fn storefront(&self) -> &Storefront<S> {
        &self.storefront
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Whether this session has logged in.
    pub fn is_authenticated(&self) -> bool {
        match self.session.get(keys::session::ADMIN_AUTHED) {
            Ok(flag) => flag.as_deref() == Some(AUTHED),
            Err(e) => {
                tracing::warn!(error = %e, "Session store read failed");
                false
            }
        }
    }

    fn set_authenticated(&self, authed: bool) {
        let flag = if authed { AUTHED } else { NOT_AUTHED };
        if let Err(e) = self.session.set(keys::session::ADMIN_AUTHED, flag) {
            tracing::warn!(error = %e, "Session store write failed");
        }
    }

    fn require_auth(&self) -> Result<(), AdminError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AdminError::Unauthenticated)
        }
    }

    /// Log in with the admin password.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::WrongPassword`] if the password does not match.
    #[instrument(skip(self, password))]
    pub fn login(&self, password: &SecretString) -> Result<(), AdminError> {
        if password.expose_secret() != self.storefront.admin_password() {
            tracing::warn!("Admin login rejected");
            return Err(AdminError::WrongPassword);
        }
        self.set_authenticated(true);
        tracing::info!("Admin logged in");
        Ok(())
    }

    pub fn logout(&self) {
        self.set_authenticated(false);
        tracing::info!("Admin logged out");
    }

    /// Replace the admin password.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::WrongPassword`] if `old` is not the current
    /// password, or [`AdminError::PasswordTooShort`] if the trimmed new
    /// password is too short.
    #[instrument(skip(self, old, new))]
    pub fn change_password(
        &self,
        old: &SecretString,
        new: &SecretString,
    ) -> Result<(), AdminError> {
        self.require_auth()?;

        if old.expose_secret() != self.storefront.admin_password() {
            return Err(AdminError::WrongPassword);
        }
        let new = new.expose_secret().trim();
        if new.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AdminError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        self.storefront.set_admin_password(new);
        tracing::info!("Admin password updated");
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Products for the admin table, filtered.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    pub fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, AdminError> {
        self.require_auth()?;
        Ok(filter.apply(self.storefront.load_products()))
    }

    /// Save the product editor.
    ///
    /// New products go to the front of the list. An edit overlays the form
    /// on the stored product, so fields the form does not carry (such as the
    /// category set) are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::MissingIdOrName`] for an incomplete form,
    /// [`AdminError::DuplicateId`] when another product has the id, or
    /// [`AdminError::ProductNotFound`] when the edited product is gone.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub fn save_product(&self, mode: &EditMode, form: &ProductForm) -> Result<Product, AdminError> {
        self.require_auth()?;

        let record = form.to_record()?;
        let new_id = Product::normalize(Value::Object(record.clone())).id;

        let products = self.storefront.load_products();
        let mut stored: Vec<Value> = products
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()
            .map_err(AdminError::Serialization)?;

        let saved = match mode {
            EditMode::Create => {
                if products.iter().any(|p| p.id == new_id) {
                    return Err(AdminError::DuplicateId(new_id));
                }
                let value = Value::Object(record);
                stored.insert(0, value.clone());
                value
            }
            EditMode::Edit { original_id } => {
                let idx = products
                    .iter()
                    .position(|p| &p.id == original_id)
                    .ok_or_else(|| AdminError::ProductNotFound(original_id.clone()))?;
                if products
                    .iter()
                    .any(|p| p.id == new_id && &p.id != original_id)
                {
                    return Err(AdminError::DuplicateId(new_id));
                }

                let slot = stored
                    .get_mut(idx)
                    .ok_or_else(|| AdminError::ProductNotFound(original_id.clone()))?;
                if let Value::Object(existing) = slot {
                    existing.extend(record);
                }
                slot.clone()
            }
        };

        self.storefront.save_products(&stored);
        tracing::info!(id = %new_id, "Product saved");
        Ok(Product::normalize(saved))
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] if no product has `id`.
    #[instrument(skip(self))]
    pub fn delete_product(&self, id: &str) -> Result<(), AdminError> {
        self.require_auth()?;

        let mut products = self.storefront.load_products();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AdminError::ProductNotFound(id.to_owned()));
        }

        self.storefront.save_products(&products);
        tracing::info!("Product deleted");
        Ok(())
    }

    /// Replace the stored catalog with the default one.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    #[instrument(skip(self))]
    pub fn reset_to_default(&self) -> Result<Vec<Product>, AdminError> {
        self.require_auth()?;
        let products = self.storefront.reset_products_to_default();
        tracing::info!(count = products.len(), "Catalog reset to default");
        Ok(products)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Current values for the settings form.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    pub fn settings_form(&self) -> Result<SettingsForm, AdminError> {
        self.require_auth()?;
        Ok(SettingsForm::from_settings(&self.storefront.load_settings()))
    }

    /// Save the settings form over the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    #[instrument(skip(self, form))]
    pub fn save_settings_form(&self, form: &SettingsForm) -> Result<Settings, AdminError> {
        self.require_auth()?;
        let next = form.apply(self.storefront.load_settings());
        self.storefront.save_settings(&next);
        tracing::info!(store_name = %next.store_name, "Settings saved");
        Ok(next)
    }

    // =========================================================================
    // Export / import
    // =========================================================================

    /// Snapshot of the current settings and catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    pub fn export(&self) -> Result<ExportDocument, AdminError> {
        self.require_auth()?;
        Ok(ExportDocument::new(
            self.storefront.load_settings(),
            self.storefront.load_products(),
        ))
    }

    /// [`export`](Self::export) as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Unauthenticated`] before login.
    pub fn export_json(&self) -> Result<String, AdminError> {
        let doc = self.export()?;
        serde_json::to_string_pretty(&doc).map_err(AdminError::Serialization)
    }

    /// Import a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidImport`] for malformed JSON, in which case
    /// nothing is written.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn import_json(&self, text: &str) -> Result<ImportSummary, AdminError> {
        self.require_auth()?;

        let plan = ImportPlan::parse(text)?;
        let summary = plan.summary();

        if let Some(products) = &plan.products {
            self.storefront.save_products(products);
        }
        if let Some(settings) = &plan.settings {
            self.storefront.save_settings(settings);
        }

        tracing::info!(
            products = ?summary.products,
            settings = summary.settings,
            "Import applied"
        );
        Ok(summary)
    }

    /// Write [`export_json`](Self::export_json) to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Io`] if the file cannot be written.
    pub async fn export_file(&self, path: impl AsRef<Path>) -> Result<(), AdminError> {
        let json = self.export_json()?;
        tokio::fs::write(path.as_ref(), json).await?;
        tracing::info!(path = %path.as_ref().display(), "Export written");
        Ok(())
    }

    /// Read `path` and [`import_json`](Self::import_json) it.
    ///
    /// The stores are only touched after the read completes.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Io`] if the file cannot be read, or any error of
    /// [`import_json`](Self::import_json).
    pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportSummary, AdminError> {
        self.require_auth()?;
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        self.import_json(&text)
    }
}
