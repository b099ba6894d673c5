//! Unified error handling for admin.

use thiserror::Error;

/// Admin operation error.
///
/// None of these leave partial state behind: validation happens before
/// anything is written.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The session has not logged in.
    #[error("Unauthorized: admin login required")]
    Unauthenticated,

    /// The supplied password does not match the stored one.
    #[error("Wrong password")]
    WrongPassword,

    /// A new password is shorter than the minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// A product form lacks an id or a name.
    #[error("ID and Name are required")]
    MissingIdOrName,

    /// Another product already uses this id.
    #[error("This ID already exists: {0}")]
    DuplicateId(String),

    /// No product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// An import file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidImport(#[source] serde_json::Error),

    /// An export could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Reading or writing an import/export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_display() {
        assert_eq!(AdminError::MissingIdOrName.to_string(), "ID and Name are required");

        let err = AdminError::DuplicateId("seiko-5".to_string());
        assert_eq!(err.to_string(), "This ID already exists: seiko-5");

        let err = AdminError::PasswordTooShort { min: 4 };
        assert_eq!(err.to_string(), "Password must be at least 4 characters");
    }
}
