//! Product identifier slugs.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// Nothing usable remained after slugging the input.
    #[error("product id cannot be empty")]
    Empty,
}

/// A product identifier in slug form.
///
/// ## Constraints
///
/// - Lowercase ASCII letters, digits and `-` only
/// - Whitespace runs in the input become a single `-`
/// - Repeated `-` collapse into one
/// - Must not be empty
///
/// ## Examples
///
/// ```
/// use time_rush_core::ProductId;
///
/// let id = ProductId::parse("  Seiko Presage #2 ").unwrap();
/// assert_eq!(id.as_str(), "seiko-presage-2");
///
/// assert!(ProductId::parse("  ").is_err());
/// assert!(ProductId::parse("!!!").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Parse a `ProductId` from free-form text.
    ///
    /// # Errors
    ///
    /// Returns [`ProductIdError::Empty`] if the slug of the input is empty.
    pub fn parse(raw: &str) -> Result<Self, ProductIdError> {
        let slug = slugify(raw);
        if slug.is_empty() {
            return Err(ProductIdError::Empty);
        }
        Ok(Self(slug))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lowercase the input, turn whitespace runs into `-`, drop anything outside
/// `[a-z0-9-]` and collapse repeated `-`.
///
/// Leading or trailing `-` produced by stripped characters are kept.
fn slugify(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                push_hyphen(&mut out);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        match ch {
            'a'..='z' | '0'..='9' => out.push(ch),
            '-' => push_hyphen(&mut out),
            _ => {}
        }
    }

    out
}

fn push_hyphen(out: &mut String) {
    if !out.ends_with('-') {
        out.push('-');
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
