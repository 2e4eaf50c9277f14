//! # Catalog Error Type
//!
//! The tagged result type every service call returns.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     CatalogError variants                       │
//! │                                                                 │
//! │  Domain (caller must fix input or state; never retried):        │
//! │  ├── Validation       field rules / business rules violated     │
//! │  ├── AlreadyExists    insert with an id that is taken           │
//! │  ├── NotFound         no row for the requested id               │
//! │  ├── NoMatches        a filtered listing came back empty        │
//! │  ├── EmptyListing     the unfiltered listing came back empty    │
//! │  └── StillReferenced  delete blocked by referencing products    │
//! │                                                                 │
//! │  Storage (propagated unchanged, wraps the cause):               │
//! │  └── Store            the backing store failed                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services never swallow either kind; callers pattern-match the variant
//! instead of catching exceptions.

use thiserror::Error;

use kardex_core::ValidationError;
use kardex_db::StoreError;

/// Errors surfaced by the catalog services.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input failed field-level validation or a business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An entity with the same id already exists.
    #[error("{entity} '{id}' already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// No row for the requested id.
    #[error("{entity} '{id}' does not exist")]
    NotFound { entity: &'static str, id: String },

    /// A filtered product listing matched nothing.
    #[error("no products with {filter} '{value}'")]
    NoMatches { filter: &'static str, value: String },

    /// The unfiltered product listing is empty.
    #[error("the product listing is empty")]
    EmptyListing,

    /// Deletion blocked: product rows still reference the entity.
    #[error("{entity} '{id}' is still referenced by products")]
    StillReferenced { entity: &'static str, id: String },

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Creates an AlreadyExists error.
    pub fn already_exists(entity: &'static str, id: impl Into<String>) -> Self {
        CatalogError::AlreadyExists {
            entity,
            id: id.into(),
        }
    }

    /// Creates a NotFound error.
    pub fn missing(entity: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a NoMatches error for an empty filtered listing.
    pub fn no_matches(filter: &'static str, value: impl Into<String>) -> Self {
        CatalogError::NoMatches {
            filter,
            value: value.into(),
        }
    }

    /// Creates a StillReferenced error.
    pub fn still_referenced(entity: &'static str, id: impl Into<String>) -> Self {
        CatalogError::StillReferenced {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for catalog service operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::already_exists("category", "cat-1");
        assert_eq!(err.to_string(), "category 'cat-1' already exists");

        let err = CatalogError::missing("product", "prod-1");
        assert_eq!(err.to_string(), "product 'prod-1' does not exist");

        let err = CatalogError::no_matches("brand", "br-1");
        assert_eq!(err.to_string(), "no products with brand 'br-1'");

        let err = CatalogError::still_referenced("brand", "br-1");
        assert_eq!(
            err.to_string(),
            "brand 'br-1' is still referenced by products"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: CatalogError = ValidationError::single("stock must not be negative").into();
        assert_eq!(err.to_string(), "stock must not be negative");
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
