//! # Domain Types
//!
//! Core entity types for the Kardex catalog.
//!
//! Every entity uses a caller-supplied string id as its unique key. A
//! product owns a copy of its category and brand; the storage layer
//! persists those denormalized (id + name alongside the product row), so
//! one row read rebuilds the whole entity without joins.

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Brand
// =============================================================================

/// A product brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl Brand {
    /// Creates a new brand.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Brand {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Invariants (enforced by [`crate::validation::validate_product`]):
/// - `id`, `name`, `description` non-empty
/// - `price > 0`
/// - `stock >= 0`
/// - `category` and `brand` must reference existing rows (checked by the
///   service layer against storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Referenced category (persisted denormalized).
    pub category: Category,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Free-form description.
    pub description: String,

    /// Unit price. Strictly positive.
    pub price: f64,

    /// Referenced brand (persisted denormalized).
    pub brand: Brand,
}

impl Product {
    /// Creates a new product.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        stock: i64,
        description: impl Into<String>,
        price: f64,
        brand: Brand,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            category,
            stock,
            description: description.into(),
            price,
            brand,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
