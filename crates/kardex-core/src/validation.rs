//! # Validation Module
//!
//! Field-level validation rules for catalog entities.
//!
//! ## Validation Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                            │
//! │                                                                   │
//! │  Layer 1: THIS MODULE - field rules, all checks run, one          │
//! │           combined error                                          │
//! │           │                                                       │
//! │           ▼                                                       │
//! │  Layer 2: Service layer (kardex-catalog)                          │
//! │           uniqueness + referential existence against storage      │
//! │           │                                                       │
//! │           ▼                                                       │
//! │  Layer 3: Database (SQLite)                                       │
//! │           NOT NULL + PRIMARY KEY constraints as the backstop      │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity validators accumulate: every rule runs even after one fails,
//! and the error carries one message per violated field.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Brand, Category, Product};

// =============================================================================
// Field Error Accumulator
// =============================================================================

/// Collects field messages across all rules for one entity.
///
/// `finish()` returns `Ok(())` when nothing was collected, otherwise the
/// combined [`ValidationError`].
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        FieldErrors::default()
    }

    /// Requires a non-empty (after trim) string field.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.messages.push(format!("{field} must not be empty"));
        }
    }

    /// Records an arbitrary rule violation.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// True when no rule has failed so far.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the accumulator into a validation result.
    pub fn finish(self) -> ValidationResult<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.messages))
        }
    }
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a category: id and name must be non-empty.
pub fn validate_category(category: &Category) -> ValidationResult<()> {
    let mut errors = FieldErrors::new();
    errors.require("category id", &category.id);
    errors.require("name", &category.name);
    errors.finish()
}

/// Validates a brand: id and name must be non-empty.
pub fn validate_brand(brand: &Brand) -> ValidationResult<()> {
    let mut errors = FieldErrors::new();
    errors.require("brand id", &brand.id);
    errors.require("name", &brand.name);
    errors.finish()
}

/// Validates a product.
///
/// Rules, in order: non-empty id, non-empty name, positive price,
/// non-empty description, non-negative stock, non-empty category
/// reference, non-empty brand reference. Every rule runs; the error
/// carries one message per violated field.
///
/// Whether the referenced category/brand actually exist is a storage
/// question and is checked by the service layer, not here.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    let mut errors = FieldErrors::new();
    errors.require("product id", &product.id);
    errors.require("name", &product.name);
    if product.price <= 0.0 {
        errors.push("price must be greater than zero");
    }
    errors.require("description", &product.description);
    if product.stock < 0 {
        errors.push("stock must not be negative");
    }
    errors.require("category id", &product.category.id);
    errors.require("brand id", &product.brand.id);
    errors.finish()
}

/// Validates a stock-adjustment quantity: must be strictly positive.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::single(
            "quantity must be greater than zero",
        ));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            "prod-1",
            "headset",
            Category::new("cat-1", "peripherals"),
            10,
            "wired headset",
            15.0,
            Brand::new("br-1", "marsgaming"),
        )
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category(&Category::new("cat-1", "peripherals")).is_ok());

        let err = validate_category(&Category::new("", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "category id must not be empty, name must not be empty"
        );
    }

    #[test]
    fn test_validate_brand() {
        assert!(validate_brand(&Brand::new("br-1", "marsgaming")).is_ok());

        let err = validate_brand(&Brand::new("br-1", "   ")).unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn test_validate_product_ok() {
        assert!(validate_product(&sample_product()).is_ok());
    }

    #[test]
    fn test_validate_product_accumulates_every_failure() {
        let product = Product::new(
            "",
            "",
            Category::new("", ""),
            -1,
            "",
            0.0,
            Brand::new("", ""),
        );

        let err = validate_product(&product).unwrap_err();

        // All rules run; one message per violated field, in rule order.
        assert_eq!(
            err.messages,
            vec![
                "product id must not be empty",
                "name must not be empty",
                "price must be greater than zero",
                "description must not be empty",
                "stock must not be negative",
                "category id must not be empty",
                "brand id must not be empty",
            ]
        );
    }

    #[test]
    fn test_validate_product_negative_stock_only() {
        let mut product = sample_product();
        product.stock = -5;

        let err = validate_product(&product).unwrap_err();
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
