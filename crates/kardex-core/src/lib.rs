//! # kardex-core: Pure Domain Logic for the Kardex Catalog
//!
//! This crate holds the catalog's domain types and validation rules as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Kardex Architecture                        │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │              kardex-catalog (Service Layer)               │  │
//! │  │   CategoryService ── BrandService ── ProductService       │  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │                                │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │              ★ kardex-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │    ┌───────────┐   ┌────────────┐   ┌───────────┐         │  │
//! │  │    │   types   │   │ validation │   │   error   │         │  │
//! │  │    │ Category  │   │   rules    │   │Validation │         │  │
//! │  │    │ Brand     │   │   checks   │   │  Error    │         │  │
//! │  │    │ Product   │   └────────────┘   └───────────┘         │  │
//! │  │    └───────────┘                                          │  │
//! │  │                                                           │  │
//! │  │    NO I/O • NO DATABASE • PURE FUNCTIONS                  │  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │                                │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │               kardex-db (Storage Layer)                   │  │
//! │  │          SQLite pool, migrations, repositories            │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Brand, Product)
//! - [`error`] - Validation error type
//! - [`validation`] - Field-level validation rules

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::{Brand, Category, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of rows any listing query returns.
///
/// A deliberate, fixed cap: catalog listings are bounded at 30 rows and
/// callers page by narrowing the filter instead.
pub const MAX_LISTING_ROWS: usize = 30;
