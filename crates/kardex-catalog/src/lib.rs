//! # kardex-catalog: Service Layer for the Kardex Catalog
//!
//! The controller slices of the catalog: one service per entity, each
//! composing field validation (kardex-core) with row-level storage
//! (kardex-db).
//!
//! ## The Three Slices
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  kardex-catalog (THIS CRATE)                    │
//! │                                                                 │
//! │  CategoryService        BrandService        ProductService      │
//! │  ├── insert             ├── insert          ├── insert          │
//! │  ├── delete             ├── delete          ├── delete          │
//! │  ├── find               ├── find            ├── find            │
//! │  ├── modify             ├── modify          ├── modify          │
//! │  └── list               └── list            ├── list            │
//! │                                             ├── list_by_*      │
//! │                                             ├── reduce_stock    │
//! │                                             └── increase_stock  │
//! │                                                                 │
//! │  Every call: validate → existence checks → repository call,     │
//! │  returning the tagged CatalogError on any rule violation.       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate is the integration surface for presentation layers; none
//! ship in this workspace.
//!
//! ## Usage
//! ```rust,ignore
//! use kardex_catalog::{CategoryService, ProductService};
//! use kardex_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./kardex.db")).await?;
//! let products = ProductService::new(&db);
//!
//! products.reduce_stock("prod-1", 2).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod brand;
pub mod category;
pub mod error;
pub mod product;

// =============================================================================
// Re-exports
// =============================================================================

pub use brand::BrandService;
pub use category::CategoryService;
pub use error::{CatalogError, CatalogResult};
pub use product::ProductService;
