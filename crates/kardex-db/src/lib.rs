//! # kardex-db: Storage Layer for the Kardex Catalog
//!
//! SQLite access for the catalog, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Kardex Data Flow                           │
//! │                                                                 │
//! │  Service call (ProductService::insert)                          │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  kardex-db (THIS CRATE)                   │  │
//! │  │                                                           │  │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌─────────────────┐    │  │
//! │  │  │  Database  │  │ Repositories │  │   Migrations    │    │  │
//! │  │  │ (pool.rs)  │◄─│ category.rs  │  │   (embedded)    │    │  │
//! │  │  │ SqlitePool │  │ brand.rs     │  │ 001_initial_    │    │  │
//! │  │  │            │  │ product.rs   │  │ schema.sql      │    │  │
//! │  │  └────────────┘  └──────┬───────┘  └─────────────────┘    │  │
//! │  │                         │                                 │  │
//! │  │                  ┌──────▼───────┐                         │  │
//! │  │                  │  TableSpec   │  statement templates    │  │
//! │  │                  │  (sql.rs)    │  (insert/update/…)      │  │
//! │  │                  └──────────────┘                         │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │                                  │
//! │                              ▼                                  │
//! │                     SQLite database file                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`sql`] - Statement templates per table
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (category, brand, product)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod sql;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};
pub use sql::TableSpec;

// Repository re-exports for convenience
pub use repository::brand::BrandRepository;
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
