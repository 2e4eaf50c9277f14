//! # Repository Module
//!
//! Row-level CRUD for the catalog tables, one repository per entity.
//!
//! ## Repository Pattern
//! ```text
//! Service layer (kardex-catalog)
//!      │
//!      │  db.products().find("prod-1")
//!      ▼
//! ProductRepository
//!      │  statement from TableSpec + parameter binds
//!      ▼
//! SQLite database
//! ```
//!
//! Repositories translate rows to entities and back, nothing more. A
//! by-key `find` returns `Option` — absence is a domain question the
//! service layer answers, not a storage error. Every listing query is
//! capped at [`kardex_core::MAX_LISTING_ROWS`] rows by its statement.
//!
//! ## Available Repositories
//!
//! - [`category::CategoryRepository`]
//! - [`brand::BrandRepository`]
//! - [`product::ProductRepository`]

pub mod brand;
pub mod category;
pub mod product;
