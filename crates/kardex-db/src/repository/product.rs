//! # Product Repository
//!
//! Database operations for the `PRODUCTO` table.
//!
//! ## Denormalized Row Shape
//! ```text
//! PRODUCTO
//! ├── idProducto, nombre, stock, descripcion, precio
//! ├── idCategoria, nombreCategoria   ← category copied into the row
//! └── idMarca, nombreMarca           ← brand copied into the row
//! ```
//!
//! A single row read rebuilds the complete [`Product`], including its
//! category and brand, without joins. The filter queries (by category id,
//! by brand id, by name substring) are plain indexed scans capped at the
//! listing limit.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::sql::TableSpec;
use kardex_core::{Brand, Category, Product};

/// Statement templates for the `PRODUCTO` table.
const PRODUCTS: TableSpec = TableSpec::new(
    "PRODUCTO",
    "idProducto",
    &[
        "idProducto",
        "nombre",
        "idCategoria",
        "nombreCategoria",
        "stock",
        "descripcion",
        "precio",
        "idMarca",
        "nombreMarca",
    ],
);

/// Maps a `PRODUCTO` row to a [`Product`].
fn product_from_row(row: &SqliteRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("idProducto")?,
        name: row.try_get("nombre")?,
        category: Category {
            id: row.try_get("idCategoria")?,
            name: row.try_get("nombreCategoria")?,
        },
        stock: row.try_get("stock")?,
        description: row.try_get("descripcion")?,
        price: row.try_get("precio")?,
        brand: Brand {
            id: row.try_get("idMarca")?,
            name: row.try_get("nombreMarca")?,
        },
    })
}

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product row (category and brand stored denormalized).
    pub async fn insert(&self, product: &Product) -> StoreResult<()> {
        debug!(id = %product.id, "inserting product");

        sqlx::query(&PRODUCTS.insert())
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.category.id)
            .bind(&product.category.name)
            .bind(product.stock)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.brand.id)
            .bind(&product.brand.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Overwrites every column of an existing row.
    ///
    /// Returns the number of rows affected (0 when the id doesn't exist).
    pub async fn update(&self, product: &Product) -> StoreResult<u64> {
        debug!(id = %product.id, "updating product");

        // Column values in table order, then the key.
        let result = sqlx::query(&PRODUCTS.update_by_key())
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.category.id)
            .bind(&product.category.name)
            .bind(product.stock)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.brand.id)
            .bind(&product.brand.name)
            .bind(&product.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a row by id. Returns the number of rows affected.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        debug!(id = %id, "deleting product");

        let result = sqlx::query(&PRODUCTS.delete_by_key())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Looks a product up by id. Returns `Ok(None)` when no row matches.
    pub async fn find(&self, id: &str) -> StoreResult<Option<Product>> {
        let row = sqlx::query(&PRODUCTS.select_by_key())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(product_from_row)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Lists products (capped by the statement's row limit).
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(&PRODUCTS.select_all())
            .fetch_all(&self.pool)
            .await?;

        Self::collect(rows)
    }

    /// Lists products referencing the given category id.
    pub async fn list_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>> {
        debug!(category_id = %category_id, "listing products by category");

        let sql = PRODUCTS.select_where_eq("idCategoria");
        let rows = sqlx::query(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Self::collect(rows)
    }

    /// Lists products referencing the given brand id.
    pub async fn list_by_brand(&self, brand_id: &str) -> StoreResult<Vec<Product>> {
        debug!(brand_id = %brand_id, "listing products by brand");

        let sql = PRODUCTS.select_where_eq("idMarca");
        let rows = sqlx::query(&sql)
            .bind(brand_id)
            .fetch_all(&self.pool)
            .await?;

        Self::collect(rows)
    }

    /// Lists products whose name contains the given substring.
    ///
    /// Substring semantics come from SQLite `LIKE` with a `%…%` pattern.
    pub async fn list_by_name(&self, name: &str) -> StoreResult<Vec<Product>> {
        debug!(name = %name, "listing products by name");

        let sql = PRODUCTS.select_where_like("nombre");
        let pattern = format!("%{name}%");
        let rows = sqlx::query(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Self::collect(rows)
    }

    /// Counts all product rows.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(&PRODUCTS.count_all())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts product rows referencing the given category id.
    pub async fn count_by_category(&self, category_id: &str) -> StoreResult<i64> {
        let sql = PRODUCTS.count_where_eq("idCategoria");
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts product rows referencing the given brand id.
    pub async fn count_by_brand(&self, brand_id: &str) -> StoreResult<i64> {
        let sql = PRODUCTS.count_where_eq("idMarca");
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(brand_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn collect(rows: Vec<SqliteRow>) -> StoreResult<Vec<Product>> {
        rows.iter()
            .map(product_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::from)
    }
}

/// Generates a fresh product id (UUID v4).
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
