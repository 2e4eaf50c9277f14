//! # Brand Repository
//!
//! Database operations for the `MARCA` table. Same shape as the category
//! repository; only the table spec differs.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::sql::TableSpec;
use kardex_core::Brand;

/// Statement templates for the `MARCA` table.
const BRANDS: TableSpec = TableSpec::new("MARCA", "idMarca", &["idMarca", "nombre"]);

/// Maps a `MARCA` row to a [`Brand`].
fn brand_from_row(row: &SqliteRow) -> Result<Brand, sqlx::Error> {
    Ok(Brand {
        id: row.try_get("idMarca")?,
        name: row.try_get("nombre")?,
    })
}

/// Repository for brand database operations.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: SqlitePool,
}

impl BrandRepository {
    /// Creates a new BrandRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BrandRepository { pool }
    }

    /// Inserts a new brand row.
    pub async fn insert(&self, brand: &Brand) -> StoreResult<()> {
        debug!(id = %brand.id, "inserting brand");

        sqlx::query(&BRANDS.insert())
            .bind(&brand.id)
            .bind(&brand.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Overwrites every column of an existing row.
    ///
    /// Returns the number of rows affected (0 when the id doesn't exist).
    pub async fn update(&self, brand: &Brand) -> StoreResult<u64> {
        debug!(id = %brand.id, "updating brand");

        let result = sqlx::query(&BRANDS.update_by_key())
            .bind(&brand.id)
            .bind(&brand.name)
            .bind(&brand.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a row by id. Returns the number of rows affected.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        debug!(id = %id, "deleting brand");

        let result = sqlx::query(&BRANDS.delete_by_key())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Looks a brand up by id. Returns `Ok(None)` when no row matches.
    pub async fn find(&self, id: &str) -> StoreResult<Option<Brand>> {
        let row = sqlx::query(&BRANDS.select_by_key())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(brand_from_row)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Lists brands (capped by the statement's row limit).
    pub async fn list(&self) -> StoreResult<Vec<Brand>> {
        let rows = sqlx::query(&BRANDS.select_all())
            .fetch_all(&self.pool)
            .await?;

        let brands = rows
            .iter()
            .map(brand_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = brands.len(), "listed brands");
        Ok(brands)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
