//! # Category Repository
//!
//! Database operations for the `CATEGORIA` table.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::sql::TableSpec;
use kardex_core::Category;

/// Statement templates for the `CATEGORIA` table.
const CATEGORIES: TableSpec =
    TableSpec::new("CATEGORIA", "idCategoria", &["idCategoria", "nombre"]);

/// Maps a `CATEGORIA` row to a [`Category`].
fn category_from_row(row: &SqliteRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get("idCategoria")?,
        name: row.try_get("nombre")?,
    })
}

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Inserts a new category row.
    pub async fn insert(&self, category: &Category) -> StoreResult<()> {
        debug!(id = %category.id, "inserting category");

        sqlx::query(&CATEGORIES.insert())
            .bind(&category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Overwrites every column of an existing row.
    ///
    /// Returns the number of rows affected (0 when the id doesn't exist).
    pub async fn update(&self, category: &Category) -> StoreResult<u64> {
        debug!(id = %category.id, "updating category");

        let result = sqlx::query(&CATEGORIES.update_by_key())
            .bind(&category.id)
            .bind(&category.name)
            .bind(&category.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a row by id. Returns the number of rows affected.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        debug!(id = %id, "deleting category");

        let result = sqlx::query(&CATEGORIES.delete_by_key())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Looks a category up by id.
    ///
    /// Returns `Ok(None)` when no row matches; storage failures are the
    /// only error case.
    pub async fn find(&self, id: &str) -> StoreResult<Option<Category>> {
        let row = sqlx::query(&CATEGORIES.select_by_key())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(category_from_row)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Lists categories (capped by the statement's row limit).
    pub async fn list(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query(&CATEGORIES.select_all())
            .fetch_all(&self.pool)
            .await?;

        let categories = rows
            .iter()
            .map(category_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = categories.len(), "listed categories");
        Ok(categories)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
