//! # Statement Templates
//!
//! Stateless SQL statement templating per table.
//!
//! A [`TableSpec`] is a const configuration value (table name, key column,
//! ordered column list) owned by each repository. From it the repository
//! derives every statement shape it needs; the value itself holds no
//! connection and no state.
//!
//! Listing statements carry a hard `LIMIT` of [`MAX_LISTING_ROWS`] rows.

use std::fmt::Write;

use kardex_core::MAX_LISTING_ROWS;

/// Table description a repository builds its statements from.
///
/// ## Usage
/// ```rust
/// use kardex_db::TableSpec;
///
/// const CATEGORIES: TableSpec = TableSpec::new(
///     "CATEGORIA",
///     "idCategoria",
///     &["idCategoria", "nombre"],
/// );
///
/// assert_eq!(
///     CATEGORIES.insert(),
///     "INSERT INTO CATEGORIA (idCategoria, nombre) VALUES (?1, ?2)"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Table name.
    pub table: &'static str,

    /// Key column used by the by-key statements.
    pub key: &'static str,

    /// Every column, in binding order. Must include `key`.
    pub columns: &'static [&'static str],
}

impl TableSpec {
    /// Creates a table spec.
    pub const fn new(
        table: &'static str,
        key: &'static str,
        columns: &'static [&'static str],
    ) -> Self {
        TableSpec {
            table,
            key,
            columns,
        }
    }

    /// `INSERT INTO t (c1, c2, …) VALUES (?1, ?2, …)`
    pub fn insert(&self) -> String {
        let mut placeholders = String::new();
        for i in 1..=self.columns.len() {
            if i > 1 {
                placeholders.push_str(", ");
            }
            // write! into a String cannot fail
            let _ = write!(placeholders, "?{i}");
        }
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders
        )
    }

    /// `UPDATE t SET c1 = ?1, c2 = ?2, … WHERE key = ?n+1`
    ///
    /// Overwrites every column; bind all column values in order, then the
    /// key value last.
    pub fn update_by_key(&self) -> String {
        let mut assignments = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                assignments.push_str(", ");
            }
            let _ = write!(assignments, "{column} = ?{}", i + 1);
        }
        format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            self.table,
            assignments,
            self.key,
            self.columns.len() + 1
        )
    }

    /// `DELETE FROM t WHERE key = ?1`
    pub fn delete_by_key(&self) -> String {
        format!("DELETE FROM {} WHERE {} = ?1", self.table, self.key)
    }

    /// `SELECT c1, c2, … FROM t WHERE key = ?1`
    pub fn select_by_key(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            self.columns.join(", "),
            self.table,
            self.key
        )
    }

    /// `SELECT c1, c2, … FROM t LIMIT 30`
    pub fn select_all(&self) -> String {
        format!(
            "SELECT {} FROM {} LIMIT {}",
            self.columns.join(", "),
            self.table,
            MAX_LISTING_ROWS
        )
    }

    /// `SELECT c1, c2, … FROM t WHERE col = ?1 LIMIT 30`
    pub fn select_where_eq(&self, column: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = ?1 LIMIT {}",
            self.columns.join(", "),
            self.table,
            column,
            MAX_LISTING_ROWS
        )
    }

    /// `SELECT c1, c2, … FROM t WHERE col LIKE ?1 LIMIT 30`
    ///
    /// The caller binds the pattern (e.g. `%substring%`).
    pub fn select_where_like(&self, column: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} LIKE ?1 LIMIT {}",
            self.columns.join(", "),
            self.table,
            column,
            MAX_LISTING_ROWS
        )
    }

    /// `SELECT COUNT(*) FROM t WHERE col = ?1`
    pub fn count_where_eq(&self, column: &str) -> String {
        format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?1",
            self.table, column
        )
    }

    /// `SELECT COUNT(*) FROM t`
    pub fn count_all(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.table)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
