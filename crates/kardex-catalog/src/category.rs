//! # Category Service
//!
//! Business rules for categories: validate → existence check → persist.

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use kardex_core::validation::validate_category;
use kardex_core::Category;
use kardex_db::{CategoryRepository, Database, ProductRepository};

/// Service for category operations.
///
/// Holds the category repository plus the product repository for the
/// referential guard on deletion.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: CategoryRepository,
    products: ProductRepository,
}

impl CategoryService {
    /// Creates a new CategoryService over the given database.
    pub fn new(db: &Database) -> Self {
        CategoryService {
            categories: db.categories(),
            products: db.products(),
        }
    }

    /// Inserts a new category.
    ///
    /// Fails with [`CatalogError::Validation`] on bad fields and
    /// [`CatalogError::AlreadyExists`] when the id is taken.
    pub async fn insert(&self, category: &Category) -> CatalogResult<()> {
        debug!(id = %category.id, "insert category");

        validate_category(category)?;

        if self.categories.find(&category.id).await?.is_some() {
            return Err(CatalogError::already_exists("category", &category.id));
        }

        self.categories.insert(category).await?;
        Ok(())
    }

    /// Deletes a category by id.
    ///
    /// Fails with [`CatalogError::NotFound`] when absent and
    /// [`CatalogError::StillReferenced`] while products reference the id.
    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        debug!(id = %id, "delete category");

        if self.categories.find(id).await?.is_none() {
            return Err(CatalogError::missing("category", id));
        }

        if self.products.count_by_category(id).await? > 0 {
            return Err(CatalogError::still_referenced("category", id));
        }

        self.categories.delete(id).await?;
        Ok(())
    }

    /// Finds a category by id.
    ///
    /// Absence is [`CatalogError::NotFound`]; callers that treat absence
    /// as normal match on the variant.
    pub async fn find(&self, id: &str) -> CatalogResult<Category> {
        self.categories
            .find(id)
            .await?
            .ok_or_else(|| CatalogError::missing("category", id))
    }

    /// Overwrites an existing category.
    ///
    /// Fails with [`CatalogError::Validation`] on bad fields and
    /// [`CatalogError::NotFound`] when no row has the id.
    pub async fn modify(&self, category: &Category) -> CatalogResult<()> {
        debug!(id = %category.id, "modify category");

        validate_category(category)?;

        if self.categories.find(&category.id).await?.is_none() {
            return Err(CatalogError::missing("category", &category.id));
        }

        self.categories.update(category).await?;
        Ok(())
    }

    /// Lists categories (at most the listing cap).
    pub async fn list(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_db::DbConfig;

    async fn service() -> CategoryService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CategoryService::new(&db)
    }

    #[tokio::test]
    async fn test_insert_then_find_returns_equal_entity() {
        let service = service().await;
        let category = Category::new("cat-1", "peripherals");

        service.insert(&category).await.unwrap();
        let found = service.find("cat-1").await.unwrap();

        assert_eq!(found, category);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_conflicts() {
        let service = service().await;
        let category = Category::new("cat-1", "peripherals");
        service.insert(&category).await.unwrap();

        let err = service.insert(&category).await.unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists { .. }));
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_insert_invalid_fields_accumulate() {
        let service = service().await;

        let err = service
            .insert(&Category::new("", ""))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "category id must not be empty, name must not be empty"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = service().await;

        let err = service.delete("ghost").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_modify_overwrites() {
        let service = service().await;
        service
            .insert(&Category::new("cat-1", "peripherals"))
            .await
            .unwrap();

        service
            .modify(&Category::new("cat-1", "accessories"))
            .await
            .unwrap();

        assert_eq!(service.find("cat-1").await.unwrap().name, "accessories");
    }

    #[tokio::test]
    async fn test_modify_missing_is_not_found() {
        let service = service().await;

        let err = service
            .modify(&Category::new("ghost", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list() {
        let service = service().await;
        service
            .insert(&Category::new("cat-1", "peripherals"))
            .await
            .unwrap();
        service
            .insert(&Category::new("cat-2", "storage"))
            .await
            .unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
    }
}
