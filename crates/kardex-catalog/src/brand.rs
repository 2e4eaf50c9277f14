//! # Brand Service
//!
//! Business rules for brands. Same contract as the category service with
//! brand-specific messages.

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use kardex_core::validation::validate_brand;
use kardex_core::Brand;
use kardex_db::{BrandRepository, Database, ProductRepository};

/// Service for brand operations.
#[derive(Debug, Clone)]
pub struct BrandService {
    brands: BrandRepository,
    products: ProductRepository,
}

impl BrandService {
    /// Creates a new BrandService over the given database.
    pub fn new(db: &Database) -> Self {
        BrandService {
            brands: db.brands(),
            products: db.products(),
        }
    }

    /// Inserts a new brand.
    pub async fn insert(&self, brand: &Brand) -> CatalogResult<()> {
        debug!(id = %brand.id, "insert brand");

        validate_brand(brand)?;

        if self.brands.find(&brand.id).await?.is_some() {
            return Err(CatalogError::already_exists("brand", &brand.id));
        }

        self.brands.insert(brand).await?;
        Ok(())
    }

    /// Deletes a brand by id.
    ///
    /// Blocked with [`CatalogError::StillReferenced`] while products
    /// reference the id.
    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        debug!(id = %id, "delete brand");

        if self.brands.find(id).await?.is_none() {
            return Err(CatalogError::missing("brand", id));
        }

        if self.products.count_by_brand(id).await? > 0 {
            return Err(CatalogError::still_referenced("brand", id));
        }

        self.brands.delete(id).await?;
        Ok(())
    }

    /// Finds a brand by id; absence is [`CatalogError::NotFound`].
    pub async fn find(&self, id: &str) -> CatalogResult<Brand> {
        self.brands
            .find(id)
            .await?
            .ok_or_else(|| CatalogError::missing("brand", id))
    }

    /// Overwrites an existing brand.
    pub async fn modify(&self, brand: &Brand) -> CatalogResult<()> {
        debug!(id = %brand.id, "modify brand");

        validate_brand(brand)?;

        if self.brands.find(&brand.id).await?.is_none() {
            return Err(CatalogError::missing("brand", &brand.id));
        }

        self.brands.update(brand).await?;
        Ok(())
    }

    /// Lists brands (at most the listing cap).
    pub async fn list(&self) -> CatalogResult<Vec<Brand>> {
        Ok(self.brands.list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_db::DbConfig;

    async fn service() -> BrandService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        BrandService::new(&db)
    }

    #[tokio::test]
    async fn test_insert_then_find_returns_equal_entity() {
        let service = service().await;
        let brand = Brand::new("br-1", "marsgaming");

        service.insert(&brand).await.unwrap();
        assert_eq!(service.find("br-1").await.unwrap(), brand);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_conflicts() {
        let service = service().await;
        let brand = Brand::new("br-1", "marsgaming");
        service.insert(&brand).await.unwrap();

        let err = service.insert(&brand).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_insert_empty_name_is_rejected() {
        let service = service().await;

        let err = service.insert(&Brand::new("br-1", "")).await.unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[tokio::test]
    async fn test_delete_and_modify_missing_are_not_found() {
        let service = service().await;

        let err = service.delete("ghost").await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        let err = service
            .modify(&Brand::new("ghost", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list() {
        let service = service().await;
        service.insert(&Brand::new("br-1", "marsgaming")).await.unwrap();
        service.insert(&Brand::new("br-2", "corsair")).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
    }
}
