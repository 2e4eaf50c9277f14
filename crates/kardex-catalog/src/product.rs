//! # Product Service
//!
//! Business rules for products: validation, uniqueness, referential
//! existence checks against categories and brands, filtered listings, and
//! stock adjustment.
//!
//! ## Insert Flow
//! ```text
//! insert(product)
//!      │
//!      ├── validate fields (all rules run, one combined error)
//!      ├── id already taken?            → AlreadyExists
//!      ├── referenced category exists?  → NotFound("category") if not
//!      ├── referenced brand exists?     → NotFound("brand") if not
//!      ▼
//! persist denormalized row
//! ```

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use kardex_core::validation::{validate_product, validate_quantity};
use kardex_core::{Product, ValidationError};
use kardex_db::{BrandRepository, CategoryRepository, Database, ProductRepository};

/// Service for product operations.
///
/// Composes the category and brand repositories for the referential
/// existence checks on insert/modify.
#[derive(Debug, Clone)]
pub struct ProductService {
    products: ProductRepository,
    categories: CategoryRepository,
    brands: BrandRepository,
}

impl ProductService {
    /// Creates a new ProductService over the given database.
    pub fn new(db: &Database) -> Self {
        ProductService {
            products: db.products(),
            categories: db.categories(),
            brands: db.brands(),
        }
    }

    /// Checks that the product's category and brand rows exist.
    async fn check_references(&self, product: &Product) -> CatalogResult<()> {
        if self.categories.find(&product.category.id).await?.is_none() {
            return Err(CatalogError::missing("category", &product.category.id));
        }
        if self.brands.find(&product.brand.id).await?.is_none() {
            return Err(CatalogError::missing("brand", &product.brand.id));
        }
        Ok(())
    }

    /// Inserts a new product.
    ///
    /// The category and brand name fields are persisted verbatim
    /// alongside the row (denormalized); only the referenced ids are
    /// checked for existence.
    pub async fn insert(&self, product: &Product) -> CatalogResult<()> {
        debug!(id = %product.id, "insert product");

        validate_product(product)?;

        if self.products.find(&product.id).await?.is_some() {
            return Err(CatalogError::already_exists("product", &product.id));
        }

        self.check_references(product).await?;

        self.products.insert(product).await?;
        Ok(())
    }

    /// Deletes a product by id.
    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        debug!(id = %id, "delete product");

        if self.products.find(id).await?.is_none() {
            return Err(CatalogError::missing("product", id));
        }

        self.products.delete(id).await?;
        Ok(())
    }

    /// Finds a product by id; absence is [`CatalogError::NotFound`].
    pub async fn find(&self, id: &str) -> CatalogResult<Product> {
        self.products
            .find(id)
            .await?
            .ok_or_else(|| CatalogError::missing("product", id))
    }

    /// Overwrites an existing product.
    ///
    /// Re-runs the referential existence checks: a modify can repoint the
    /// product at a different category or brand.
    pub async fn modify(&self, product: &Product) -> CatalogResult<()> {
        debug!(id = %product.id, "modify product");

        validate_product(product)?;

        if self.products.find(&product.id).await?.is_none() {
            return Err(CatalogError::missing("product", &product.id));
        }

        self.check_references(product).await?;

        self.products.update(product).await?;
        Ok(())
    }

    /// Lists products (at most the listing cap).
    ///
    /// An empty catalog is [`CatalogError::EmptyListing`].
    pub async fn list(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.list().await?;

        if products.is_empty() {
            return Err(CatalogError::EmptyListing);
        }
        Ok(products)
    }

    /// Lists products in the given category.
    ///
    /// An empty result is [`CatalogError::NoMatches`].
    pub async fn list_by_category(&self, category_id: &str) -> CatalogResult<Vec<Product>> {
        let products = self.products.list_by_category(category_id).await?;

        if products.is_empty() {
            return Err(CatalogError::no_matches("category", category_id));
        }
        Ok(products)
    }

    /// Lists products of the given brand.
    pub async fn list_by_brand(&self, brand_id: &str) -> CatalogResult<Vec<Product>> {
        let products = self.products.list_by_brand(brand_id).await?;

        if products.is_empty() {
            return Err(CatalogError::no_matches("brand", brand_id));
        }
        Ok(products)
    }

    /// Lists products whose name contains the given substring.
    pub async fn list_by_name(&self, name: &str) -> CatalogResult<Vec<Product>> {
        let products = self.products.list_by_name(name).await?;

        if products.is_empty() {
            return Err(CatalogError::no_matches("name", name));
        }
        Ok(products)
    }

    /// Reduces a product's stock by `quantity` units.
    ///
    /// Fails with [`CatalogError::Validation`] when `quantity <= 0` or
    /// when the product holds fewer than `quantity` units (the stored
    /// stock is left untouched), and [`CatalogError::NotFound`] when the
    /// id is absent.
    pub async fn reduce_stock(&self, id: &str, quantity: i64) -> CatalogResult<()> {
        debug!(id = %id, quantity = %quantity, "reduce stock");

        validate_quantity(quantity)?;

        let mut product = self.find(id).await?;

        let new_stock = product.stock - quantity;
        if new_stock < 0 {
            return Err(ValidationError::single(format!(
                "insufficient stock for product '{id}': available {}, requested {quantity}",
                product.stock
            ))
            .into());
        }

        product.stock = new_stock;
        self.modify(&product).await
    }

    /// Increases a product's stock by `quantity` units. No upper bound.
    pub async fn increase_stock(&self, id: &str, quantity: i64) -> CatalogResult<()> {
        debug!(id = %id, quantity = %quantity, "increase stock");

        validate_quantity(quantity)?;

        let mut product = self.find(id).await?;
        product.stock += quantity;

        self.modify(&product).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_core::{Brand, Category};
    use kardex_db::DbConfig;

    struct Fixture {
        service: ProductService,
        category: Category,
        brand: Brand,
    }

    /// In-memory database with one category and one brand already stored.
    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let category = Category::new("cat-1", "peripherals");
        let brand = Brand::new("br-1", "marsgaming");
        db.categories().insert(&category).await.unwrap();
        db.brands().insert(&brand).await.unwrap();

        Fixture {
            service: ProductService::new(&db),
            category,
            brand,
        }
    }

    fn product(fixture: &Fixture, id: &str, name: &str, stock: i64) -> Product {
        Product::new(
            id,
            name,
            fixture.category.clone(),
            stock,
            "wired headset",
            15.0,
            fixture.brand.clone(),
        )
    }

    #[tokio::test]
    async fn test_insert_then_find_returns_equal_entity() {
        let fx = fixture().await;
        let product = product(&fx, "prod-1", "headset", 10);

        fx.service.insert(&product).await.unwrap();
        assert_eq!(fx.service.find("prod-1").await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_conflicts() {
        let fx = fixture().await;
        let product = product(&fx, "prod-1", "headset", 10);
        fx.service.insert(&product).await.unwrap();

        let err = fx.service.insert(&product).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_insert_with_unknown_category_is_rejected() {
        let fx = fixture().await;
        let mut product = product(&fx, "prod-1", "headset", 10);
        product.category = Category::new("ghost", "nowhere");

        let err = fx.service.insert(&product).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                entity: "category",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_insert_with_unknown_brand_is_rejected() {
        let fx = fixture().await;
        let mut product = product(&fx, "prod-1", "headset", 10);
        product.brand = Brand::new("ghost", "nowhere");

        let err = fx.service.insert(&product).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound { entity: "brand", .. }
        ));
    }

    #[tokio::test]
    async fn test_insert_invalid_product_reports_every_field() {
        let fx = fixture().await;
        let broken = Product::new(
            "",
            "",
            Category::new("", ""),
            -1,
            "",
            0.0,
            Brand::new("", ""),
        );

        let err = fx.service.insert(&broken).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("product id must not be empty"));
        assert!(message.contains("price must be greater than zero"));
        assert!(message.contains("stock must not be negative"));
    }

    #[tokio::test]
    async fn test_modify_missing_is_not_found() {
        let fx = fixture().await;
        let ghost = product(&fx, "ghost", "headset", 10);

        let err = fx.service.modify(&ghost).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_delete() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "headset", 10))
            .await
            .unwrap();

        fx.service.delete("prod-1").await.unwrap();

        let err = fx.service.find("prod-1").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_filtered_listings_and_no_matches() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "gaming headset", 10))
            .await
            .unwrap();

        let by_category = fx.service.list_by_category("cat-1").await.unwrap();
        assert_eq!(by_category.len(), 1);

        let by_brand = fx.service.list_by_brand("br-1").await.unwrap();
        assert_eq!(by_brand.len(), 1);

        let by_name = fx.service.list_by_name("headset").await.unwrap();
        assert_eq!(by_name.len(), 1);

        let err = fx.service.list_by_category("ghost").await.unwrap_err();
        assert!(matches!(err, CatalogError::NoMatches { .. }));
        assert!(err.to_string().contains("no products"));

        let err = fx.service.list_by_name("webcam").await.unwrap_err();
        assert!(matches!(err, CatalogError::NoMatches { .. }));
    }

    #[tokio::test]
    async fn test_list_empty_catalog_errors() {
        let fx = fixture().await;

        let err = fx.service.list().await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyListing));
    }

    #[tokio::test]
    async fn test_reduce_stock() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "headset", 10))
            .await
            .unwrap();

        fx.service.reduce_stock("prod-1", 4).await.unwrap();
        assert_eq!(fx.service.find("prod-1").await.unwrap().stock, 6);
    }

    #[tokio::test]
    async fn test_reduce_stock_insufficient_leaves_stock_unchanged() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "headset", 5))
            .await
            .unwrap();

        let err = fx.service.reduce_stock("prod-1", 100).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("insufficient stock"));

        assert_eq!(fx.service.find("prod-1").await.unwrap().stock, 5);
    }

    #[tokio::test]
    async fn test_stock_quantity_must_be_positive() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "headset", 5))
            .await
            .unwrap();

        let err = fx.service.reduce_stock("prod-1", 0).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = fx.service.increase_stock("prod-1", -2).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        // Stock untouched by either rejected call
        assert_eq!(fx.service.find("prod-1").await.unwrap().stock, 5);
    }

    #[tokio::test]
    async fn test_increase_stock() {
        let fx = fixture().await;
        fx.service
            .insert(&product(&fx, "prod-1", "headset", 5))
            .await
            .unwrap();

        fx.service.increase_stock("prod-1", 7).await.unwrap();
        assert_eq!(fx.service.find("prod-1").await.unwrap().stock, 12);
    }

    #[tokio::test]
    async fn test_stock_ops_on_missing_product() {
        let fx = fixture().await;

        let err = fx.service.reduce_stock("ghost", 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));

        let err = fx.service.increase_stock("ghost", 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }
}
