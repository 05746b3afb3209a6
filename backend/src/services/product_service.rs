//! Product catalog business logic.
//!
//! Admin CRUD plus the filtered listing and keyword search exposed to the
//! storefront.

use crate::api::common::{PaginationMeta, validation_errors_to_service_error};
use crate::api::product::models::ProductFilter;
use crate::database::models::{CreateProduct, Product};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::product_repository::ProductRepository;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

pub struct ProductService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ProductService<'a> {
    /// Creates a new ProductService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a product to the catalog (admin).
    pub async fn create_product(&self, create_product: CreateProduct) -> ServiceResult<Product> {
        if let Err(validation_errors) = create_product.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = ProductRepository::new(self.pool);
        let product = repo
            .create_product(Uuid::now_v7().to_string(), create_product)
            .await?;

        Ok(product)
    }

    /// Overwrites a product's editable fields (admin).
    pub async fn update_product(
        &self,
        id: &str,
        create_product: CreateProduct,
    ) -> ServiceResult<Product> {
        if let Err(validation_errors) = create_product.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = ProductRepository::new(self.pool);
        repo.update_product(id, create_product)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    /// Removes a product from the catalog (admin).
    pub async fn delete_product(&self, id: &str) -> ServiceResult<()> {
        let repo = ProductRepository::new(self.pool);

        if !repo.delete_product(id).await? {
            return Err(ServiceError::not_found("Product", id));
        }

        Ok(())
    }

    /// Retrieves a product with existence verification.
    pub async fn get_product_required(&self, id: &str) -> ServiceResult<Product> {
        let repo = ProductRepository::new(self.pool);

        repo.get_product_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    /// Lists every product (admin view).
    pub async fn list_all(&self) -> ServiceResult<Vec<Product>> {
        let repo = ProductRepository::new(self.pool);
        Ok(repo.list_all().await?)
    }

    /// Lists products matching the storefront filter.
    pub async fn list_filtered(
        &self,
        filter: &ProductFilter,
    ) -> ServiceResult<(Vec<Product>, PaginationMeta)> {
        if let Err(validation_errors) = filter.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = ProductRepository::new(self.pool);
        let (products, total) = repo.list_filtered(filter).await?;

        let pagination = filter.pagination();
        let meta = PaginationMeta::new(pagination.page(), pagination.per_page(), total);

        Ok((products, meta))
    }

    /// Keyword search across the catalog.
    pub async fn search(&self, keyword: &str) -> ServiceResult<Vec<Product>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ServiceError::validation("Search keyword is required"));
        }

        let repo = ProductRepository::new(self.pool);
        Ok(repo.search(keyword).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::product::models::SortBy;
    use crate::database::test_pool;

    fn shirt(title: &str, category: &str, brand: &str, price: f64) -> CreateProduct {
        CreateProduct {
            image: None,
            title: title.to_string(),
            description: "A fine garment".to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price,
            sale_price: None,
            total_stock: 10,
        }
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        let pool = test_pool().await;
        let service = ProductService::new(&pool);

        let created = service
            .create_product(shirt("Tee", "men", "acme", 19.99))
            .await
            .unwrap();
        assert_eq!(created.average_review, 0.0);

        let mut edit = shirt("Tee v2", "men", "acme", 17.99);
        edit.sale_price = Some(9.99);
        let updated = service.update_product(&created.id, edit).await.unwrap();
        assert_eq!(updated.title, "Tee v2");
        assert_eq!(updated.effective_price(), 9.99);

        service.delete_product(&created.id).await.unwrap();
        let err = service.get_product_required(&created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn filtered_listing_respects_category_and_sort() {
        let pool = test_pool().await;
        let service = ProductService::new(&pool);

        service
            .create_product(shirt("Cheap tee", "men", "acme", 5.0))
            .await
            .unwrap();
        service
            .create_product(shirt("Pricey tee", "men", "acme", 50.0))
            .await
            .unwrap();
        service
            .create_product(shirt("Dress", "women", "bloom", 30.0))
            .await
            .unwrap();

        let filter = ProductFilter {
            category: Some(vec!["men".to_string()]),
            brand: None,
            sort_by: Some(SortBy::PriceHighToLow),
            page: None,
            per_page: None,
        };
        let (products, meta) = service.list_filtered(&filter).await.unwrap();

        assert_eq!(meta.total_items, 2);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Pricey tee");
        assert!(products.iter().all(|p| p.category == "men"));
    }

    #[tokio::test]
    async fn search_matches_title_and_brand() {
        let pool = test_pool().await;
        let service = ProductService::new(&pool);

        service
            .create_product(shirt("Canvas shoe", "footwear", "acme", 25.0))
            .await
            .unwrap();
        service
            .create_product(shirt("Dress", "women", "canvasco", 30.0))
            .await
            .unwrap();

        let hits = service.search("canvas").await.unwrap();
        assert_eq!(hits.len(), 2);

        assert!(service.search("  ").await.is_err());
    }
}
