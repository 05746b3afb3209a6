//! Shopping-cart business logic.

use crate::database::models::CartItemDetail;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::cart_repository::CartRepository;
use crate::repositories::product_repository::ProductRepository;
use sqlx::SqlitePool;

pub struct CartService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> CartService<'a> {
    /// Creates a new CartService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a product to the user's cart, accumulating quantity for repeat
    /// adds. Rejects unknown products and quantities beyond stock.
    pub async fn add_to_cart(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> ServiceResult<Vec<CartItemDetail>> {
        if quantity < 1 {
            return Err(ServiceError::validation("Quantity must be at least 1"));
        }

        let product_repo = ProductRepository::new(self.pool);
        let product = product_repo
            .get_product_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        if product.total_stock < quantity {
            return Err(ServiceError::invalid_operation(format!(
                "Only {} of '{}' in stock",
                product.total_stock, product.title
            )));
        }

        let cart_repo = CartRepository::new(self.pool);
        cart_repo.add_item(user_id, product_id, quantity).await?;

        Ok(cart_repo.get_items(user_id).await?)
    }

    /// Returns the user's cart lines with product details.
    pub async fn get_cart(&self, user_id: &str) -> ServiceResult<Vec<CartItemDetail>> {
        let repo = CartRepository::new(self.pool);
        Ok(repo.get_items(user_id).await?)
    }

    /// Sets the quantity of an existing cart line.
    pub async fn update_quantity(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> ServiceResult<Vec<CartItemDetail>> {
        if quantity < 1 {
            return Err(ServiceError::validation("Quantity must be at least 1"));
        }

        let repo = CartRepository::new(self.pool);
        if !repo.set_quantity(user_id, product_id, quantity).await? {
            return Err(ServiceError::not_found("Cart item", product_id));
        }

        Ok(repo.get_items(user_id).await?)
    }

    /// Removes a product from the user's cart.
    pub async fn remove_from_cart(
        &self,
        user_id: &str,
        product_id: &str,
    ) -> ServiceResult<Vec<CartItemDetail>> {
        let repo = CartRepository::new(self.pool);
        if !repo.delete_item(user_id, product_id).await? {
            return Err(ServiceError::not_found("Cart item", product_id));
        }

        Ok(repo.get_items(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::RegisterRequest;
    use crate::database::models::CreateProduct;
    use crate::database::test_pool;
    use crate::services::product_service::ProductService;
    use crate::services::user_service::UserService;

    async fn seed(pool: &SqlitePool) -> (String, String) {
        let user = UserService::new(pool)
            .register_user(RegisterRequest {
                user_name: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let product = ProductService::new(pool)
            .create_product(CreateProduct {
                image: None,
                title: "Tee".to_string(),
                description: "A fine garment".to_string(),
                category: "men".to_string(),
                brand: "acme".to_string(),
                price: 19.99,
                sale_price: None,
                total_stock: 3,
            })
            .await
            .unwrap();

        (user.id, product.id)
    }

    #[tokio::test]
    async fn repeat_adds_accumulate_in_one_line() {
        let pool = test_pool().await;
        let (user_id, product_id) = seed(&pool).await;
        let service = CartService::new(&pool);

        service.add_to_cart(&user_id, &product_id, 1).await.unwrap();
        let items = service.add_to_cart(&user_id, &product_id, 2).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[tokio::test]
    async fn add_rejects_unknown_product_and_excess_quantity() {
        let pool = test_pool().await;
        let (user_id, product_id) = seed(&pool).await;
        let service = CartService::new(&pool);

        let err = service.add_to_cart(&user_id, "nope", 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service
            .add_to_cart(&user_id, &product_id, 99)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidOperation { .. }));

        let err = service
            .add_to_cart(&user_id, &product_id, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn update_and_remove_require_an_existing_line() {
        let pool = test_pool().await;
        let (user_id, product_id) = seed(&pool).await;
        let service = CartService::new(&pool);

        assert!(service.update_quantity(&user_id, &product_id, 2).await.is_err());

        service.add_to_cart(&user_id, &product_id, 1).await.unwrap();
        let items = service
            .update_quantity(&user_id, &product_id, 2)
            .await
            .unwrap();
        assert_eq!(items[0].quantity, 2);

        let items = service
            .remove_from_cart(&user_id, &product_id)
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
