//! Product-review business logic.
//!
//! Reviews are gated to buyers: a user must have an order containing the
//! product before their review is accepted. One review per buyer, enforced
//! by the storage layer's unique constraint.

use crate::api::common::validation_errors_to_service_error;
use crate::database::models::{CreateReview, Review};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::is_unique_violation;
use crate::repositories::product_repository::ProductRepository;
use crate::repositories::review_repository::ReviewRepository;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

pub struct ReviewService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ReviewService<'a> {
    /// Creates a new ReviewService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a review and refreshes the product's average rating.
    pub async fn add_review(
        &self,
        user_id: &str,
        user_name: &str,
        create_review: CreateReview,
    ) -> ServiceResult<Review> {
        if let Err(validation_errors) = create_review.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let product_repo = ProductRepository::new(self.pool);
        if product_repo
            .get_product_by_id(&create_review.product_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Product", &create_review.product_id));
        }

        let repo = ReviewRepository::new(self.pool);

        if !repo.user_has_purchased(user_id, &create_review.product_id).await? {
            return Err(ServiceError::permission_denied(
                "You need to purchase this product before reviewing it",
            ));
        }

        let review = match repo
            .create_review(
                Uuid::now_v7().to_string(),
                &create_review.product_id,
                user_id,
                user_name,
                &create_review.review_message,
                create_review.review_value,
            )
            .await
        {
            Ok(review) => review,
            Err(e) if is_unique_violation(&e) => {
                return Err(ServiceError::already_exists("Review", &create_review.product_id));
            }
            Err(e) => return Err(ServiceError::Database { source: e }),
        };

        repo.refresh_product_average(&create_review.product_id).await?;

        Ok(review)
    }

    /// Lists a product's reviews.
    pub async fn get_reviews(&self, product_id: &str) -> ServiceResult<Vec<Review>> {
        let repo = ReviewRepository::new(self.pool);
        Ok(repo.get_reviews_by_product(product_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::order::models::CreateOrderRequest;
    use crate::auth::models::RegisterRequest;
    use crate::database::models::{CreateAddress, CreateProduct};
    use crate::database::test_pool;
    use crate::services::address_service::AddressService;
    use crate::services::cart_service::CartService;
    use crate::services::order_service::OrderService;
    use crate::services::product_service::ProductService;
    use crate::services::user_service::UserService;

    async fn seed_buyer(pool: &SqlitePool) -> (String, String) {
        let user_id = UserService::new(pool)
            .register_user(RegisterRequest {
                user_name: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap()
            .id;

        let product_id = ProductService::new(pool)
            .create_product(CreateProduct {
                image: None,
                title: "Tee".to_string(),
                description: "A fine garment".to_string(),
                category: "men".to_string(),
                brand: "acme".to_string(),
                price: 20.0,
                sale_price: None,
                total_stock: 5,
            })
            .await
            .unwrap()
            .id;

        let address_id = AddressService::new(pool)
            .add_address(
                &user_id,
                CreateAddress {
                    address: "1 Main St".to_string(),
                    city: "Springfield".to_string(),
                    pincode: "12345".to_string(),
                    phone: "555-0100".to_string(),
                    notes: String::new(),
                },
            )
            .await
            .unwrap()
            .id;

        CartService::new(pool)
            .add_to_cart(&user_id, &product_id, 1)
            .await
            .unwrap();
        OrderService::new(pool)
            .create_order(
                &user_id,
                CreateOrderRequest {
                    address_id,
                    payment_method: "cod".to_string(),
                },
            )
            .await
            .unwrap();

        (user_id, product_id)
    }

    fn five_stars(product_id: &str) -> CreateReview {
        CreateReview {
            product_id: product_id.to_string(),
            review_message: "Fits great".to_string(),
            review_value: 5,
        }
    }

    #[tokio::test]
    async fn buyer_review_updates_average_and_cannot_repeat() {
        let pool = test_pool().await;
        let (user_id, product_id) = seed_buyer(&pool).await;
        let service = ReviewService::new(&pool);

        service
            .add_review(&user_id, "alice", five_stars(&product_id))
            .await
            .unwrap();

        let product = ProductService::new(&pool)
            .get_product_required(&product_id)
            .await
            .unwrap();
        assert_eq!(product.average_review, 5.0);

        let err = service
            .add_review(&user_id, "alice", five_stars(&product_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));

        assert_eq!(service.get_reviews(&product_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_buyers_cannot_review() {
        let pool = test_pool().await;
        let (_, product_id) = seed_buyer(&pool).await;
        let service = ReviewService::new(&pool);

        let stranger = UserService::new(&pool)
            .register_user(RegisterRequest {
                user_name: "mallory".to_string(),
                email: "m@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap()
            .id;

        let err = service
            .add_review(&stranger, "mallory", five_stars(&product_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied { .. }));
    }

    #[tokio::test]
    async fn rating_outside_range_fails_validation() {
        let pool = test_pool().await;
        let (user_id, product_id) = seed_buyer(&pool).await;
        let service = ReviewService::new(&pool);

        let mut bad = five_stars(&product_id);
        bad.review_value = 6;
        let err = service.add_review(&user_id, "alice", bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
