//! Order business logic.
//!
//! Checkout snapshots the cart and the chosen address into an order;
//! fulfilment state changes are an admin concern.

use crate::api::common::{PaginationFilter, PaginationMeta};
use crate::api::order::models::CreateOrderRequest;
use crate::database::models::{NewOrder, NewOrderItem, Order, OrderStatus, OrderWithItems};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::address_repository::AddressRepository;
use crate::repositories::cart_repository::CartRepository;
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::product_repository::ProductRepository;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct OrderService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Checks the user's cart out into an order.
    ///
    /// Validates the cart and stock, snapshots product pricing (sale price
    /// when set) and the delivery address, then hands the whole write to the
    /// repository's transaction, which also clears the cart and decrements
    /// stock.
    pub async fn create_order(
        &self,
        user_id: &str,
        request: CreateOrderRequest,
    ) -> ServiceResult<Order> {
        if request.payment_method.trim().is_empty() {
            return Err(ServiceError::validation("Payment method is required"));
        }

        let cart_items = CartRepository::new(self.pool).get_items(user_id).await?;
        if cart_items.is_empty() {
            return Err(ServiceError::invalid_operation("Cart is empty"));
        }

        let address = AddressRepository::new(self.pool)
            .get_address(user_id, &request.address_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Address", &request.address_id))?;

        let product_repo = ProductRepository::new(self.pool);
        let mut items = Vec::with_capacity(cart_items.len());
        let mut total_amount = 0.0;

        for line in &cart_items {
            let product = product_repo
                .get_product_by_id(&line.product_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Product", &line.product_id))?;

            if product.total_stock < line.quantity {
                return Err(ServiceError::invalid_operation(format!(
                    "Only {} of '{}' in stock",
                    product.total_stock, product.title
                )));
            }

            let unit_price = product.effective_price();
            total_amount += unit_price * line.quantity as f64;

            items.push(NewOrderItem {
                product_id: line.product_id.clone(),
                title: line.title.clone(),
                image: line.image.clone(),
                price: unit_price,
                quantity: line.quantity,
            });
        }

        let order = NewOrder {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            address: address.address,
            city: address.city,
            pincode: address.pincode,
            phone: address.phone,
            notes: address.notes,
            payment_method: request.payment_method,
            total_amount,
        };

        let created = OrderRepository::new(self.pool).create_order(order, items).await?;

        Ok(created)
    }

    /// Lists the user's orders.
    pub async fn get_orders_for_user(&self, user_id: &str) -> ServiceResult<Vec<Order>> {
        let repo = OrderRepository::new(self.pool);
        Ok(repo.get_orders_by_user(user_id).await?)
    }

    /// Retrieves one of the user's orders with its line items.
    pub async fn get_order_for_user(
        &self,
        user_id: &str,
        order_id: &str,
    ) -> ServiceResult<OrderWithItems> {
        let repo = OrderRepository::new(self.pool);

        let order = repo
            .get_order_by_id(order_id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        let items = repo.get_order_items(order_id).await?;

        Ok(OrderWithItems { order, items })
    }

    /// Lists all orders (admin).
    pub async fn list_all(
        &self,
        pagination: &PaginationFilter,
    ) -> ServiceResult<(Vec<Order>, PaginationMeta)> {
        let repo = OrderRepository::new(self.pool);
        let (orders, total) = repo.list_all(pagination).await?;

        let meta = PaginationMeta::new(pagination.page(), pagination.per_page(), total);

        Ok((orders, meta))
    }

    /// Retrieves any order with its line items (admin).
    pub async fn get_order_admin(&self, order_id: &str) -> ServiceResult<OrderWithItems> {
        let repo = OrderRepository::new(self.pool);

        let order = repo
            .get_order_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        let items = repo.get_order_items(order_id).await?;

        Ok(OrderWithItems { order, items })
    }

    /// Moves an order to a new fulfilment status (admin).
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> ServiceResult<Order> {
        let repo = OrderRepository::new(self.pool);

        repo.update_status(order_id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::RegisterRequest;
    use crate::database::models::{CreateAddress, CreateProduct};
    use crate::database::test_pool;
    use crate::services::address_service::AddressService;
    use crate::services::cart_service::CartService;
    use crate::services::product_service::ProductService;
    use crate::services::user_service::UserService;

    struct Fixture {
        user_id: String,
        address_id: String,
        product_id: String,
    }

    async fn seed(pool: &SqlitePool) -> Fixture {
        let user_id = UserService::new(pool)
            .register_user(RegisterRequest {
                user_name: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw123".to_string(),
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

        let product_id = ProductService::new(pool)
            .create_product(CreateProduct {
                image: None,
                title: "Tee".to_string(),
                description: "A fine garment".to_string(),
                category: "men".to_string(),
                brand: "acme".to_string(),
                price: 20.0,
                sale_price: Some(15.0),
                total_stock: 5,
            })
            .await
            .unwrap()
            .id;

        Fixture {
            user_id,
            address_id,
            product_id,
        }
    }

    #[tokio::test]
    async fn checkout_snapshots_cart_clears_it_and_decrements_stock() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = OrderService::new(&pool);

        CartService::new(&pool)
            .add_to_cart(&fx.user_id, &fx.product_id, 2)
            .await
            .unwrap();

        let order = service
            .create_order(
                &fx.user_id,
                CreateOrderRequest {
                    address_id: fx.address_id.clone(),
                    payment_method: "cod".to_string(),
                },
            )
            .await
            .unwrap();

        // Sale price wins over list price.
        assert_eq!(order.total_amount, 30.0);
        assert_eq!(order.order_status, OrderStatus::Pending);
        assert_eq!(order.city, "Springfield");

        let cart = CartService::new(&pool).get_cart(&fx.user_id).await.unwrap();
        assert!(cart.is_empty());

        let product = ProductService::new(&pool)
            .get_product_required(&fx.product_id)
            .await
            .unwrap();
        assert_eq!(product.total_stock, 3);

        let details = service
            .get_order_for_user(&fx.user_id, &order.id)
            .await
            .unwrap();
        assert_eq!(details.items.len(), 1);
        assert_eq!(details.items[0].price, 15.0);
    }

    #[tokio::test]
    async fn empty_cart_and_foreign_address_are_rejected() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = OrderService::new(&pool);

        let err = service
            .create_order(
                &fx.user_id,
                CreateOrderRequest {
                    address_id: fx.address_id.clone(),
                    payment_method: "cod".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidOperation { .. }));

        CartService::new(&pool)
            .add_to_cart(&fx.user_id, &fx.product_id, 1)
            .await
            .unwrap();

        let err = service
            .create_order(
                &fx.user_id,
                CreateOrderRequest {
                    address_id: "not-yours".to_string(),
                    payment_method: "cod".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn foreign_orders_are_invisible_to_other_users() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = OrderService::new(&pool);

        CartService::new(&pool)
            .add_to_cart(&fx.user_id, &fx.product_id, 1)
            .await
            .unwrap();
        let order = service
            .create_order(
                &fx.user_id,
                CreateOrderRequest {
                    address_id: fx.address_id.clone(),
                    payment_method: "cod".to_string(),
                },
            )
            .await
            .unwrap();

        let err = service
            .get_order_for_user("someone-else", &order.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        // Admin path sees it regardless of owner.
        let details = service.get_order_admin(&order.id).await.unwrap();
        assert_eq!(details.order.id, order.id);

        let updated = service
            .update_status(&order.id, OrderStatus::Shipped)
            .await
            .unwrap();
        assert_eq!(updated.order_status, OrderStatus::Shipped);
    }
}
