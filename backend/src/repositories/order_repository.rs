//! Database repository for orders and their line items.
//!
//! Order creation is transactional: the order row, its items, the stock
//! decrements, and the cart clear commit together or not at all.

use crate::api::common::PaginationFilter;
use crate::database::models::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const ORDER_COLUMNS: &str = "id, user_id, address, city, pincode, phone, notes, order_status, \
     payment_method, payment_status, total_amount, created_at, updated_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates an order from a checked-out cart.
    ///
    /// Inserts the order and its items, decrements stock with a guard
    /// against overselling, and clears the user's cart, all in one
    /// transaction. A stock shortfall rolls everything back.
    pub async fn create_order(&self, order: NewOrder, items: Vec<NewOrderItem>) -> Result<Order> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let created = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (id, user_id, address, city, pincode, phone, notes,
                                order_status, payment_method, payment_status, total_amount,
                                created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?, 'pending', ?, ?, ?)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(&order.id)
        .bind(&order.user_id)
        .bind(&order.address)
        .bind(&order.city)
        .bind(&order.pincode)
        .bind(&order.phone)
        .bind(&order.notes)
        .bind(&order.payment_method)
        .bind(order.total_amount)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, title, image, price, quantity)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::now_v7().to_string())
            .bind(&order.id)
            .bind(&item.product_id)
            .bind(&item.title)
            .bind(&item.image)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

            let result = sqlx::query(
                "UPDATE products SET total_stock = total_stock - ? WHERE id = ? AND total_stock >= ?",
            )
            .bind(item.quantity)
            .bind(&item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                anyhow::bail!("insufficient stock for product {}", item.product_id);
            }
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(&order.user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Lists a user's orders, newest first.
    pub async fn get_orders_by_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Retrieves an order by its unique identifier.
    pub async fn get_order_by_id(&self, id: &str) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Lists all orders (admin view), newest first, with the total count.
    pub async fn list_all(&self, pagination: &PaginationFilter) -> Result<(Vec<Order>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT ? OFFSET ?"
        ))
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok((orders, total as u64))
    }

    /// Retrieves the line items of an order.
    pub async fn get_order_items(&self, order_id: &str) -> Result<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, title, image, price, quantity
            FROM order_items WHERE order_id = ?
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Moves an order to a new status.
    ///
    /// # Returns
    /// The updated order, or `None` when the id is unknown.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders SET order_status = ?, updated_at = ?
            WHERE id = ?
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }
}
