//! Database repository for shopping-cart lines.
//!
//! One row per (user, product); re-adding a product accumulates quantity
//! through the storage layer's conflict clause rather than a read-then-write.

use crate::database::models::CartItemDetail;
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Creates a new CartRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a product to a user's cart, accumulating quantity when the line
    /// already exists.
    pub async fn add_item(&self, user_id: &str, product_id: &str, quantity: i64) -> Result<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cart_items (id, user_id, product_id, quantity, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = quantity + excluded.quantity, updated_at = excluded.updated_at
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Returns a user's cart lines joined with the product fields the
    /// storefront renders.
    pub async fn get_items(&self, user_id: &str) -> Result<Vec<CartItemDetail>> {
        let items = sqlx::query_as::<_, CartItemDetail>(
            r#"
            SELECT c.product_id, p.image, p.title, p.price, p.sale_price, c.quantity
            FROM cart_items c
            JOIN products p ON c.product_id = p.id
            WHERE c.user_id = ?
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Sets the quantity of an existing cart line.
    ///
    /// # Returns
    /// `false` when the user has no such line.
    pub async fn set_quantity(&self, user_id: &str, product_id: &str, quantity: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cart_items SET quantity = ?, updated_at = ?
            WHERE user_id = ? AND product_id = ?
            "#,
        )
        .bind(quantity)
        .bind(Utc::now())
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes a product from a user's cart.
    ///
    /// # Returns
    /// `false` when the user has no such line.
    pub async fn delete_item(&self, user_id: &str, product_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND product_id = ?")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
