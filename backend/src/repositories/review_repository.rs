//! Database repository for product reviews.
//!
//! The one-review-per-buyer rule is enforced by the UNIQUE constraint on
//! (product_id, user_id); callers see the conflict as a database error.

use crate::database::models::Review;
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a review. A second review from the same user for the same
    /// product surfaces as a unique-constraint database error.
    pub async fn create_review(
        &self,
        id: String,
        product_id: &str,
        user_id: &str,
        user_name: &str,
        review_message: &str,
        review_value: i64,
    ) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, product_id, user_id, user_name, review_message,
                                 review_value, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, product_id, user_id, user_name, review_message, review_value, created_at
            "#,
        )
        .bind(id)
        .bind(product_id)
        .bind(user_id)
        .bind(user_name)
        .bind(review_message)
        .bind(review_value)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(review)
    }

    /// Lists a product's reviews, newest first.
    pub async fn get_reviews_by_product(&self, product_id: &str) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, product_id, user_id, user_name, review_message, review_value, created_at
            FROM reviews WHERE product_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Whether a user has an order containing a product, which is what
    /// qualifies them to review it.
    pub async fn user_has_purchased(&self, user_id: &str, product_id: &str) -> Result<bool> {
        let exists: i64 = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM order_items oi
                JOIN orders o ON oi.order_id = o.id
                WHERE o.user_id = ? AND oi.product_id = ?
            )
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists != 0)
    }

    /// Recomputes a product's average rating from its reviews.
    pub async fn refresh_product_average(&self, product_id: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET average_review = COALESCE(
                (SELECT AVG(review_value) FROM reviews WHERE product_id = ?), 0)
            WHERE id = ?
            "#,
        )
        .bind(product_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
