//! Database repository for storefront feature banners.

use crate::database::models::Feature;
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for feature-banner database operations.
pub struct FeatureRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> FeatureRepository<'a> {
    /// Creates a new FeatureRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Stores a feature banner image.
    pub async fn create_feature(&self, id: String, image: &str) -> Result<Feature> {
        let feature = sqlx::query_as::<_, Feature>(
            r#"
            INSERT INTO features (id, image, created_at)
            VALUES (?, ?, ?)
            RETURNING id, image, created_at
            "#,
        )
        .bind(id)
        .bind(image)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(feature)
    }

    /// Lists all feature banners, newest first.
    pub async fn list_all(&self) -> Result<Vec<Feature>> {
        let features = sqlx::query_as::<_, Feature>(
            "SELECT id, image, created_at FROM features ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(features)
    }
}
