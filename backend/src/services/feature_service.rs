//! Feature-banner business logic.

use crate::api::common::validation_errors_to_service_error;
use crate::database::models::{CreateFeature, Feature};
use crate::errors::ServiceResult;
use crate::repositories::feature_repository::FeatureRepository;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

pub struct FeatureService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> FeatureService<'a> {
    /// Creates a new FeatureService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Stores a feature banner (admin).
    pub async fn add_feature(&self, create_feature: CreateFeature) -> ServiceResult<Feature> {
        if let Err(validation_errors) = create_feature.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = FeatureRepository::new(self.pool);
        let feature = repo
            .create_feature(Uuid::now_v7().to_string(), &create_feature.image)
            .await?;

        Ok(feature)
    }

    /// Lists all feature banners.
    pub async fn get_features(&self) -> ServiceResult<Vec<Feature>> {
        let repo = FeatureRepository::new(self.pool);
        Ok(repo.list_all().await?)
    }
}
