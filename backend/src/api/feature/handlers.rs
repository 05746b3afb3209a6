//! Handler functions for storefront feature banners.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::{CreateFeature, Feature};
use crate::services::feature_service::FeatureService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Stores a feature banner (admin).
#[axum::debug_handler]
pub async fn add_feature(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreateFeature>,
) -> Result<ResponseJson<ApiResponse<Feature>>, (StatusCode, String)> {
    let service = FeatureService::new(&pool);

    match service.add_feature(payload).await {
        Ok(feature) => Ok(ResponseJson(ApiResponse::success(
            feature,
            "Feature image added successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists all feature banners.
#[axum::debug_handler]
pub async fn get_features(
    Extension(pool): Extension<SqlitePool>,
) -> Result<ResponseJson<ApiResponse<Vec<Feature>>>, (StatusCode, String)> {
    let service = FeatureService::new(&pool);

    match service.get_features().await {
        Ok(features) => Ok(ResponseJson(ApiResponse::success(
            features,
            "Feature images retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
