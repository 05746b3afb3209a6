//! Handler functions for product-review API endpoints.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::{CreateReview, Review};
use crate::services::review_service::ReviewService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Adds a review from the authenticated buyer.
#[axum::debug_handler]
pub async fn add_review(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateReview>,
) -> Result<ResponseJson<ApiResponse<Review>>, (StatusCode, String)> {
    let service = ReviewService::new(&pool);

    match service
        .add_review(&claims.sub, &claims.user_name, payload)
        .await
    {
        Ok(review) => Ok(ResponseJson(ApiResponse::success(
            review,
            "Review added successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists a product's reviews.
#[axum::debug_handler]
pub async fn get_reviews(
    Extension(pool): Extension<SqlitePool>,
    Path(product_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<Review>>>, (StatusCode, String)> {
    let service = ReviewService::new(&pool);

    match service.get_reviews(&product_id).await {
        Ok(reviews) => Ok(ResponseJson(ApiResponse::success(
            reviews,
            "Reviews retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
