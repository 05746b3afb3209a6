//! Handler functions for shopping-cart API endpoints.
//!
//! The authenticated user's identity comes from the verified claims placed
//! in the request extensions by the auth middleware; client-supplied user
//! ids are never trusted.

use crate::api::cart::models::CartItemRequest;
use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::CartItemDetail;
use crate::services::cart_service::CartService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Adds a product to the caller's cart.
#[axum::debug_handler]
pub async fn add_to_cart(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CartItemRequest>,
) -> Result<ResponseJson<ApiResponse<Vec<CartItemDetail>>>, (StatusCode, String)> {
    let service = CartService::new(&pool);

    match service
        .add_to_cart(&claims.sub, &payload.product_id, payload.quantity)
        .await
    {
        Ok(items) => Ok(ResponseJson(ApiResponse::success(
            items,
            "Product added to cart",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Returns the caller's cart.
#[axum::debug_handler]
pub async fn get_cart(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<ApiResponse<Vec<CartItemDetail>>>, (StatusCode, String)> {
    let service = CartService::new(&pool);

    match service.get_cart(&claims.sub).await {
        Ok(items) => Ok(ResponseJson(ApiResponse::success(
            items,
            "Cart retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Sets the quantity of a line in the caller's cart.
#[axum::debug_handler]
pub async fn update_cart_item(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CartItemRequest>,
) -> Result<ResponseJson<ApiResponse<Vec<CartItemDetail>>>, (StatusCode, String)> {
    let service = CartService::new(&pool);

    match service
        .update_quantity(&claims.sub, &payload.product_id, payload.quantity)
        .await
    {
        Ok(items) => Ok(ResponseJson(ApiResponse::success(
            items,
            "Cart updated successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Removes a product from the caller's cart.
#[axum::debug_handler]
pub async fn delete_cart_item(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<CartItemDetail>>>, (StatusCode, String)> {
    let service = CartService::new(&pool);

    match service.remove_from_cart(&claims.sub, &product_id).await {
        Ok(items) => Ok(ResponseJson(ApiResponse::success(
            items,
            "Product removed from cart",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
