//! Handler functions for product search.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::Product;
use crate::services::product_service::ProductService;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Keyword search across title, description, category, and brand.
#[axum::debug_handler]
pub async fn search_products(
    Extension(pool): Extension<SqlitePool>,
    Path(keyword): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<Product>>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.search(&keyword).await {
        Ok(products) => Ok(ResponseJson(ApiResponse::success(
            products,
            "Search results retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
