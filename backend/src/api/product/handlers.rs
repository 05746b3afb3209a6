//! Handler functions for product catalog API endpoints.
//!
//! The admin handlers manage the catalog; the shop handlers expose the
//! filtered listing and product details to the storefront.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::api::product::models::ProductFilter;
use crate::database::models::{CreateProduct, Product};
use crate::services::product_service::ProductService;
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Adds a product to the catalog (admin).
#[axum::debug_handler]
pub async fn add_product(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreateProduct>,
) -> Result<ResponseJson<ApiResponse<Product>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.create_product(payload).await {
        Ok(product) => Ok(ResponseJson(ApiResponse::success(
            product,
            "Product added successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Overwrites a product's editable fields (admin).
#[axum::debug_handler]
pub async fn edit_product(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
    Json(payload): Json<CreateProduct>,
) -> Result<ResponseJson<ApiResponse<Product>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.update_product(&id, payload).await {
        Ok(product) => Ok(ResponseJson(ApiResponse::success(
            product,
            "Product updated successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Removes a product from the catalog (admin).
#[axum::debug_handler]
pub async fn delete_product(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.delete_product(&id).await {
        Ok(()) => Ok(ResponseJson(ApiResponse::success(
            (),
            "Product deleted successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists every product (admin).
#[axum::debug_handler]
pub async fn get_products_admin(
    Extension(pool): Extension<SqlitePool>,
) -> Result<ResponseJson<ApiResponse<Vec<Product>>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.list_all().await {
        Ok(products) => Ok(ResponseJson(ApiResponse::success(
            products,
            "Products retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists products for the storefront, filtered and sorted.
#[axum::debug_handler]
pub async fn get_filtered_products(
    Extension(pool): Extension<SqlitePool>,
    Query(filter): Query<ProductFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<Product>>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.list_filtered(&filter).await {
        Ok((products, pagination)) => Ok(ResponseJson(ApiResponse::paginated(
            products,
            pagination,
            "Products retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Retrieves a single product's details for the storefront.
#[axum::debug_handler]
pub async fn get_product_details(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Product>>, (StatusCode, String)> {
    let service = ProductService::new(&pool);

    match service.get_product_required(&id).await {
        Ok(product) => Ok(ResponseJson(ApiResponse::success(
            product,
            "Product retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
