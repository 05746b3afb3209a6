//! Handler functions for delivery-address API endpoints.
//!
//! Ownership is enforced by scoping every operation to the authenticated
//! user's id from the verified claims.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::{Address, CreateAddress};
use crate::services::address_service::AddressService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Adds an address for the caller.
#[axum::debug_handler]
pub async fn add_address(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateAddress>,
) -> Result<ResponseJson<ApiResponse<Address>>, (StatusCode, String)> {
    let service = AddressService::new(&pool);

    match service.add_address(&claims.sub, payload).await {
        Ok(address) => Ok(ResponseJson(ApiResponse::success(
            address,
            "Address added successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists the caller's addresses.
#[axum::debug_handler]
pub async fn get_addresses(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<ApiResponse<Vec<Address>>>, (StatusCode, String)> {
    let service = AddressService::new(&pool);

    match service.get_addresses(&claims.sub).await {
        Ok(addresses) => Ok(ResponseJson(ApiResponse::success(
            addresses,
            "Addresses retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Overwrites one of the caller's addresses.
#[axum::debug_handler]
pub async fn update_address(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(address_id): Path<String>,
    Json(payload): Json<CreateAddress>,
) -> Result<ResponseJson<ApiResponse<Address>>, (StatusCode, String)> {
    let service = AddressService::new(&pool);

    match service.update_address(&claims.sub, &address_id, payload).await {
        Ok(address) => Ok(ResponseJson(ApiResponse::success(
            address,
            "Address updated successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Deletes one of the caller's addresses.
#[axum::debug_handler]
pub async fn delete_address(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(address_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, (StatusCode, String)> {
    let service = AddressService::new(&pool);

    match service.delete_address(&claims.sub, &address_id).await {
        Ok(()) => Ok(ResponseJson(ApiResponse::success(
            (),
            "Address deleted successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
