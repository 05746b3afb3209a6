//! Handler functions for order API endpoints.

use crate::api::common::{ApiResponse, PaginationFilter, service_error_to_http};
use crate::api::order::models::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::database::models::{Order, OrderWithItems};
use crate::services::order_service::OrderService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Checks the caller's cart out into an order.
#[axum::debug_handler]
pub async fn create_order(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<ResponseJson<ApiResponse<Order>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.create_order(&claims.sub, payload).await {
        Ok(order) => Ok(ResponseJson(ApiResponse::success(
            order,
            "Order placed successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists the caller's orders.
#[axum::debug_handler]
pub async fn list_orders(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<ApiResponse<Vec<Order>>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.get_orders_for_user(&claims.sub).await {
        Ok(orders) => Ok(ResponseJson(ApiResponse::success(
            orders,
            "Orders retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Retrieves one of the caller's orders with its line items.
#[axum::debug_handler]
pub async fn order_details(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<OrderWithItems>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.get_order_for_user(&claims.sub, &order_id).await {
        Ok(order) => Ok(ResponseJson(ApiResponse::success(
            order,
            "Order retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Lists all orders (admin).
#[axum::debug_handler]
pub async fn get_all_orders(
    Extension(pool): Extension<SqlitePool>,
    Query(pagination): Query<PaginationFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<Order>>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.list_all(&pagination).await {
        Ok((orders, meta)) => Ok(ResponseJson(ApiResponse::paginated(
            orders,
            meta,
            "Orders retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Retrieves any order with its line items (admin).
#[axum::debug_handler]
pub async fn admin_order_details(
    Extension(pool): Extension<SqlitePool>,
    Path(order_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<OrderWithItems>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.get_order_admin(&order_id).await {
        Ok(order) => Ok(ResponseJson(ApiResponse::success(
            order,
            "Order retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Moves an order to a new fulfilment status (admin).
#[axum::debug_handler]
pub async fn update_order_status(
    Extension(pool): Extension<SqlitePool>,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<ResponseJson<ApiResponse<Order>>, (StatusCode, String)> {
    let service = OrderService::new(&pool);

    match service.update_status(&order_id, payload.order_status).await {
        Ok(order) => Ok(ResponseJson(ApiResponse::success(
            order,
            "Order status updated successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
