//! Router assembly for the Storefront backend.
//!
//! Builds the full application router: auth, shop, admin, and common
//! domains, plus the CORS and tracing layers and the shared extensions
//! (connection pool and configuration) every handler and middleware reads.

use crate::api;
use crate::api::common::ApiResponse;
use crate::auth;
use crate::config::Config;
use axum::http::{HeaderName, Method, header};
use axum::{Extension, Router, response::Json, routing::get};
use sqlx::SqlitePool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router with all routes and layers attached.
pub fn build_router(pool: SqlitePool, config: Config) -> Router {
    // Credentialed CORS cannot use a wildcard origin, so the request's own
    // origin is echoed back.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true);

    Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth::routes::auth_router())
        .nest(
            "/api/admin/products",
            api::product::routes::admin_products_router(),
        )
        .nest(
            "/api/admin/orders",
            api::order::routes::admin_orders_router(),
        )
        .nest(
            "/api/shop/products",
            api::product::routes::shop_products_router(),
        )
        .nest("/api/shop/cart", api::cart::routes::cart_router())
        .nest("/api/shop/address", api::address::routes::address_router())
        .nest("/api/shop/order", api::order::routes::shop_orders_router())
        .nest("/api/shop/search", api::search::routes::search_router())
        .nest("/api/shop/review", api::review::routes::review_router())
        .nest("/api/common/feature", api::feature::routes::feature_router())
        .layer(Extension(pool))
        .layer(Extension(config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Storefront Backend",
            "version": "0.1.0"
        }),
        "Welcome to the Storefront API",
    ))
}
