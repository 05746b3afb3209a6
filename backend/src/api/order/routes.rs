//! Defines the HTTP routes for orders.
//!
//! The shop router serves the authenticated buyer; the admin router is
//! additionally gated on the admin role.

use super::handlers::*;
use crate::auth::middleware::{admin_auth, jwt_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Creates the shopper order router
pub fn shop_orders_router() -> Router {
    Router::new()
        .route("/create", post(create_order))
        .route("/list", get(list_orders))
        .route("/details/{order_id}", get(order_details))
        .layer(middleware::from_fn(jwt_auth))
}

/// Creates the admin order-management router
pub fn admin_orders_router() -> Router {
    Router::new()
        .route("/get", get(get_all_orders))
        .route("/details/{order_id}", get(admin_order_details))
        .route("/update/{order_id}", put(update_order_status))
        .layer(middleware::from_fn(admin_auth))
        .layer(middleware::from_fn(jwt_auth))
}
