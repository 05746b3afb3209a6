//! Defines the HTTP routes for the product catalog.
//!
//! The admin router is fully gated behind authentication plus the admin
//! role; the shop router is public.

use super::handlers::*;
use crate::auth::middleware::{admin_auth, jwt_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

/// Creates the admin catalog-management router
pub fn admin_products_router() -> Router {
    Router::new()
        .route("/add", post(add_product))
        .route("/edit/{id}", put(edit_product))
        .route("/delete/{id}", delete(delete_product))
        .route("/get", get(get_products_admin))
        .layer(middleware::from_fn(admin_auth))
        .layer(middleware::from_fn(jwt_auth))
}

/// Creates the public storefront product router
pub fn shop_products_router() -> Router {
    Router::new()
        .route("/get", get(get_filtered_products))
        .route("/get/{id}", get(get_product_details))
}
