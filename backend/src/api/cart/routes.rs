//! Defines the HTTP routes for the shopping cart.
//!
//! Every cart route requires an authenticated session.

use super::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

/// Creates the cart router
pub fn cart_router() -> Router {
    Router::new()
        .route("/add", post(add_to_cart))
        .route("/get", get(get_cart))
        .route("/update", put(update_cart_item))
        .route("/delete/{product_id}", delete(delete_cart_item))
        .layer(middleware::from_fn(jwt_auth))
}
