//! Defines the HTTP routes for product reviews.
//!
//! Reading reviews is public; writing one requires an authenticated buyer.

use super::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the review router
pub fn review_router() -> Router {
    Router::new()
        .route("/add", post(add_review).layer(middleware::from_fn(jwt_auth)))
        .route("/{product_id}", get(get_reviews))
}
