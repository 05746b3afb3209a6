//! Module for order API endpoints.
//!
//! Covers shopper checkout and order history plus the admin fulfilment
//! surface.

pub mod handlers;
pub mod models;
pub mod routes;
