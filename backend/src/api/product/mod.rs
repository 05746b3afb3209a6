//! Module for product catalog API endpoints.
//!
//! Covers the admin catalog management surface and the public storefront
//! listing.

pub mod handlers;
pub mod models;
pub mod routes;
