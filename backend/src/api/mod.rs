//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the shop, admin, and common
//! API domains, excluding core authentication routes which are handled
//! separately.

pub mod address;
pub mod cart;
pub mod common;
pub mod feature;
pub mod order;
pub mod product;
pub mod review;
pub mod search;
