//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations and orchestrate interactions between repositories, such as
//! checking out a cart into an order or gating reviews to buyers.

pub mod address_service;
pub mod cart_service;
pub mod feature_service;
pub mod order_service;
pub mod product_service;
pub mod review_service;
pub mod user_service;
