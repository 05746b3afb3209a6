//! Collection of general utility functions and common helpers.
//!
//! This module serves as a home for small, reusable helpers that do not fit
//! into other specific domain modules.

pub mod cookies;
pub mod jwt;
pub mod password;
