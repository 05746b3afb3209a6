//! Request models for the cart endpoints.

use serde::Deserialize;
use validator::Validate;

/// Payload for adding a product to the cart or changing a line's quantity.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    #[validate(length(min = 1, message = "Product ID is required"))]
    pub product_id: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}
