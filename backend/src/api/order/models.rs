//! Request models for the order endpoints.

use crate::database::models::OrderStatus;
use serde::Deserialize;
use validator::Validate;

/// Checkout payload: which address to ship to and how the buyer pays.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Address ID is required"))]
    pub address_id: String,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,
}

/// Admin payload moving an order to a new fulfilment status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_status: OrderStatus,
}
