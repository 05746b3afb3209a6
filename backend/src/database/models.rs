//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, together with the create/update DTOs used by the
//! service layer. Wire names are camelCase to match the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert-ready user row; the password is already hashed by the service.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub image: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub total_stock: i64,
    pub average_review: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Unit price charged at checkout: sale price when set, list price otherwise.
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub image: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub sale_price: Option<f64>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub total_stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cart line joined with the product fields the storefront renders.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDetail {
    pub product_id: String,
    pub image: Option<String>,
    pub title: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddress {
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[serde(default)]
    pub notes: String,
}

/// Lifecycle states an order moves through after checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    InProcess,
    Shipped,
    Delivered,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
    pub notes: String,
    pub order_status: OrderStatus,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub title: String,
    pub image: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Insert-ready order row built by the service from the cart and the chosen
/// delivery address.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id: String,
    pub user_id: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
    pub notes: String,
    pub payment_method: String,
    pub total_amount: f64,
}

/// Insert-ready order line snapshotting the product at purchase time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: String,
    pub title: String,
    pub image: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Order joined with its line items, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    pub review_message: String,
    pub review_value: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[validate(length(min = 1, message = "Product ID is required"))]
    pub product_id: String,

    #[validate(length(min = 1, message = "Review message is required"))]
    pub review_message: String,

    #[validate(range(min = 1, max = 5, message = "Review value must be between 1 and 5"))]
    pub review_value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeature {
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
}
