use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLineItem};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,
    /// Quantity to add (must be positive)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity for the line (must be positive)
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    /// Line item unique identifier
    pub id: String,
    /// Referenced product identifier
    pub product_id: String,
    /// Quantity in the cart
    pub quantity: i32,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    /// Owning user identifier
    pub user_id: String,
    /// Cart line items, in insertion order
    pub items: Vec<CartItemResponse>,
    /// Cached cart total
    pub total: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            user_id: cart.user_id.to_string(),
            items: cart.items.into_iter().map(|i| i.into()).collect(),
            total: cart.total.to_f64().unwrap_or(0.0),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}
