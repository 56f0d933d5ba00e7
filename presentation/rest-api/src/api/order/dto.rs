use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderLineItem, ShippingAddress};
use business::domain::order::value_objects::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "processing")]
    Processing,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Processing => OrderStatusDto::Processing,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ShippingAddressDto {
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip: String,
}

impl From<ShippingAddress> for ShippingAddressDto {
    fn from(address: ShippingAddress) -> Self {
        Self {
            street: address.street,
            city: address.city,
            state: address.state,
            zip: address.zip,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Shipping address (all fields required)
    pub shipping_address: ShippingAddressDto,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// New status: pending, processing, shipped, delivered or cancelled
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemResponse {
    /// Identifier of the purchased product
    pub product_id: String,
    /// Product name at purchase time
    pub name: String,
    /// Unit price at purchase time
    pub price: f64,
    /// Purchased quantity
    pub quantity: i32,
}

impl From<OrderLineItem> for OrderItemResponse {
    fn from(item: OrderLineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name,
            price: item.price.to_f64().unwrap_or(0.0),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Purchased items, frozen at purchase time
    pub items: Vec<OrderItemResponse>,
    /// Order total, captured from the cart at creation
    pub total: f64,
    /// Shipping address
    pub shipping_address: ShippingAddressDto,
    /// Fulfillment status
    pub status: OrderStatusDto,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(|i| i.into()).collect(),
            total: order.total.to_f64().unwrap_or(0.0),
            shipping_address: order.shipping_address.into(),
            status: order.status.into(),
            created_at: order.created_at,
        }
    }
}
