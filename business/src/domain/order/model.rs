use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// A frozen copy of a product at the moment of purchase. Later catalog
/// changes do not retroactively alter historical orders.
#[derive(Debug, Clone)]
pub struct OrderLineItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderLineItem {
    /// Snapshots a cart line against the live product: values are copied,
    /// not referenced.
    pub fn snapshot(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            quantity,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(product_id: Uuid, name: String, price: BigDecimal, quantity: i32) -> Self {
        Self {
            product_id,
            name,
            price,
            quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ShippingAddress {
    /// All four fields are required and must be non-empty.
    pub fn new(
        street: String,
        city: String,
        state: String,
        zip: String,
    ) -> Result<Self, OrderError> {
        if [&street, &city, &state, &zip]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(OrderError::ShippingAddressIncomplete);
        }

        Ok(Self {
            street,
            city,
            state,
            zip,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(street: String, city: String, state: String, zip: String) -> Self {
        Self {
            street,
            city,
            state,
            zip,
        }
    }
}

pub struct NewOrderProps {
    pub user_id: UserId,
    pub items: Vec<OrderLineItem>,
    pub total: BigDecimal,
    pub shipping_address: ShippingAddress,
}

/// An order: an immutable-after-creation snapshot of purchased items and
/// their total, plus a mutable fulfillment status.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderLineItem>,
    pub total: BigDecimal,
    pub shipping_address: ShippingAddress,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        if props.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            items: props.items,
            total: props.total,
            shipping_address: props.shipping_address,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<OrderLineItem>,
        total: BigDecimal,
        shipping_address: ShippingAddress,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total,
            shipping_address,
            status,
            created_at,
        }
    }
}
