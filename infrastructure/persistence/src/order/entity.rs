use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderLineItem, ShippingAddress};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub total: BigDecimal,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItemEntity>) -> Order {
        Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            items.into_iter().map(|i| i.into_domain()).collect(),
            self.total,
            ShippingAddress::from_repository(self.street, self.city, self.state, self.zip),
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.created_at,
        )
    }
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderLineItem {
        OrderLineItem::from_repository(self.product_id, self.name, self.price, self.quantity)
    }
}
