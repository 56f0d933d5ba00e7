use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLineItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub user_id: String,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl CartEntity {
    pub fn into_domain(self, items: Vec<CartItemEntity>) -> Cart {
        Cart::from_repository(
            UserId::new(self.user_id),
            items.into_iter().map(|i| i.into_domain()).collect(),
            self.total,
            self.created_at,
            self.updated_at,
        )
    }
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartLineItem {
        CartLineItem::from_repository(self.id, self.product_id, self.quantity)
    }
}
