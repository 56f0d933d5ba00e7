use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// A single line in a cart: a product reference plus a quantity.
#[derive(Debug, Clone)]
pub struct CartLineItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl CartLineItem {
    pub fn new(product_id: Uuid, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, product_id: Uuid, quantity: i32) -> Self {
        Self {
            id,
            product_id,
            quantity,
        }
    }
}

/// The per-user cart aggregate. One cart per user, created lazily on first
/// access. The total is a cache derived from current product prices, refreshed
/// from scratch on every mutation.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartLineItem>,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            items: Vec::new(),
            total: BigDecimal::from(0),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        items: Vec<CartLineItem>,
        total: BigDecimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            items,
            total,
            created_at,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merges the quantity into an existing line for the product, or appends
    /// a new line at the end.
    pub fn add_item(&mut self, product_id: Uuid, quantity: i32) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(CartLineItem::new(product_id, quantity)),
        }
    }

    pub fn find_item(&self, item_id: Uuid) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Sets a line's quantity. Returns false if the line is absent.
    pub fn set_item_quantity(&mut self, item_id: Uuid, quantity: i32) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes a line if present. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, item_id: Uuid) {
        self.items.retain(|item| item.id != item_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total = BigDecimal::from(0);
        self.updated_at = Utc::now();
    }

    /// Distinct product ids referenced by the cart, in line order.
    pub fn product_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for item in &self.items {
            if !ids.contains(&item.product_id) {
                ids.push(item.product_id);
            }
        }
        ids
    }

    /// Recomputes the cached total from scratch: sum over all lines of the
    /// referenced product's current price times the line quantity. Lines whose
    /// product is not among `products` contribute nothing.
    pub fn recompute_total(&mut self, products: &[Product]) {
        let prices: HashMap<Uuid, &BigDecimal> =
            products.iter().map(|p| (p.id, &p.price)).collect();

        self.total = self
            .items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| {
                match prices.get(&item.product_id) {
                    Some(price) => acc + (*price).clone() * BigDecimal::from(item.quantity),
                    None => acc,
                }
            });
        self.updated_at = Utc::now();
    }
}
