use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A catalog product. Created by the seed import and mutated only by stock
/// decrements during order placement; never deleted in the normal flow.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub stock: i32,
    pub image: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        category: String,
        stock: i32,
        image: String,
        rating: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            stock,
            image,
            rating,
            created_at,
            updated_at,
        }
    }

    /// Whether the current stock covers the requested quantity.
    pub fn has_stock(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }
}
