use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Product category
    pub category: String,
    /// Units currently in stock
    pub stock: i32,
    /// Product image URL
    pub image: String,
    /// Average customer rating
    pub rating: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_f64().unwrap_or(0.0),
            category: product.category,
            stock: product.stock,
            image: product.image,
            rating: product.rating,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
