use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists products filtered by optional exact-match category and optional
    /// case-insensitive substring match against name or description.
    async fn search(
        &self,
        category: Option<String>,
        term: Option<String>,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
    /// Atomically decrements stock by `quantity`, failing with
    /// `RepositoryError::Conflict` if the remaining stock does not cover it.
    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
}
