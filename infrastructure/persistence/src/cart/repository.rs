use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartEntity, CartItemEntity};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, total, created_at, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, product_id, quantity FROM cart_items WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Some(entity.into_domain(items)))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        // Cart row and line rows are written together: replacing the lines
        // outside a transaction could expose a half-saved cart to readers.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            r#"INSERT INTO carts (user_id, total, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                total = EXCLUDED.total,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(cart.user_id.as_str())
        .bind(&cart.total)
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(cart.user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (position, item) in cart.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO cart_items (id, user_id, product_id, quantity, position) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(item.id)
            .bind(cart.user_id.as_str())
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
