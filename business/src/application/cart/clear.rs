use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Clearing cart for user: {}", params.user_id));

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::CartNotFound)?;

        cart.clear();
        self.cart_repository.save(&cart).await?;

        Ok(cart)
    }
}
