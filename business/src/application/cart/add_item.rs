use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        if params.quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding product {} (x{}) to cart of user {}",
            params.product_id, params.quantity, params.user_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        // Stock is only reserved at order placement; this check is against
        // the incoming quantity, not cumulative with the existing line.
        if !product.has_stock(params.quantity) {
            return Err(CartError::InsufficientStock);
        }

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .unwrap_or_else(|| Cart::new(params.user_id.clone()));

        cart.add_item(product.id, params.quantity);

        let products = self
            .product_repository
            .get_by_ids(&cart.product_ids())
            .await?;
        cart.recompute_total(&products);

        self.cart_repository.save(&cart).await?;

        self.logger
            .info(&format!("Cart total for user {}: {}", cart.user_id, cart.total));
        Ok(cart)
    }
}
