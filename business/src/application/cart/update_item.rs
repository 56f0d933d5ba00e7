use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError> {
        if params.quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Updating cart item {} for user {}",
            params.item_id, params.user_id
        ));

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::CartNotFound)?;

        let product_id = cart
            .find_item(params.item_id)
            .ok_or(CartError::ItemNotFound)?
            .product_id;

        let product = self
            .product_repository
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.has_stock(params.quantity) {
            return Err(CartError::InsufficientStock);
        }

        cart.set_item_quantity(params.item_id, params.quantity);

        let products = self
            .product_repository
            .get_by_ids(&cart.product_ids())
            .await?;
        cart.recompute_total(&products);

        self.cart_repository.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn search(&self, category: Option<String>, term: Option<String>) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn product(id: Uuid, price: &str, stock: i32) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Greek Yogurt".to_string(),
            "Creamy Greek yogurt, protein-rich".to_string(),
            price.parse().unwrap(),
            "Dairy".to_string(),
            stock,
            "https://example.com/yogurt.jpg".to_string(),
            4.7,
            now,
            now,
        )
    }

    fn cart_with_line(user_id: UserId, product_id: Uuid, quantity: i32) -> Cart {
        let mut cart = Cart::new(user_id);
        cart.add_item(product_id, quantity);
        cart
    }

    #[tokio::test]
    async fn should_set_quantity_and_recompute_total() {
        let product_id = Uuid::new_v4();
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();
        let seeded = cart_with_line(user_id_clone.clone(), product_id, 1);
        let item_id = seeded.items[0].id;

        let mut mock_carts = MockCartRepo::new();
        let seeded_clone = seeded.clone();
        mock_carts
            .expect_find_by_user()
            .returning(move |_| Ok(Some(seeded_clone.clone())));
        mock_carts.expect_save().times(1).returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(product(product_id, "5.49", 35)));
        mock_products
            .expect_get_by_ids()
            .returning(move |_| Ok(vec![product(product_id, "5.49", 35)]));

        let use_case = UpdateCartItemUseCaseImpl {
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                user_id,
                item_id,
                quantity: 4,
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.total, "21.96".parse::<bigdecimal::BigDecimal>().unwrap());
    }

    #[tokio::test]
    async fn should_return_cart_not_found_when_cart_absent() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(|_| Ok(None));

        let use_case = UpdateCartItemUseCaseImpl {
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                user_id: test_user_id(),
                item_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::CartNotFound));
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_line_absent() {
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();
        let mut mock_carts = MockCartRepo::new();
        mock_carts
            .expect_find_by_user()
            .returning(move |_| Ok(Some(Cart::new(user_id_clone.clone()))));

        let use_case = UpdateCartItemUseCaseImpl {
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                user_id,
                item_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_quantity_exceeding_stock() {
        let product_id = Uuid::new_v4();
        let user_id = test_user_id();
        let seeded = cart_with_line(user_id.clone(), product_id, 1);
        let item_id = seeded.items[0].id;

        let mut mock_carts = MockCartRepo::new();
        mock_carts
            .expect_find_by_user()
            .returning(move |_| Ok(Some(seeded.clone())));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(product(product_id, "5.49", 3)));

        let use_case = UpdateCartItemUseCaseImpl {
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                user_id,
                item_id,
                quantity: 5,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::InsufficientStock));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity() {
        let use_case = UpdateCartItemUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                user_id: test_user_id(),
                item_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
