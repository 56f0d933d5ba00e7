use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_or_create::{GetOrCreateCartParams, GetOrCreateCartUseCase};
use crate::domain::logger::Logger;

pub struct GetOrCreateCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrCreateCartUseCase for GetOrCreateCartUseCaseImpl {
    async fn execute(&self, params: GetOrCreateCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart for user: {}", params.user_id));

        if let Some(cart) = self.cart_repository.find_by_user(&params.user_id).await? {
            return Ok(cart);
        }

        let cart = Cart::new(params.user_id);
        self.cart_repository.save(&cart).await?;

        self.logger
            .info(&format!("Created empty cart for user: {}", cart.user_id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_return_existing_cart() {
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();
        let mut mock_repo = MockCartRepo::new();

        mock_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(Cart::new(user_id_clone.clone()))));

        let use_case = GetOrCreateCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetOrCreateCartParams { user_id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().user_id, test_user_id());
    }

    #[tokio::test]
    async fn should_create_and_persist_empty_cart_when_absent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .withf(|cart| cart.is_empty() && cart.total == BigDecimal::from(0))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = GetOrCreateCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrCreateCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total, BigDecimal::from(0));
    }

    #[tokio::test]
    async fn should_surface_repository_error() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetOrCreateCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrCreateCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
