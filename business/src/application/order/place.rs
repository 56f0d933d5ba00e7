use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order, OrderLineItem, ShippingAddress};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct PlaceOrderUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let shipping_address =
            ShippingAddress::new(params.street, params.city, params.state, params.zip)?;

        self.logger
            .info(&format!("Placing order for user: {}", params.user_id));

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(OrderError::EmptyCart)?;

        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let products = self
            .product_repository
            .get_by_ids(&cart.product_ids())
            .await?;
        let products_by_id: HashMap<Uuid, &Product> =
            products.iter().map(|p| (p.id, p)).collect();

        // Validate stock for every line before mutating any, so a failure
        // cannot leave some products decremented and others untouched.
        let mut items = Vec::with_capacity(cart.items.len());
        for line in &cart.items {
            let product = products_by_id
                .get(&line.product_id)
                .copied()
                .ok_or(OrderError::ProductNotFound)?;

            if !product.has_stock(line.quantity) {
                self.logger.warn(&format!(
                    "Insufficient stock for {}: {} requested, {} available",
                    product.name, line.quantity, product.stock
                ));
                return Err(OrderError::InsufficientStock(product.name.clone()));
            }

            items.push(OrderLineItem::snapshot(product, line.quantity));
        }

        // Floor-checked decrements: a concurrent placement that wins the race
        // surfaces here as a conflict rather than overselling.
        for (line, item) in cart.items.iter().zip(&items) {
            self.product_repository
                .decrement_stock(line.product_id, line.quantity)
                .await
                .map_err(|e| match e {
                    RepositoryError::Conflict => {
                        OrderError::InsufficientStock(item.name.clone())
                    }
                    RepositoryError::NotFound => OrderError::ProductNotFound,
                    other => OrderError::Repository(other),
                })?;
        }

        // The cart's cached total is captured as-is, not recomputed.
        let order = Order::new(NewOrderProps {
            user_id: cart.user_id.clone(),
            items,
            total: cart.total.clone(),
            shipping_address,
        })?;

        self.order_repository.save(&order).await?;

        cart.clear();
        self.cart_repository.save(&cart).await?;

        self.logger
            .info(&format!("Order {} placed, total {}", order.id, order.total));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

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

    fn valid_params(user_id: UserId) -> PlaceOrderParams {
        PlaceOrderParams {
            user_id,
            street: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62704".to_string(),
        }
    }

    fn product(id: Uuid, name: &str, price: &str, stock: i32) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            name.to_string(),
            format!("{} description", name),
            price.parse().unwrap(),
            "Fruits".to_string(),
            stock,
            "https://example.com/image.jpg".to_string(),
            4.5,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_fail_with_empty_cart_when_cart_absent() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(|_| Ok(None));

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(test_user_id())).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn should_fail_with_empty_cart_when_cart_has_no_lines() {
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();
        let mut mock_carts = MockCartRepo::new();
        mock_carts
            .expect_find_by_user()
            .returning(move |_| Ok(Some(Cart::new(user_id_clone.clone()))));

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(user_id)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn should_reject_incomplete_shipping_address() {
        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                user_id: test_user_id(),
                street: "123 Main St".to_string(),
                city: "".to_string(),
                state: "IL".to_string(),
                zip: "62704".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            OrderError::ShippingAddressIncomplete
        ));
    }

    #[tokio::test]
    async fn should_fail_without_mutating_stock_when_a_line_exceeds_stock() {
        let pineapple_id = Uuid::new_v4();
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();

        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(move |_| {
            let mut cart = Cart::new(user_id_clone.clone());
            cart.add_item(pineapple_id, 5);
            cart.total = "24.95".parse().unwrap();
            Ok(Some(cart))
        });

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_ids()
            .returning(move |_| Ok(vec![product(pineapple_id, "Pineapple", "4.99", 3)]));
        // No decrement_stock expectation: any call would fail the test.

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(user_id)).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            OrderError::InsufficientStock(name) => assert_eq!(name, "Pineapple"),
            other => panic!("expected InsufficientStock, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_place_order_snapshot_items_and_clear_cart() {
        let apples_id = Uuid::new_v4();
        let milk_id = Uuid::new_v4();
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();

        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(move |_| {
            let mut cart = Cart::new(user_id_clone.clone());
            cart.add_item(apples_id, 2);
            cart.add_item(milk_id, 1);
            cart.total = "11.00".parse().unwrap();
            Ok(Some(cart))
        });
        mock_carts
            .expect_save()
            .withf(|cart| cart.is_empty() && cart.total == BigDecimal::from(0))
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_ids().returning(move |_| {
            Ok(vec![
                product(apples_id, "Fresh Apples", "3.00", 50),
                product(milk_id, "Whole Milk", "5.00", 30),
            ])
        });
        mock_products
            .expect_decrement_stock()
            .withf(move |id, quantity| *id == apples_id && *quantity == 2)
            .times(1)
            .returning(|_, _| Ok(()));
        mock_products
            .expect_decrement_stock()
            .withf(move |id, quantity| *id == milk_id && *quantity == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut mock_orders = MockOrderRepo::new();
        mock_orders
            .expect_save()
            .withf(|order| {
                order.status == OrderStatus::Pending
                    && order.items.len() == 2
                    && order.total == "11.00".parse::<bigdecimal::BigDecimal>().unwrap()
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(mock_orders),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(user_id)).await;

        assert!(result.is_ok());
        let order = result.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, "11.00".parse::<bigdecimal::BigDecimal>().unwrap());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].name, "Fresh Apples");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[1].name, "Whole Milk");
        assert_eq!(order.items[1].quantity, 1);
    }

    #[tokio::test]
    async fn should_surface_lost_decrement_race_as_insufficient_stock() {
        let apples_id = Uuid::new_v4();
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();

        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(move |_| {
            let mut cart = Cart::new(user_id_clone.clone());
            cart.add_item(apples_id, 2);
            cart.total = "6.00".parse().unwrap();
            Ok(Some(cart))
        });

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_ids()
            .returning(move |_| Ok(vec![product(apples_id, "Fresh Apples", "3.00", 2)]));
        mock_products
            .expect_decrement_stock()
            .returning(|_, _| Err(RepositoryError::Conflict));

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(user_id)).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            OrderError::InsufficientStock(name) => assert_eq!(name, "Fresh Apples"),
            other => panic!("expected InsufficientStock, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_fail_when_a_cart_line_references_missing_product() {
        let user_id = test_user_id();
        let user_id_clone = user_id.clone();

        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_find_by_user().returning(move |_| {
            let mut cart = Cart::new(user_id_clone.clone());
            cart.add_item(Uuid::new_v4(), 1);
            Ok(Some(cart))
        });

        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_ids().returning(|_| Ok(vec![]));

        let use_case = PlaceOrderUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            cart_repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params(user_id)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), OrderError::ProductNotFound));
    }
}
