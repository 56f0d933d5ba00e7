#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.product_not_found")]
    ProductNotFound,
    #[error("order.insufficient_stock: {0}")]
    InsufficientStock(String),
    #[error("order.shipping_address_incomplete")]
    ShippingAddressIncomplete,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
