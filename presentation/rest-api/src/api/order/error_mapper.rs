use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "order.not_found".to_string(),
            ),
            OrderError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "EmptyCart",
                "order.empty_cart".to_string(),
            ),
            OrderError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "order.product_not_found".to_string(),
            ),
            // The message names the offending product.
            OrderError::InsufficientStock(_) => (
                StatusCode::BAD_REQUEST,
                "InsufficientStock",
                self.to_string(),
            ),
            OrderError::ShippingAddressIncomplete => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.shipping_address_incomplete".to_string(),
            ),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
