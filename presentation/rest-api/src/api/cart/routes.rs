use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_or_create::{
    GetOrCreateCartParams, GetOrCreateCartUseCase,
};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_or_create_use_case: Arc<dyn GetOrCreateCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_or_create_use_case: Arc<dyn GetOrCreateCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_or_create_use_case,
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// One cart per user, created lazily on first access. Every mutation
/// recomputes the cart total from current product prices.
#[OpenApi]
impl CartApi {
    /// Get a user's cart
    ///
    /// Returns the user's cart, creating an empty one if absent.
    #[oai(path = "/cart/:user_id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, user_id: Path<String>) -> GetCartResponse {
        match self
            .get_or_create_use_case
            .execute(GetOrCreateCartParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add an item to the cart
    ///
    /// Merges into an existing line for the same product, or appends a new
    /// line. Fails if the product does not exist or the requested quantity
    /// exceeds its current stock.
    #[oai(path = "/cart/:user_id/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        user_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_product_id".to_string(),
                }));
            }
        };

        match self
            .add_item_use_case
            .execute(AddCartItemParams {
                user_id: UserId::new(user_id.0),
                product_id,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a cart line's quantity
    ///
    /// Sets the quantity of an existing line. Fails if the cart or line is
    /// absent, or the new quantity exceeds the product's current stock.
    #[oai(
        path = "/cart/:user_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_item(
        &self,
        user_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> UpdateCartItemResponse {
        let item_uuid = match Uuid::parse_str(&item_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_item_id".to_string(),
                }));
            }
        };

        match self
            .update_item_use_case
            .execute(UpdateCartItemParams {
                user_id: UserId::new(user_id.0),
                item_id: item_uuid,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => UpdateCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCartItemResponse::BadRequest(json),
                    404 => UpdateCartItemResponse::NotFound(json),
                    _ => UpdateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from the cart
    ///
    /// Removing an absent line is a no-op; the cart is returned either way.
    #[oai(
        path = "/cart/:user_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        user_id: Path<String>,
        item_id: Path<String>,
    ) -> RemoveCartItemResponse {
        let item_uuid = match Uuid::parse_str(&item_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_item_id".to_string(),
                }));
            }
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new(user_id.0),
                item_id: item_uuid,
            })
            .await
        {
            Ok(cart) => RemoveCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveCartItemResponse::NotFound(json),
                    _ => RemoveCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the cart
    ///
    /// Empties all line items and resets the total to zero.
    #[oai(path = "/cart/:user_id", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, user_id: Path<String>) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(cart) => ClearCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ClearCartResponse::NotFound(json),
                    _ => ClearCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
