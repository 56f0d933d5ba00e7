use std::str::FromStr;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_status_use_case,
        }
    }
}

/// Order management API
///
/// Endpoints for placing orders from a cart and tracking their status.
#[OpenApi]
impl OrderApi {
    /// List a user's orders
    ///
    /// Returns all orders for the user, newest first.
    #[oai(path = "/orders/:user_id", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self, user_id: Path<String>) -> GetAllOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetAllOrdersParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    ///
    /// Returns a single order by its unique identifier.
    #[oai(
        path = "/orders/order/:order_id",
        method = "get",
        tag = "ApiTags::Orders"
    )]
    async fn get_order_by_id(&self, order_id: Path<String>) -> GetOrderByIdResponse {
        let uuid = match Uuid::parse_str(&order_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetOrderByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams { id: uuid })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Place an order from the user's cart
    ///
    /// Validates stock for every cart line, decrements stock, snapshots the
    /// cart into an order with status pending, and clears the cart.
    #[oai(path = "/orders/:user_id", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(
        &self,
        user_id: Path<String>,
        body: Json<PlaceOrderRequest>,
    ) -> PlaceOrderResponse {
        let address = body.0.shipping_address;

        match self
            .place_use_case
            .execute(PlaceOrderParams {
                user_id: UserId::new(user_id.0),
                street: address.street,
                city: address.city,
                state: address.state,
                zip: address.zip,
            })
            .await
        {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    404 => PlaceOrderResponse::NotFound(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an order's status
    ///
    /// Sets the order's status to one of: pending, processing, shipped,
    /// delivered, cancelled.
    #[oai(
        path = "/orders/:order_id/status",
        method = "put",
        tag = "ApiTags::Orders"
    )]
    async fn update_order_status(
        &self,
        order_id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let uuid = match Uuid::parse_str(&order_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        let status = match OrderStatus::from_str(&body.0.status) {
            Ok(status) => status,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_status".to_string(),
                }));
            }
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams { id: uuid, status })
            .await
        {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
