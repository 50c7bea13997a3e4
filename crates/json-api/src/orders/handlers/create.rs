//! Place Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::orders::{
    data::{NewOrder, NewOrderItem},
    records::OrderUuid,
};

use crate::{
    extensions::*,
    observability,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemRequest {
    pub product: Uuid,
    /// Number of packages
    pub quantity: u32,
}

/// Place Order Request
///
/// Prices come from the catalogue; the request carries no amounts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlaceOrderRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub customer_code: String,
    pub items: Vec<OrderItemRequest>,
}

/// Place Order Handler
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Event or shop not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Event closed or product unavailable"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(event, json, depot, res),
    fields(event_uuid = tracing::field::Empty, items = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = event.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("event_uuid", tracing::field::display(event));
    span.record("items", request.items.len());

    let order = NewOrder {
        uuid: request.uuid.map_or_else(OrderUuid::new, Into::into),
        customer_code: request.customer_code,
        date: state.today(),
        items: request
            .items
            .into_iter()
            .map(|item| NewOrderItem {
                product: item.product.into(),
                quantity: item.quantity,
            })
            .collect(),
    };

    let order = state
        .app
        .orders
        .place_order(event.into(), order)
        .await
        .map_err(into_status_error)?;

    observability::record_order(order.total_quantity);

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
