//! Get Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    customers::{errors::into_status_error, handlers::CustomerResponse},
    extensions::*,
    state::State,
};

/// Get Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Get Shop",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shop found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shop not found"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    depot.require(Permission::CustomerRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .get_customer(customer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
