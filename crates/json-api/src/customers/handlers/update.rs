//! Update Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use showfloor_app::{auth::Permission, domain::customers::data::CustomerUpdate};

use crate::{
    customers::{
        errors::into_status_error,
        handlers::{CustomerDetails, CustomerResponse},
    },
    extensions::*,
    state::State,
};

impl From<CustomerDetails> for CustomerUpdate {
    fn from(details: CustomerDetails) -> Self {
        CustomerUpdate {
            code: details.code,
            shop_name: details.shop_name,
            contact_name: details.contact_name,
            phone: details.phone,
            province: details.province,
        }
    }
}

/// Update Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Update Shop",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shop updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Shop not found"),
        (status_code = StatusCode::CONFLICT, description = "Shop code already in use"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    json: JsonBody<CustomerDetails>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    depot.require(Permission::CustomerUpdate)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .update_customer(customer.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
