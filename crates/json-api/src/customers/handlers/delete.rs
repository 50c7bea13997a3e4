//! Delete Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{customers::errors::into_status_error, extensions::*, state::State};

/// Delete Customer Handler
///
/// The shop's code becomes available again; past orders and check-ins remain.
#[endpoint(
    tags("customers"),
    summary = "Delete Shop",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Shop deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Shop not found"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    depot.require(Permission::CustomerDelete)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .customers
        .delete_customer(customer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
