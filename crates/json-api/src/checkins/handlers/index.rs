//! Event Check-ins Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    checkins::{errors::into_status_error, handlers::CheckInResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckInsResponse {
    pub checkins: Vec<CheckInResponse>,
}

/// Event Check-ins Handler
///
/// Every check-in recorded for an event, newest first.
#[endpoint(
    tags("checkins"),
    summary = "List Event Check-ins",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Check-ins"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
    ),
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckInsResponse>, StatusError> {
    depot.require(Permission::CheckInRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let checkins = state
        .app
        .checkins
        .list_checkins(event.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckInsResponse {
        checkins: checkins.into_iter().map(Into::into).collect(),
    }))
}
