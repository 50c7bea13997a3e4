//! Delete Event Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{events::errors::into_status_error, extensions::*, state::State};

/// Delete Event Handler
#[endpoint(
    tags("events"),
    summary = "Delete Event",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Event deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
    ),
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    depot.require(Permission::EventDelete)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .events
        .delete_event(event.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
