//! Check-in Handler

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

use showfloor_app::domain::checkins::{data::NewCheckIn, records::CheckInUuid};

use crate::{
    checkins::{errors::into_status_error, handlers::CheckInResponse},
    extensions::*,
    observability,
    state::State,
};

/// Check-in Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckInRequest {
    /// Shop code, matched case-insensitively
    pub customer_code: String,
}

/// Check-in Handler
///
/// Records that a shop attended an open event today.
#[endpoint(
    tags("checkins"),
    summary = "Check In",
    responses(
        (status_code = StatusCode::CREATED, description = "Shop checked in"),
        (status_code = StatusCode::NOT_FOUND, description = "Event or shop not found"),
        (status_code = StatusCode::CONFLICT, description = "Shop already checked in today"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Event is not open today"),
    ),
)]
#[tracing::instrument(
    name = "checkins.create",
    skip(event, json, depot, res),
    fields(event_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    json: JsonBody<CheckInRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckInResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = event.into_inner();

    tracing::Span::current().record("event_uuid", tracing::field::display(event));

    let checkin = state
        .app
        .checkins
        .check_in(
            event.into(),
            NewCheckIn {
                uuid: CheckInUuid::new(),
                customer_code: json.into_inner().customer_code,
                date: state.today(),
            },
        )
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        checkin_uuid = %checkin.uuid,
        customer_code = %checkin.customer_code,
        "shop checked in"
    );

    observability::record_check_in();

    res.status_code(StatusCode::CREATED);

    Ok(Json(checkin.into()))
}
