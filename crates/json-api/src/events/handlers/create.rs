//! Create Event Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::{
    auth::Permission,
    domain::events::{data::NewEvent, records::EventUuid},
};

use crate::{
    events::{
        errors::into_status_error,
        handlers::{EventResponse, parse_date},
    },
    extensions::*,
    state::State,
};

/// Create Event Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateEventRequest {
    /// Generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the event (`YYYY-MM-DD`)
    pub starts_on: String,
    /// Last day of the event, inclusive (`YYYY-MM-DD`)
    pub ends_on: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<CreateEventRequest> for NewEvent {
    type Error = StatusError;

    fn try_from(request: CreateEventRequest) -> Result<Self, Self::Error> {
        Ok(NewEvent {
            uuid: request.uuid.map_or_else(EventUuid::new, Into::into),
            starts_on: parse_date(&request.starts_on, "starts_on")?,
            ends_on: parse_date(&request.ends_on, "ends_on")?,
            name: request.name,
            description: request.description,
            is_active: request.is_active,
        })
    }
}

/// Create Event Handler
#[endpoint(
    tags("events"),
    summary = "Create Event",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Event created"),
        (status_code = StatusCode::CONFLICT, description = "Event already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateEventRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EventResponse>, StatusError> {
    depot.require(Permission::EventCreate)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = NewEvent::try_from(json.into_inner())?;

    let event = state
        .app
        .events
        .create_event(event)
        .await
        .map_err(into_status_error)?;

    tracing::info!(event_uuid = %event.uuid, name = %event.name, "created event");

    res.created_at(format!("/events/{}", event.uuid))?;

    Ok(Json(EventResponse::new(event, state.today())))
}
