//! Update Event Handler

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

use showfloor_app::{auth::Permission, domain::events::data::EventUpdate};

use crate::{
    events::{
        errors::into_status_error,
        handlers::{EventResponse, parse_date},
    },
    extensions::*,
    state::State,
};

/// Update Event Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateEventRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_on: String,
    pub ends_on: String,
    pub is_active: bool,
}

impl TryFrom<UpdateEventRequest> for EventUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateEventRequest) -> Result<Self, Self::Error> {
        Ok(EventUpdate {
            starts_on: parse_date(&request.starts_on, "starts_on")?,
            ends_on: parse_date(&request.ends_on, "ends_on")?,
            name: request.name,
            description: request.description,
            is_active: request.is_active,
        })
    }
}

/// Update Event Handler
#[endpoint(
    tags("events"),
    summary = "Update Event",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Event updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "events.update",
    skip(event, json, depot),
    fields(event_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    json: JsonBody<UpdateEventRequest>,
    depot: &mut Depot,
) -> Result<Json<EventResponse>, StatusError> {
    depot.require(Permission::EventUpdate)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = event.into_inner();
    let update = EventUpdate::try_from(json.into_inner())?;

    tracing::Span::current().record("event_uuid", tracing::field::display(event));

    let event = state
        .app
        .events
        .update_event(event.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(EventResponse::new(event, state.today())))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::domain::events::{EventsServiceError, records::EventUuid};

    use crate::test_helpers::{Mocks, admin_service, make_event, service_with_grants};

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/events/{event}").put(handler)
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Summer Fair",
            "starts_on": "2026-06-01",
            "ends_on": "2026-06-05",
            "is_active": false,
        })
    }

    #[tokio::test]
    async fn test_update_event_returns_200() -> TestResult {
        let uuid = EventUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_update_event()
            .once()
            .withf(move |event, update| *event == uuid && !update.is_active)
            .return_once(move |_, _| Ok(make_event(uuid)));

        let res = TestClient::put(format!("http://example.com/admin/events/{uuid}"))
            .json(&body())
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_event_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_update_event()
            .once()
            .return_once(|_, _| Err(EventsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/events/{}", EventUuid::new()))
            .json(&body())
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_read_only_admin_cannot_update() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.events.expect_update_event().never();

        let res = TestClient::put(format!("http://example.com/admin/events/{}", EventUuid::new()))
            .json(&body())
            .send(&service_with_grants(mocks, &["event:read"], route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
