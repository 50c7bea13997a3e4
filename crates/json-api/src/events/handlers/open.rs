//! Open Events Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    events::{errors::into_status_error, handlers::EventResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventsResponse {
    pub events: Vec<EventResponse>,
}

/// Open Events Handler
///
/// Events accepting check-ins and orders today, in the venue time zone.
#[endpoint(tags("events"), summary = "List Open Events")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<EventsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let today = state.today();

    let events = state
        .app
        .events
        .list_open_events(today)
        .await
        .map_err(into_status_error)?;

    Ok(Json(EventsResponse {
        events: events
            .into_iter()
            .map(|event| EventResponse::new(event, today))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::domain::events::{EventsServiceError, records::EventUuid};

    use crate::test_helpers::{Mocks, make_event, public_service, storage_error};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        public_service(mocks, Router::with_path("events").get(handler))
    }

    #[tokio::test]
    async fn test_open_events_are_listed() -> TestResult {
        let uuid = EventUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_list_open_events()
            .once()
            .return_once(move |_| Ok(vec![make_event(uuid)]));

        let response: EventsResponse = TestClient::get("http://example.com/events")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.events.first().map(|e| e.uuid),
            Some(uuid.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_list_open_events()
            .once()
            .return_once(|_| Err(EventsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/events")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
