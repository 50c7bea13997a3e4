//! Get Event Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    events::{errors::into_status_error, handlers::EventResponse},
    extensions::*,
    state::State,
};

/// Get Event Handler
///
/// Returns an event whether or not it is open today.
#[endpoint(
    tags("events"),
    summary = "Get Event",
    responses(
        (status_code = StatusCode::OK, description = "Event found"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
    ),
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<EventResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let event = state
        .app
        .events
        .get_event(event.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(EventResponse::new(event, state.today())))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::domain::events::{EventsServiceError, records::EventUuid};

    use crate::test_helpers::{Mocks, make_event, public_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        public_service(mocks, Router::with_path("events/{event}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_event() -> TestResult {
        let uuid = EventUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_get_event()
            .once()
            .withf(move |event| *event == uuid)
            .return_once(move |_| Ok(make_event(uuid)));

        let mut res = TestClient::get(format!("http://example.com/events/{uuid}"))
            .send(&make_service(mocks))
            .await;

        let body: EventResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.starts_on, "2026-06-01");
        assert_eq!(body.ends_on, "2026-06-03");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_event_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .events
            .expect_get_event()
            .once()
            .return_once(|_| Err(EventsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/events/{}", EventUuid::new()))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_uuid_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.events.expect_get_event().never();

        let res = TestClient::get("http://example.com/events/not-a-uuid")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
