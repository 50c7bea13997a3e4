//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Healthcheck Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Build version of the running API
    pub version: String,
    /// What the API considers today, in the configured event time zone
    pub event_date: String,
}

/// Healthcheck Handler
///
/// Reports the running version and the venue date used for check-ins and
/// orders, so a wrong `EVENT_TIME_ZONE` shows up before shops do.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        event_date: state.today().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::{Zoned, tz::TimeZone};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, public_service};

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_reports_version_and_event_date() -> TestResult {
        let service = public_service(
            Mocks::default(),
            Router::with_path("healthcheck").get(handler),
        );

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await
            .take_json()
            .await?;

        let today = Zoned::now().with_time_zone(TimeZone::UTC).date();

        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.event_date, today.to_string());

        Ok(())
    }
}
