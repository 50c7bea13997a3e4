//! Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use showfloor_app::{
    auth::Permission,
    domain::dashboard::{DashboardServiceError, records::EventTotals},
};

use crate::{events::EventResponse, extensions::*, leaderboard::LeaderboardResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TotalsResponse {
    pub orders: u64,
    pub checkins: u64,
    /// Distinct shops that checked in or ordered
    pub shops: u64,
    pub total_quantity: u64,
    pub revenue: u64,
}

impl From<EventTotals> for TotalsResponse {
    fn from(totals: EventTotals) -> Self {
        Self {
            orders: totals.orders,
            checkins: totals.checkins,
            shops: totals.shops,
            total_quantity: totals.total_quantity,
            revenue: totals.revenue,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub event: EventResponse,
    pub totals: TotalsResponse,
    pub leaderboard: LeaderboardResponse,
}

fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::EventNotFound => StatusError::not_found().brief("Event not found"),
        DashboardServiceError::Sql(source) => {
            error!("dashboard storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Dashboard Handler
#[endpoint(
    tags("dashboard"),
    summary = "Event Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Event summary"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
    ),
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    depot.require(Permission::DashboardRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .dashboard
        .event_summary(event.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(DashboardResponse {
        event: EventResponse::new(summary.event, state.today()),
        totals: summary.totals.into(),
        leaderboard: summary.leaderboard.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::domain::{
        dashboard::records::EventSummary, events::records::EventUuid, leaderboard::Leaderboard,
    };

    use crate::test_helpers::{Mocks, admin_service, make_event, service_with_grants, storage_error};

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/dashboard/{event}").get(handler)
    }

    #[tokio::test]
    async fn test_dashboard_returns_totals() -> TestResult {
        let event = EventUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .dashboard
            .expect_event_summary()
            .once()
            .withf(move |e| *e == event)
            .return_once(move |_| {
                Ok(EventSummary {
                    event: make_event(event),
                    totals: EventTotals {
                        orders: 4,
                        checkins: 3,
                        shops: 3,
                        total_quantity: 20,
                        revenue: 2_000,
                    },
                    leaderboard: Leaderboard::default(),
                })
            });

        let body: DashboardResponse =
            TestClient::get(format!("http://example.com/admin/dashboard/{event}"))
                .send(&admin_service(mocks, route()))
                .await
                .take_json()
                .await?;

        assert_eq!(body.event.uuid, event.into_uuid());
        assert_eq!(body.totals.orders, 4);
        assert_eq!(body.totals.revenue, 2_000);
        assert!(body.leaderboard.entries.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_errors_map_to_status_codes() -> TestResult {
        for (error, status) in [
            (DashboardServiceError::EventNotFound, StatusCode::NOT_FOUND),
            (DashboardServiceError::Sql(storage_error()), StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let mut mocks = Mocks::default();

            mocks
                .dashboard
                .expect_event_summary()
                .once()
                .return_once(move |_| Err(error));

            let res = TestClient::get(format!(
                "http://example.com/admin/dashboard/{}",
                EventUuid::new()
            ))
            .send(&admin_service(mocks, route()))
            .await;

            assert_eq!(res.status_code, Some(status), "unexpected status for {status}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_requires_dashboard_read() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.dashboard.expect_event_summary().never();

        let res = TestClient::get(format!(
            "http://example.com/admin/dashboard/{}",
            EventUuid::new()
        ))
        .send(&service_with_grants(mocks, &["report:read"], route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
