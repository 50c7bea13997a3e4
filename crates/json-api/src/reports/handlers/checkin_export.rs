//! Check-in Export Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    reports::{
        errors::into_status_error,
        export,
        handlers::{CheckInReportRowResponse, filter},
    },
    state::State,
};

/// Check-in Export Handler
#[endpoint(
    tags("reports"),
    summary = "Export Check-in Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "CSV attachment"),
    ),
)]
pub(crate) async fn handler(
    event: QueryParam<Uuid, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    depot.require(Permission::ReportExport)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rows = state
        .app
        .reports
        .export_checkin_rows(filter(event.into_inner()))
        .await
        .map_err(into_status_error)?;

    let body = export::render(rows.into_iter().map(CheckInReportRowResponse::from))
        .or_500("failed to render check-in report")?;

    export::attach(res, "checkins.csv", body)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::domain::reports::ReportsServiceError;

    use crate::{
        reports::handlers::make_checkin_row,
        test_helpers::{Mocks, admin_service, storage_error},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/reports/checkins.csv").get(handler)
    }

    #[tokio::test]
    async fn test_export_lists_every_checkin() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_export_checkin_rows()
            .once()
            .withf(|f| f.event.is_none())
            .return_once(|_| {
                Ok(vec![
                    make_checkin_row("SHOP-01"),
                    make_checkin_row("SHOP-02"),
                    make_checkin_row("SHOP-03"),
                ])
            });

        let mut res = TestClient::get("http://example.com/admin/reports/checkins.csv")
            .send(&admin_service(mocks, route()))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.lines().count(), 4, "expected header plus three rows");
        assert!(body.starts_with("checkin_uuid,checked_in_at,checkin_date,"));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_export_checkin_rows()
            .once()
            .return_once(|_| Err(ReportsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/admin/reports/checkins.csv")
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
