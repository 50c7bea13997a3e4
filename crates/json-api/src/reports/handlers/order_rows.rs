//! Order Report Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    reports::{
        errors::into_status_error,
        handlers::{OrderReportResponse, filter},
    },
    state::State,
};

/// Order Report Handler
///
/// One row per order line, newest order first, optionally for one event.
#[endpoint(
    tags("reports"),
    summary = "Order Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "One page of order lines"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid page or filter"),
    ),
)]
pub(crate) async fn handler(
    event: QueryParam<Uuid, false>,
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<OrderReportResponse>, StatusError> {
    depot.require(Permission::ReportRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = page.into_page_request(per_page)?;

    let rows = state
        .app
        .reports
        .order_rows(filter(event.into_inner()), page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::{
        domain::{events::records::EventUuid, reports::records::ReportFilter},
        pagination::{Page, PageRequest},
    };

    use crate::{
        reports::handlers::make_order_row,
        test_helpers::{Mocks, admin_service, service_with_grants},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/reports/orders").get(handler)
    }

    #[tokio::test]
    async fn test_report_is_paginated_and_filtered() -> TestResult {
        let event = EventUuid::new();
        let request = PageRequest::new(Some(2), Some(1))?;

        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_order_rows()
            .once()
            .withf(move |f, p| *f == ReportFilter { event: Some(event) } && *p == request)
            .return_once(move |_, p| Ok(Page::new(vec![make_order_row("SHOP-02")], p, 3)));

        let body: OrderReportResponse = TestClient::get(format!(
            "http://example.com/admin/reports/orders?event={event}&page=2&per_page=1"
        ))
        .send(&admin_service(mocks, route()))
        .await
        .take_json()
        .await?;

        assert_eq!(body.page, 2);
        assert_eq!(body.total, 3);
        assert_eq!(body.total_pages, 3);
        assert_eq!(body.items.first().map(|r| r.line_total), Some(600));

        Ok(())
    }

    #[tokio::test]
    async fn test_defaults_apply_without_query() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_order_rows()
            .once()
            .withf(|f, p| f.event.is_none() && *p == PageRequest::default())
            .return_once(|_, p| Ok(Page::new(vec![], p, 0)));

        let body: OrderReportResponse = TestClient::get("http://example.com/admin/reports/orders")
            .send(&admin_service(mocks, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.per_page, 25);
        assert_eq!(body.total_pages, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_per_page_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.reports.expect_order_rows().never();

        let res = TestClient::get("http://example.com/admin/reports/orders?per_page=101")
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_requires_report_read() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.reports.expect_order_rows().never();

        let res = TestClient::get("http://example.com/admin/reports/orders")
            .send(&service_with_grants(mocks, &["report:export"], route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
