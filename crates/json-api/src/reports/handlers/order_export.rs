//! Order Export Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    reports::{
        errors::into_status_error,
        export,
        handlers::{OrderReportRowResponse, filter},
    },
    state::State,
};

/// Order Export Handler
///
/// Every matching order line as a CSV download.
#[endpoint(
    tags("reports"),
    summary = "Export Order Report",
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
        .export_order_rows(filter(event.into_inner()))
        .await
        .map_err(into_status_error)?;

    tracing::info!(rows = rows.len(), "exporting order report");

    let body = export::render(rows.into_iter().map(OrderReportRowResponse::from))
        .or_500("failed to render order report")?;

    export::attach(res, "orders.csv", body)
}
