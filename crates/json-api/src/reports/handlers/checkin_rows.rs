//! Check-in Report Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    reports::{
        errors::into_status_error,
        handlers::{CheckInReportResponse, filter},
    },
    state::State,
};

/// Check-in Report Handler
#[endpoint(
    tags("reports"),
    summary = "Check-in Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "One page of check-ins"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid page or filter"),
    ),
)]
pub(crate) async fn handler(
    event: QueryParam<Uuid, false>,
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<CheckInReportResponse>, StatusError> {
    depot.require(Permission::ReportRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = page.into_page_request(per_page)?;

    let rows = state
        .app
        .reports
        .checkin_rows(filter(event.into_inner()), page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(rows.into()))
}
