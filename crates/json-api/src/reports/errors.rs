//! Report Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::reports::ReportsServiceError;

pub(crate) fn into_status_error(error: ReportsServiceError) -> StatusError {
    match error {
        ReportsServiceError::Sql(source) => {
            error!("report storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
