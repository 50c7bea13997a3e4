//! Check-in Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::checkins::CheckInsServiceError;

pub(crate) fn into_status_error(error: CheckInsServiceError) -> StatusError {
    match error {
        CheckInsServiceError::AlreadyCheckedIn | CheckInsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Shop has already checked in to this event today")
        }
        CheckInsServiceError::CustomerNotFound => {
            StatusError::not_found().brief("No shop is registered with this code")
        }
        CheckInsServiceError::EventNotFound => StatusError::not_found().brief("Event not found"),
        CheckInsServiceError::EventClosed => {
            StatusError::unprocessable_entity().brief("Event is not open for check-in today")
        }
        CheckInsServiceError::InvalidReference
        | CheckInsServiceError::MissingRequiredData
        | CheckInsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid check-in payload")
        }
        CheckInsServiceError::Sql(source) => {
            error!("check-in storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
