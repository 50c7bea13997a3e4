//! Event Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::events::EventsServiceError;

pub(crate) fn into_status_error(error: EventsServiceError) -> StatusError {
    match error {
        EventsServiceError::AlreadyExists => StatusError::conflict().brief("Event already exists"),
        EventsServiceError::InvalidReference
        | EventsServiceError::MissingRequiredData
        | EventsServiceError::InvalidData => StatusError::bad_request()
            .brief("Invalid event payload: name is required and ends_on may not precede starts_on"),
        EventsServiceError::Sql(source) => {
            error!("event storage error: {source}");

            StatusError::internal_server_error()
        }
        EventsServiceError::NotFound => StatusError::not_found().brief("Event not found"),
    }
}
