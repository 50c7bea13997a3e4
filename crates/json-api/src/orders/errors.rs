//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::CustomerNotFound => {
            StatusError::not_found().brief("No shop is registered with this code")
        }
        OrdersServiceError::EventNotFound => StatusError::not_found().brief("Event not found"),
        OrdersServiceError::EventClosed => {
            StatusError::unprocessable_entity().brief("Event is not taking orders today")
        }
        OrdersServiceError::InvalidReference => StatusError::unprocessable_entity()
            .brief("Order references a product that is unknown or not available"),
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief(
                "Invalid order payload: at least one item, each product once, quantities above zero",
            )
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
