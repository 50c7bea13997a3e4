//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("A shop with this code already exists")
        }
        CustomersServiceError::InvalidReference
        | CustomersServiceError::MissingRequiredData
        | CustomersServiceError::InvalidData => StatusError::bad_request()
            .brief("Invalid shop payload: code and shop_name are required"),
        CustomersServiceError::Sql(source) => {
            error!("customer storage error: {source}");

            StatusError::internal_server_error()
        }
        CustomersServiceError::NotFound => StatusError::not_found().brief("Shop not found"),
    }
}
