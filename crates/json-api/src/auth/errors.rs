//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound => StatusError::not_found(),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::AlreadyExists => StatusError::conflict().brief("Name already taken"),
        AuthServiceError::UnknownPermission(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        AuthServiceError::InvalidReference
        | AuthServiceError::MissingRequiredData
        | AuthServiceError::InvalidData => StatusError::bad_request().brief("Invalid payload"),
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process session token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Password(source) => {
            error!("password hashing failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Task(source) => {
            error!("password task failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
