//! Role Errors

use salvo::http::StatusError;

use showfloor_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound => StatusError::not_found().brief("Role not found"),
        AuthServiceError::AlreadyExists => {
            StatusError::conflict().brief("A role with this name already exists")
        }
        AuthServiceError::InvalidReference => {
            StatusError::conflict().brief("Role is still assigned to admin users")
        }
        other => crate::auth::into_status_error(other),
    }
}
