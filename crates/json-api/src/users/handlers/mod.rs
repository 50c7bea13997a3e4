//! Admin User Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::auth::{AdminUser, AuthServiceError};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminUserResponse {
    pub uuid: Uuid,
    pub username: String,
    pub role_uuid: Uuid,
    pub role_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AdminUser> for AdminUserResponse {
    fn from(user: AdminUser) -> Self {
        Self {
            uuid: user.uuid.into(),
            username: user.username,
            role_uuid: user.role_uuid.into(),
            role_name: user.role_name,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NotFound => StatusError::not_found().brief("Admin user not found"),
        AuthServiceError::AlreadyExists => StatusError::conflict().brief("Username already taken"),
        AuthServiceError::InvalidReference => StatusError::bad_request().brief("Unknown role"),
        other => crate::auth::into_status_error(other),
    }
}
