//! Create Admin User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::Deserialize;
use uuid::Uuid;
use zeroize::Zeroizing;

use showfloor_app::auth::{AdminUserUuid, NewAdminUser, Permission};

use crate::{
    extensions::*,
    state::State,
    users::handlers::{AdminUserResponse, into_status_error},
};

/// Create Admin User Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct CreateAdminUserRequest {
    /// Generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub username: String,
    pub password: String,
    pub role_uuid: Uuid,
}

impl std::fmt::Debug for CreateAdminUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAdminUserRequest")
            .field("username", &self.username)
            .field("role_uuid", &self.role_uuid)
            .finish_non_exhaustive()
    }
}

impl From<CreateAdminUserRequest> for NewAdminUser {
    fn from(request: CreateAdminUserRequest) -> Self {
        NewAdminUser {
            uuid: request.uuid.map_or_else(AdminUserUuid::new, Into::into),
            username: request.username,
            password: Zeroizing::new(request.password),
            role: request.role_uuid.into(),
        }
    }
}

/// Create Admin User Handler
#[endpoint(
    tags("users"),
    summary = "Create Admin User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Admin user created"),
        (status_code = StatusCode::CONFLICT, description = "Username taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown role or blank fields"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAdminUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AdminUserResponse>, StatusError> {
    let admin = depot.require(Permission::AdminManage)?.username.clone();
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .auth
        .create_admin_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(username = %user.username, role = %user.role_name, admin = %admin, "created admin user");

    res.status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::auth::{AdminRoleUuid, AdminUser, AuthServiceError};

    use crate::test_helpers::{Mocks, admin_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/users").post(handler))
    }

    #[tokio::test]
    async fn test_create_user_returns_201() -> TestResult {
        let role = AdminRoleUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_create_admin_user()
            .once()
            .withf(move |user| {
                user.username == "analyst" && user.password.as_str() == "s3cret" && user.role == role
            })
            .return_once(move |user| {
                Ok(AdminUser {
                    uuid: user.uuid,
                    username: user.username,
                    role_uuid: role,
                    role_name: "viewer".to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/admin/users")
            .json(&json!({
                "username": "analyst",
                "password": "s3cret",
                "role_uuid": role.into_uuid(),
            }))
            .send(&make_service(mocks))
            .await;

        let body: AdminUserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.role_name, "viewer");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_role_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_create_admin_user()
            .once()
            .return_once(|_| Err(AuthServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/admin/users")
            .json(&json!({
                "username": "analyst",
                "password": "s3cret",
                "role_uuid": AdminRoleUuid::new().into_uuid(),
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
