//! Create Role Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::auth::{AdminRoleUuid, NewAdminRole, Permission};

use crate::{
    extensions::*,
    roles::{errors::into_status_error, handlers::RoleResponse},
    state::State,
};

/// Create Role Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRoleRequest {
    /// Generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl From<CreateRoleRequest> for NewAdminRole {
    fn from(request: CreateRoleRequest) -> Self {
        NewAdminRole {
            uuid: request.uuid.map_or_else(AdminRoleUuid::new, Into::into),
            name: request.name,
            description: request.description,
            permissions: request.permissions,
        }
    }
}

/// Create Role Handler
#[endpoint(
    tags("roles"),
    summary = "Create Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Role created"),
        (status_code = StatusCode::CONFLICT, description = "Role name taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown permission or blank name"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRoleRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RoleResponse>, StatusError> {
    let admin = depot.require(Permission::RoleManage)?.username.clone();
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let role = state
        .app
        .auth
        .create_role(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(role = %role.name, admin = %admin, "created role");

    res.status_code(StatusCode::CREATED);

    Ok(Json(role.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::auth::{AuthServiceError, UnknownPermission};

    use crate::{
        roles::handlers::make_role,
        test_helpers::{Mocks, admin_service},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/roles").post(handler))
    }

    #[tokio::test]
    async fn test_create_role_returns_201() -> TestResult {
        let uuid = AdminRoleUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_create_role()
            .once()
            .withf(move |role| {
                role.uuid == uuid && role.name == "viewer" && role.permissions == ["report:*"]
            })
            .return_once(move |_| Ok(make_role(uuid, &["report:*"])));

        let mut res = TestClient::post("http://example.com/admin/roles")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "name": "viewer",
                "permissions": ["report:*"],
            }))
            .send(&make_service(mocks))
            .await;

        let body: RoleResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_permission_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.auth.expect_create_role().once().return_once(|_| {
            Err(AuthServiceError::UnknownPermission(UnknownPermission(
                "event:explode".to_string(),
            )))
        });

        let res = TestClient::post("http://example.com/admin/roles")
            .json(&json!({ "name": "bad", "permissions": ["event:explode"] }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
