//! Update Role Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::auth::{AdminRoleUpdate, Permission};

use crate::{
    extensions::*,
    roles::{errors::into_status_error, handlers::RoleResponse},
    state::State,
};

/// Update Role Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl From<UpdateRoleRequest> for AdminRoleUpdate {
    fn from(request: UpdateRoleRequest) -> Self {
        AdminRoleUpdate {
            name: request.name,
            description: request.description,
            permissions: request.permissions,
        }
    }
}

/// Update Role Handler
///
/// Permission changes apply to sessions already signed in with this role.
#[endpoint(
    tags("roles"),
    summary = "Update Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Role updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown permission or blank name"),
    ),
)]
pub(crate) async fn handler(
    role: PathParam<Uuid>,
    json: JsonBody<UpdateRoleRequest>,
    depot: &mut Depot,
) -> Result<Json<RoleResponse>, StatusError> {
    depot.require(Permission::RoleManage)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let role = state
        .app
        .auth
        .update_role(role.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(role.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::auth::{AdminRoleUuid, AuthServiceError};

    use crate::{
        roles::handlers::make_role,
        test_helpers::{Mocks, admin_service},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/roles/{role}").put(handler))
    }

    #[tokio::test]
    async fn test_update_role_returns_200() -> TestResult {
        let uuid = AdminRoleUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_update_role()
            .once()
            .withf(move |role, update| *role == uuid && update.permissions == ["checkin:read"])
            .return_once(move |_, _| Ok(make_role(uuid, &["checkin:read"])));

        let res = TestClient::put(format!("http://example.com/admin/roles/{uuid}"))
            .json(&json!({ "name": "viewer", "permissions": ["checkin:read"] }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_role_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_update_role()
            .once()
            .return_once(|_, _| Err(AuthServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/admin/roles/{}",
            AdminRoleUuid::new()
        ))
        .json(&json!({ "name": "viewer", "permissions": [] }))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
