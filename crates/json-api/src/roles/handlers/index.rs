//! Role Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    roles::{errors::into_status_error, handlers::RoleResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RolesResponse {
    pub roles: Vec<RoleResponse>,
}

/// Role Index Handler
#[endpoint(tags("roles"), summary = "List Roles", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RolesResponse>, StatusError> {
    depot.require(Permission::RoleManage)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let roles = state
        .app
        .auth
        .list_roles()
        .await
        .map_err(into_status_error)?;

    Ok(Json(RolesResponse {
        roles: roles.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::auth::AdminRoleUuid;

    use crate::{
        roles::handlers::make_role,
        test_helpers::{Mocks, admin_service, service_with_grants},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/roles").get(handler)
    }

    #[tokio::test]
    async fn test_index_returns_roles() -> TestResult {
        let uuid = AdminRoleUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_list_roles()
            .once()
            .return_once(move || Ok(vec![make_role(uuid, &["report:*"])]));

        let response: RolesResponse = TestClient::get("http://example.com/admin/roles")
            .send(&admin_service(mocks, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.roles.len(), 1, "expected one role");
        assert_eq!(
            response.roles.first().map(|r| r.permissions.clone()),
            Some(vec!["report:*".to_string()])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_permission_returns_403() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.auth.expect_list_roles().never();

        let res = TestClient::get("http://example.com/admin/roles")
            .send(&service_with_grants(mocks, &["event:*"], route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
