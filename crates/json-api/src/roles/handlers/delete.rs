//! Delete Role Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{extensions::*, roles::errors::into_status_error, state::State};

/// Delete Role Handler
#[endpoint(
    tags("roles"),
    summary = "Delete Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Role deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::CONFLICT, description = "Role still assigned"),
    ),
)]
pub(crate) async fn handler(
    role: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    depot.require(Permission::RoleManage)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .delete_role(role.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use showfloor_app::auth::{AdminRoleUuid, AuthServiceError};

    use crate::test_helpers::{Mocks, admin_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/roles/{role}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_role_returns_204() -> TestResult {
        let uuid = AdminRoleUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_delete_role()
            .once()
            .withf(move |role| *role == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/admin/roles/{uuid}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_assigned_role_returns_409() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_delete_role()
            .once()
            .return_once(|_| Err(AuthServiceError::InvalidReference));

        let res = TestClient::delete(format!(
            "http://example.com/admin/roles/{}",
            AdminRoleUuid::new()
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
