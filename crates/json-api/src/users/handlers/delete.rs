//! Delete Admin User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use showfloor_app::auth::Permission;

use crate::{extensions::*, state::State, users::handlers::into_status_error};

/// Delete Admin User Handler
///
/// Sessions belonging to the user are removed with it.
#[endpoint(
    tags("users"),
    summary = "Delete Admin User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Admin user deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Admin user not found"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    depot.require(Permission::AdminManage)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .delete_admin_user(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
