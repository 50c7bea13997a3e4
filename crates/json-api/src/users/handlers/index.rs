//! Admin User Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    state::State,
    users::handlers::{AdminUserResponse, into_status_error},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminUsersResponse {
    pub users: Vec<AdminUserResponse>,
}

/// Admin User Index Handler
#[endpoint(tags("users"), summary = "List Admin Users", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdminUsersResponse>, StatusError> {
    depot.require(Permission::AdminManage)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .auth
        .list_admin_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(AdminUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
