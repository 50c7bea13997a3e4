//! Role Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::auth::AdminRole;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoleResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Granted permission tags, e.g. `event:create` or `report:*`
    pub permissions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AdminRole> for RoleResponse {
    fn from(role: AdminRole) -> Self {
        Self {
            uuid: role.uuid.into(),
            name: role.name,
            description: role.description,
            permissions: role.permissions,
            created_at: role.created_at.to_string(),
            updated_at: role.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(super) fn make_role(uuid: showfloor_app::auth::AdminRoleUuid, grants: &[&str]) -> AdminRole {
    AdminRole {
        uuid,
        name: "viewer".to_string(),
        description: None,
        permissions: grants.iter().map(ToString::to_string).collect(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}
