//! Admin permissions.
//!
//! Permissions are `resource:action` tags. A role may also be granted `*`
//! (everything) or `resource:*` (every action on one resource).

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Grant that allows every permission.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    EventRead,
    EventCreate,
    EventUpdate,
    EventDelete,
    ProductRead,
    ProductCreate,
    ProductUpdate,
    ProductDelete,
    CustomerRead,
    CustomerCreate,
    CustomerUpdate,
    CustomerDelete,
    OrderRead,
    OrderDelete,
    CheckInRead,
    ReportRead,
    ReportExport,
    DashboardRead,
    RoleManage,
    AdminManage,
}

impl Permission {
    pub const ALL: [Self; 20] = [
        Self::EventRead,
        Self::EventCreate,
        Self::EventUpdate,
        Self::EventDelete,
        Self::ProductRead,
        Self::ProductCreate,
        Self::ProductUpdate,
        Self::ProductDelete,
        Self::CustomerRead,
        Self::CustomerCreate,
        Self::CustomerUpdate,
        Self::CustomerDelete,
        Self::OrderRead,
        Self::OrderDelete,
        Self::CheckInRead,
        Self::ReportRead,
        Self::ReportExport,
        Self::DashboardRead,
        Self::RoleManage,
        Self::AdminManage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EventRead => "event:read",
            Self::EventCreate => "event:create",
            Self::EventUpdate => "event:update",
            Self::EventDelete => "event:delete",
            Self::ProductRead => "product:read",
            Self::ProductCreate => "product:create",
            Self::ProductUpdate => "product:update",
            Self::ProductDelete => "product:delete",
            Self::CustomerRead => "customer:read",
            Self::CustomerCreate => "customer:create",
            Self::CustomerUpdate => "customer:update",
            Self::CustomerDelete => "customer:delete",
            Self::OrderRead => "order:read",
            Self::OrderDelete => "order:delete",
            Self::CheckInRead => "checkin:read",
            Self::ReportRead => "report:read",
            Self::ReportExport => "report:export",
            Self::DashboardRead => "dashboard:read",
            Self::RoleManage => "role:manage",
            Self::AdminManage => "admin:manage",
        }
    }

    /// The `resource` half of the tag.
    #[must_use]
    pub fn resource(self) -> &'static str {
        self.as_str()
            .split_once(':')
            .map_or(self.as_str(), |(resource, _)| resource)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission `{0}`")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| UnknownPermission(value.to_string()))
    }
}

/// Check that a grant is `*`, a known permission, or `resource:*` for a
/// known resource.
///
/// # Errors
///
/// Returns the offending tag when it is not recognised.
pub fn validate_grant(grant: &str) -> Result<(), UnknownPermission> {
    if grant == WILDCARD || Permission::from_str(grant).is_ok() {
        return Ok(());
    }

    match grant.split_once(':') {
        Some((resource, "*")) if Permission::ALL.iter().any(|p| p.resource() == resource) => {
            Ok(())
        }
        _ => Err(UnknownPermission(grant.to_string())),
    }
}

/// The grants held by an authenticated admin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    grants: Vec<String>,
}

impl PermissionSet {
    #[must_use]
    pub fn new(grants: Vec<String>) -> Self {
        Self { grants }
    }

    /// A set holding the wildcard grant.
    #[must_use]
    pub fn everything() -> Self {
        Self::new(vec![WILDCARD.to_string()])
    }

    #[must_use]
    pub fn grants(&self) -> &[String] {
        &self.grants
    }

    #[must_use]
    pub fn allows(&self, permission: Permission) -> bool {
        self.grants.iter().any(|grant| {
            grant == WILDCARD
                || grant == permission.as_str()
                || grant
                    .strip_suffix(":*")
                    .is_some_and(|resource| resource == permission.resource())
        })
    }
}
