//! Auth data models.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use zeroize::Zeroizing;

use crate::{
    auth::{PermissionSet, SessionTokenVersion},
    uuids::TypedUuid,
};

/// Admin Role UUID
pub type AdminRoleUuid = TypedUuid<AdminRole>;

/// Admin User UUID
pub type AdminUserUuid = TypedUuid<AdminUser>;

/// Session UUID
pub type SessionUuid = TypedUuid<Principal>;

/// A named bundle of permission grants.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRole {
    pub uuid: AdminRoleUuid,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAdminRole {
    pub uuid: AdminRoleUuid,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminRoleUpdate {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

/// A database-backed admin account. The password hash never leaves the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub uuid: AdminUserUuid,
    pub username: String,
    pub role_uuid: AdminRoleUuid,
    pub role_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone)]
pub struct NewAdminUser {
    pub uuid: AdminUserUuid,
    pub username: String,
    pub password: Zeroizing<String>,
    pub role: AdminRoleUuid,
}

impl fmt::Debug for NewAdminUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAdminUser")
            .field("uuid", &self.uuid)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Admin user row with the secret material needed to check a password.
#[derive(Debug, Clone)]
pub(crate) struct AdminUserCredentials {
    pub uuid: AdminUserUuid,
    pub username: String,
    pub password_hash: String,
    pub permissions: Vec<String>,
}

/// Session data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveSession {
    pub uuid: SessionUuid,
    pub username: String,
    pub version: SessionTokenVersion,
    /// SHA-256 verifier for the token secret material.
    pub token_hash: String,
    pub permissions: Vec<String>,
}

/// New session persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub uuid: SessionUuid,
    /// `None` for the environment admin.
    pub admin_user_uuid: Option<AdminUserUuid>,
    pub username: String,
    pub version: SessionTokenVersion,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// The authenticated admin behind a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub session: SessionUuid,
    pub username: String,
    pub permissions: PermissionSet,
}

/// Login result carrying the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub principal: Principal,
    pub expires_at: Timestamp,
}

/// The bootstrap admin configured through the environment.
#[derive(Clone)]
pub struct EnvAdmin {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for EnvAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvAdmin")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Settings for admin authentication.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Tried before database users when present.
    pub env_admin: Option<EnvAdmin>,
    pub session_ttl: SignedDuration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            env_admin: None,
            session_ttl: SignedDuration::from_hours(12),
        }
    }
}
