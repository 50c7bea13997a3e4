//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tokio::{sync::OnceCell, task};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::auth::{
    AuthServiceError, PermissionSet, SessionTokenVersion, format_session_token,
    generate_session_secret,
    models::{
        AdminRole, AdminRoleUpdate, AdminRoleUuid, AdminUser, AdminUserUuid, AuthSettings,
        IssuedSession, NewAdminRole, NewAdminUser, NewSession, Principal, SessionUuid,
    },
    parse_session_token,
    permissions::validate_grant,
    repository::PgAuthRepository,
    session_verifier, verifiers_match,
};

/// Hash a password with bcrypt off the async runtime.
///
/// # Errors
///
/// Returns an error when hashing fails or the blocking task panics.
pub async fn hash_password(password: Zeroizing<String>) -> Result<String, AuthServiceError> {
    let hash = task::spawn_blocking(move || bcrypt::hash(password.as_str(), bcrypt::DEFAULT_COST))
        .await??;

    Ok(hash)
}

async fn verify_password(
    password: Zeroizing<String>,
    hash: String,
) -> Result<bool, AuthServiceError> {
    let valid = task::spawn_blocking(move || bcrypt::verify(password.as_str(), &hash)).await??;

    Ok(valid)
}

fn validate_grants(grants: &[String]) -> Result<(), AuthServiceError> {
    for grant in grants {
        validate_grant(grant)?;
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), AuthServiceError> {
    if name.trim().is_empty() {
        return Err(AuthServiceError::InvalidData);
    }

    Ok(())
}

/// Verified against when the username is unknown, so the reply takes as long
/// as a wrong password.
const DECOY_PASSWORD: &str = "showfloor-decoy-password";

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
    settings: AuthSettings,
    decoy_hash: Arc<OnceCell<String>>,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, settings: AuthSettings) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
            settings,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Spend one bcrypt verification on a password that cannot match.
    async fn verify_decoy(&self, password: Zeroizing<String>) -> Result<(), AuthServiceError> {
        let hash = self
            .decoy_hash
            .get_or_try_init(|| hash_password(Zeroizing::new(DECOY_PASSWORD.to_string())))
            .await?;

        verify_password(password, hash.clone()).await?;

        Ok(())
    }

    /// Whether the submitted pair matches the environment admin.
    fn is_env_admin(&self, username: &str, password: &str) -> bool {
        self.settings.env_admin.as_ref().is_some_and(|admin| {
            // Evaluate both comparisons so a wrong username costs the same.
            let username_ok = verifiers_match(&admin.username, username);
            let password_ok = verifiers_match(admin.password.as_str(), password);

            username_ok && password_ok
        })
    }

    async fn start_session(
        &self,
        admin_user_uuid: Option<AdminUserUuid>,
        username: String,
        permissions: PermissionSet,
    ) -> Result<IssuedSession, AuthServiceError> {
        let session = SessionUuid::new();
        let version = SessionTokenVersion::V1;
        let secret = generate_session_secret();
        let token = format_session_token(session.into_uuid(), version, &secret);
        let token_hash = session_verifier(&session.into_uuid(), version, &secret);

        let expires_at = Timestamp::now()
            .checked_add(self.settings.session_ttl)
            .map_err(|_err| AuthServiceError::InvalidData)?;

        self.repository
            .create_session(&NewSession {
                uuid: session,
                admin_user_uuid,
                username: username.clone(),
                version,
                token_hash,
                expires_at,
            })
            .await?;

        info!(session_uuid = %session, username = %username, "admin session started");

        Ok(IssuedSession {
            token,
            principal: Principal {
                session,
                username,
                permissions,
            },
            expires_at,
        })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        username: &str,
        password: Zeroizing<String>,
    ) -> Result<IssuedSession, AuthServiceError> {
        if self.is_env_admin(username, &password) {
            return self
                .start_session(None, username.to_string(), PermissionSet::everything())
                .await;
        }

        let Some(user) = self.repository.find_user_credentials(username).await? else {
            self.verify_decoy(password).await?;

            warn!(username = %username, "login failed, unknown admin");

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password, user.password_hash).await? {
            warn!(username = %username, "login failed, wrong password");

            return Err(AuthServiceError::InvalidCredentials);
        }

        self.start_session(
            Some(user.uuid),
            user.username,
            PermissionSet::new(user.permissions),
        )
        .await
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed = parse_session_token(bearer_token).map_err(|_err| AuthServiceError::NotFound)?;

        let session = SessionUuid::from_uuid(parsed.session_uuid);

        let active = self
            .repository
            .find_active_session(session, parsed.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if active.version != parsed.version {
            return Err(AuthServiceError::NotFound);
        }

        let verifier = session_verifier(&parsed.session_uuid, parsed.version, &parsed.secret);

        if !verifiers_match(&active.token_hash, &verifier) {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; authentication does not depend on it.
        if let Err(error) = self.repository.touch_session(session).await {
            warn!(session_uuid = %session, error = %error, "failed to record session use");
        }

        Ok(Principal {
            session: active.uuid,
            username: active.username,
            permissions: PermissionSet::new(active.permissions),
        })
    }

    async fn logout(&self, session: SessionUuid) -> Result<(), AuthServiceError> {
        if self.repository.revoke_session(session).await? == 0 {
            return Err(AuthServiceError::NotFound);
        }

        info!(session_uuid = %session, "admin session revoked");

        Ok(())
    }

    async fn list_roles(&self) -> Result<Vec<AdminRole>, AuthServiceError> {
        Ok(self.repository.list_roles().await?)
    }

    async fn get_role_by_name(&self, name: &str) -> Result<AdminRole, AuthServiceError> {
        Ok(self.repository.get_role_by_name(name).await?)
    }

    async fn create_role(&self, role: NewAdminRole) -> Result<AdminRole, AuthServiceError> {
        validate_name(&role.name)?;
        validate_grants(&role.permissions)?;

        Ok(self.repository.create_role(role).await?)
    }

    async fn update_role(
        &self,
        role: AdminRoleUuid,
        update: AdminRoleUpdate,
    ) -> Result<AdminRole, AuthServiceError> {
        validate_name(&update.name)?;
        validate_grants(&update.permissions)?;

        Ok(self.repository.update_role(role, update).await?)
    }

    async fn delete_role(&self, role: AdminRoleUuid) -> Result<(), AuthServiceError> {
        if self.repository.delete_role(role).await? == 0 {
            return Err(AuthServiceError::NotFound);
        }

        Ok(())
    }

    async fn list_admin_users(&self) -> Result<Vec<AdminUser>, AuthServiceError> {
        Ok(self.repository.list_users().await?)
    }

    async fn create_admin_user(&self, user: NewAdminUser) -> Result<AdminUser, AuthServiceError> {
        validate_name(&user.username)?;

        if user.password.is_empty() {
            return Err(AuthServiceError::InvalidData);
        }

        let password_hash = hash_password(user.password).await?;

        let created = self
            .repository
            .create_user(user.uuid, user.username.trim(), &password_hash, user.role)
            .await?;

        info!(username = %created.username, role = %created.role_name, "created admin user");

        Ok(created)
    }

    async fn delete_admin_user(&self, user: AdminUserUuid) -> Result<(), AuthServiceError> {
        if self.repository.delete_user(user).await? == 0 {
            return Err(AuthServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange a username and password for a session token. The environment
    /// admin is tried before database users.
    async fn login(
        &self,
        username: &str,
        password: Zeroizing<String>,
    ) -> Result<IssuedSession, AuthServiceError>;

    /// Resolve a bearer token to the admin it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;

    /// Revoke a session.
    async fn logout(&self, session: SessionUuid) -> Result<(), AuthServiceError>;

    async fn list_roles(&self) -> Result<Vec<AdminRole>, AuthServiceError>;

    async fn get_role_by_name(&self, name: &str) -> Result<AdminRole, AuthServiceError>;

    /// Creates a role. Every grant must be a known permission or wildcard.
    async fn create_role(&self, role: NewAdminRole) -> Result<AdminRole, AuthServiceError>;

    async fn update_role(
        &self,
        role: AdminRoleUuid,
        update: AdminRoleUpdate,
    ) -> Result<AdminRole, AuthServiceError>;

    /// Deletes a role. Refused while any admin user holds it.
    async fn delete_role(&self, role: AdminRoleUuid) -> Result<(), AuthServiceError>;

    async fn list_admin_users(&self) -> Result<Vec<AdminUser>, AuthServiceError>;

    async fn create_admin_user(&self, user: NewAdminUser) -> Result<AdminUser, AuthServiceError>;

    async fn delete_admin_user(&self, user: AdminUserUuid) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use crate::{
        auth::{EnvAdmin, Permission},
        test::TestContext,
    };

    use super::*;

    fn secret(value: &str) -> Zeroizing<String> {
        Zeroizing::new(value.to_string())
    }

    fn service(ctx: &TestContext, ttl: SignedDuration) -> PgAuthService {
        PgAuthService::new(
            ctx.db.pool().clone(),
            AuthSettings {
                env_admin: Some(EnvAdmin {
                    username: "root".to_string(),
                    password: secret("hunter2"),
                }),
                session_ttl: ttl,
            },
        )
    }

    async fn role(auth: &PgAuthService, name: &str, grants: &[&str]) -> TestResult<AdminRole> {
        Ok(auth
            .create_role(NewAdminRole {
                uuid: AdminRoleUuid::new(),
                name: name.to_string(),
                description: None,
                permissions: grants.iter().map(ToString::to_string).collect(),
            })
            .await?)
    }

    #[tokio::test]
    async fn env_admin_login_grants_everything() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let issued = auth.login("root", secret("hunter2")).await?;

        assert!(issued.token.starts_with("sf_v1_"));

        let principal = auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(principal.username, "root");
        assert!(principal.permissions.allows(Permission::AdminManage));

        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let result = auth.login("root", secret("nope")).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_admin_still_runs_password_check() {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let result = auth.login("nobody", secret("guess")).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
        assert!(auth.decoy_hash.initialized(), "decoy hash was never verified");
    }

    #[tokio::test]
    async fn database_user_gets_role_permissions() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let viewer = role(&auth, "viewer", &["report:*", "dashboard:read"]).await?;

        auth.create_admin_user(NewAdminUser {
            uuid: AdminUserUuid::new(),
            username: "analyst".to_string(),
            password: secret("correct horse"),
            role: viewer.uuid,
        })
        .await?;

        let issued = auth.login("analyst", secret("correct horse")).await?;
        let principal = auth.authenticate_bearer(&issued.token).await?;

        assert!(principal.permissions.allows(Permission::ReportExport));
        assert!(principal.permissions.allows(Permission::DashboardRead));
        assert!(!principal.permissions.allows(Permission::EventCreate));

        let users = auth.list_admin_users().await?;

        assert_eq!(users.len(), 1);
        assert_eq!(users.first().map(|u| u.role_name.as_str()), Some("viewer"));

        Ok(())
    }

    #[tokio::test]
    async fn logout_revokes_token() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let issued = auth.login("root", secret("hunter2")).await?;

        auth.logout(issued.principal.session).await?;

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound after logout, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn expired_session_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_secs(-60));

        let issued = auth.login("root", secret("hunter2")).await?;

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound for expired session, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn tampered_secret_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let issued = auth.login("root", secret("hunter2")).await?;

        let (id, _) = issued.token.split_once('.').ok_or("token has no secret")?;
        let forged = format!("{id}.{}", "0".repeat(64));

        let result = auth.authenticate_bearer(&forged).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound for forged token, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_grant_is_rejected() {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let result = auth
            .create_role(NewAdminRole {
                uuid: AdminRoleUuid::new(),
                name: "bad".to_string(),
                description: None,
                permissions: vec!["event:explode".to_string()],
            })
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::UnknownPermission(_))),
            "expected UnknownPermission, got {result:?}"
        );
    }

    #[tokio::test]
    async fn role_in_use_cannot_be_deleted() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let editor = role(&auth, "editor", &["event:*"]).await?;

        let user = auth
            .create_admin_user(NewAdminUser {
                uuid: AdminUserUuid::new(),
                username: "ed".to_string(),
                password: secret("pw"),
                role: editor.uuid,
            })
            .await?;

        let result = auth.delete_role(editor.uuid).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        auth.delete_admin_user(user.uuid).await?;
        auth.delete_role(editor.uuid).await?;

        assert!(auth.list_roles().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn role_update_changes_live_sessions() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, SignedDuration::from_hours(1));

        let staff = role(&auth, "staff", &["order:read"]).await?;

        auth.create_admin_user(NewAdminUser {
            uuid: AdminUserUuid::new(),
            username: "sam".to_string(),
            password: secret("pw"),
            role: staff.uuid,
        })
        .await?;

        let issued = auth.login("sam", secret("pw")).await?;

        auth.update_role(
            staff.uuid,
            AdminRoleUpdate {
                name: "staff".to_string(),
                description: Some("Floor staff".to_string()),
                permissions: vec!["checkin:read".to_string()],
            },
        )
        .await?;

        let principal = auth.authenticate_bearer(&issued.token).await?;

        assert!(principal.permissions.allows(Permission::CheckInRead));
        assert!(!principal.permissions.allows(Permission::OrderRead));

        Ok(())
    }
}
