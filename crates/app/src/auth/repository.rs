//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::auth::{
    SessionTokenVersion,
    models::{
        ActiveSession, AdminRole, AdminRoleUpdate, AdminRoleUuid, AdminUser,
        AdminUserCredentials, AdminUserUuid, NewAdminRole, NewSession, SessionUuid,
    },
};

const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const FIND_ACTIVE_SESSION_SQL: &str = include_str!("sql/find_active_session.sql");
const TOUCH_SESSION_SQL: &str = include_str!("sql/touch_session.sql");
const REVOKE_SESSION_SQL: &str = include_str!("sql/revoke_session.sql");
const FIND_USER_CREDENTIALS_SQL: &str = include_str!("sql/find_user_credentials.sql");
const LIST_ROLES_SQL: &str = include_str!("sql/list_roles.sql");
const GET_ROLE_BY_NAME_SQL: &str = include_str!("sql/get_role_by_name.sql");
const CREATE_ROLE_SQL: &str = include_str!("sql/create_role.sql");
const UPDATE_ROLE_SQL: &str = include_str!("sql/update_role.sql");
const DELETE_ROLE_SQL: &str = include_str!("sql/delete_role.sql");
const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_session(&self, session: &NewSession) -> Result<(), sqlx::Error> {
        query(CREATE_SESSION_SQL)
            .bind(session.uuid.into_uuid())
            .bind(session.admin_user_uuid.map(AdminUserUuid::into_uuid))
            .bind(&session.username)
            .bind(session.version.as_i16())
            .bind(&session.token_hash)
            .bind(SqlxTimestamp::from(session.expires_at))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_active_session(
        &self,
        session: SessionUuid,
        version: SessionTokenVersion,
    ) -> Result<Option<ActiveSession>, sqlx::Error> {
        query_as::<Postgres, ActiveSession>(FIND_ACTIVE_SESSION_SQL)
            .bind(session.into_uuid())
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_session(&self, session: SessionUuid) -> Result<(), sqlx::Error> {
        query(TOUCH_SESSION_SQL)
            .bind(session.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn revoke_session(&self, session: SessionUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REVOKE_SESSION_SQL)
            .bind(session.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn find_user_credentials(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserCredentials>, sqlx::Error> {
        query_as::<Postgres, AdminUserCredentials>(FIND_USER_CREDENTIALS_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_roles(&self) -> Result<Vec<AdminRole>, sqlx::Error> {
        query_as::<Postgres, AdminRole>(LIST_ROLES_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn get_role_by_name(&self, name: &str) -> Result<AdminRole, sqlx::Error> {
        query_as::<Postgres, AdminRole>(GET_ROLE_BY_NAME_SQL)
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn create_role(&self, role: NewAdminRole) -> Result<AdminRole, sqlx::Error> {
        query_as::<Postgres, AdminRole>(CREATE_ROLE_SQL)
            .bind(role.uuid.into_uuid())
            .bind(role.name)
            .bind(role.description)
            .bind(role.permissions)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn update_role(
        &self,
        role: AdminRoleUuid,
        update: AdminRoleUpdate,
    ) -> Result<AdminRole, sqlx::Error> {
        query_as::<Postgres, AdminRole>(UPDATE_ROLE_SQL)
            .bind(role.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(update.permissions)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_role(&self, role: AdminRoleUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ROLE_SQL)
            .bind(role.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<AdminUser>, sqlx::Error> {
        query_as::<Postgres, AdminUser>(LIST_USERS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn create_user(
        &self,
        uuid: AdminUserUuid,
        username: &str,
        password_hash: &str,
        role: AdminRoleUuid,
    ) -> Result<AdminUser, sqlx::Error> {
        query_as::<Postgres, AdminUser>(CREATE_USER_SQL)
            .bind(uuid.into_uuid())
            .bind(username)
            .bind(password_hash)
            .bind(role.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_user(&self, user: AdminUserUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ActiveSession {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let version = SessionTokenVersion::try_from(row.try_get::<i16, _>("version")?).map_err(
            |e| sqlx::Error::ColumnDecode {
                index: "version".to_string(),
                source: Box::new(e),
            },
        )?;

        Ok(Self {
            uuid: SessionUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            version,
            token_hash: row.try_get("token_hash")?,
            permissions: row.try_get("permissions")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AdminUserCredentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdminUserUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            permissions: row.try_get("permissions")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AdminRole {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdminRoleUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            permissions: row.try_get("permissions")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AdminUser {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdminUserUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            role_uuid: AdminRoleUuid::from_uuid(row.try_get("role_uuid")?),
            role_name: row.try_get("role_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
