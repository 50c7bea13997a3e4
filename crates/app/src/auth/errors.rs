//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::{SessionTokenError, UnknownPermission};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("not found")]
    NotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("already exists")]
    AlreadyExists,

    #[error("related resource not found or still in use")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    UnknownPermission(#[from] UnknownPermission),

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[from] SessionTokenError),

    #[error("password hashing error")]
    Password(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
