//! Check-ins service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Unique constraint guarding one check-in per shop, event and day.
const ONCE_PER_DAY_CONSTRAINT: &str = "checkins_once_per_day";

#[derive(Debug, Error)]
pub enum CheckInsServiceError {
    #[error("shop already checked in to this event today")]
    AlreadyCheckedIn,

    #[error("check-in already exists")]
    AlreadyExists,

    #[error("shop not found")]
    CustomerNotFound,

    #[error("event not found")]
    EventNotFound,

    #[error("event is not open")]
    EventClosed,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckInsServiceError {
    fn from(error: Error) -> Self {
        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match db_error.kind() {
            ErrorKind::UniqueViolation
                if db_error.constraint() == Some(ONCE_PER_DAY_CONSTRAINT) =>
            {
                Self::AlreadyCheckedIn
            }
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            ErrorKind::Other | _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_storage_error() {
        assert!(matches!(
            CheckInsServiceError::from(Error::RowNotFound),
            CheckInsServiceError::Sql(_)
        ));
    }
}
