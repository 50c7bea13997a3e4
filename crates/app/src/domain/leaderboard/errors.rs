//! Leaderboard service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardServiceError {
    #[error("event not found")]
    EventNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for LeaderboardServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
