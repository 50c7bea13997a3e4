//! Leaderboard Errors

use salvo::http::StatusError;
use tracing::error;

use showfloor_app::domain::leaderboard::LeaderboardServiceError;

pub(crate) fn into_status_error(error: LeaderboardServiceError) -> StatusError {
    match error {
        LeaderboardServiceError::EventNotFound => StatusError::not_found().brief("Event not found"),
        LeaderboardServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        LeaderboardServiceError::Sql(source) => {
            error!("leaderboard storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
