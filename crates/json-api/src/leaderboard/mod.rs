//! Leaderboard

mod errors;
pub(crate) mod handler;

pub(crate) use errors::into_status_error;
pub(crate) use handler::LeaderboardResponse;
