//! Leaderboard

pub mod errors;
pub mod ranking;
pub(crate) mod repository;
pub mod service;

pub use errors::LeaderboardServiceError;
pub use ranking::{Leaderboard, LeaderboardEntry, LeaderboardRow, ProductQuantity};
pub use service::*;
