//! Showfloor Domain Concerns

pub mod checkins;
pub mod customers;
pub mod dashboard;
pub mod events;
pub mod leaderboard;
pub mod orders;
pub mod products;
pub mod reports;
