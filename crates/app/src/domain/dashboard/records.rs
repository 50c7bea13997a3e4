//! Dashboard Records

use crate::domain::{events::records::EventRecord, leaderboard::Leaderboard};

/// Activity counters for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTotals {
    pub orders: u64,
    pub checkins: u64,
    /// Distinct shops that checked in or ordered.
    pub shops: u64,
    pub total_quantity: u64,
    pub revenue: u64,
}

/// Everything the admin dashboard shows for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub event: EventRecord,
    pub totals: EventTotals,
    pub leaderboard: Leaderboard,
}
