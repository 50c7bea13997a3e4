//! Event Records

use jiff::{Timestamp, civil::Date};

use crate::uuids::TypedUuid;

/// Event UUID
pub type EventUuid = TypedUuid<EventRecord>;

/// Event Record
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub uuid: EventUuid,
    pub name: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl EventRecord {
    /// Whether shops may check in and order on the given day.
    #[must_use]
    pub fn is_open_on(&self, date: Date) -> bool {
        self.is_active && self.deleted_at.is_none() && self.starts_on <= date && date <= self.ends_on
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;

    fn make_event(is_active: bool) -> EventRecord {
        EventRecord {
            uuid: EventUuid::new(),
            name: "Summer Fair".to_string(),
            description: None,
            starts_on: date(2026, 6, 1),
            ends_on: date(2026, 6, 3),
            is_active,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn open_on_every_day_of_range_inclusive() {
        let event = make_event(true);

        assert!(event.is_open_on(date(2026, 6, 1)));
        assert!(event.is_open_on(date(2026, 6, 2)));
        assert!(event.is_open_on(date(2026, 6, 3)));
    }

    #[test]
    fn closed_outside_range() {
        let event = make_event(true);

        assert!(!event.is_open_on(date(2026, 5, 31)));
        assert!(!event.is_open_on(date(2026, 6, 4)));
    }

    #[test]
    fn inactive_event_is_never_open() {
        let event = make_event(false);

        assert!(!event.is_open_on(date(2026, 6, 2)));
    }
}
