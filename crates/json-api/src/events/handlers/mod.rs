//! Event Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod open;
pub(crate) mod update;

use std::string::ToString;

use jiff::civil::Date;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::events::records::EventRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// First day of the event (`YYYY-MM-DD`)
    pub starts_on: String,
    /// Last day of the event, inclusive
    pub ends_on: String,
    pub is_active: bool,
    /// Whether check-ins and orders are accepted today
    pub is_open: bool,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl EventResponse {
    pub(crate) fn new(event: EventRecord, today: Date) -> Self {
        Self {
            is_open: event.is_open_on(today),
            uuid: event.uuid.into(),
            name: event.name,
            description: event.description,
            starts_on: event.starts_on.to_string(),
            ends_on: event.ends_on.to_string(),
            is_active: event.is_active,
            created_at: event.created_at.to_string(),
            updated_at: event.updated_at.to_string(),
            deleted_at: event.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Parse a `YYYY-MM-DD` field from a request body.
pub(crate) fn parse_date(value: &str, field: &str) -> Result<Date, StatusError> {
    value
        .parse::<Date>()
        .map_err(|_error| StatusError::bad_request().brief(format!("{field} must be YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::test_helpers::make_event;

    use super::*;

    #[test]
    fn open_flag_follows_today() {
        let event = make_event(showfloor_app::domain::events::records::EventUuid::new());

        assert!(EventResponse::new(event.clone(), date(2026, 6, 2)).is_open);
        assert!(!EventResponse::new(event, date(2026, 6, 4)).is_open);
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(parse_date("2026-06-01", "starts_on").is_ok());
        assert!(parse_date("01/06/2026", "starts_on").is_err());
    }
}
