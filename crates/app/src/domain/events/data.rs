//! Event Data

use jiff::civil::Date;

use crate::domain::events::{errors::EventsServiceError, records::EventUuid};

/// New Event Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub uuid: EventUuid,
    pub name: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub is_active: bool,
}

/// Event Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct EventUpdate {
    pub name: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub is_active: bool,
}

pub(crate) fn validate_schedule(
    name: &str,
    starts_on: Date,
    ends_on: Date,
) -> Result<(), EventsServiceError> {
    if name.trim().is_empty() || ends_on < starts_on {
        return Err(EventsServiceError::InvalidData);
    }

    Ok(())
}
