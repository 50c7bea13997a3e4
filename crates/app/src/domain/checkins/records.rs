//! Check-in Records

use jiff::{Timestamp, civil::Date};

use crate::{
    domain::{customers::records::CustomerUuid, events::records::EventUuid},
    uuids::TypedUuid,
};

/// Check-in UUID
pub type CheckInUuid = TypedUuid<CheckInRecord>;

/// Check-in Record
///
/// `checkin_date` is the civil date in the event time zone; a shop checks in
/// to an event at most once per date.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInRecord {
    pub uuid: CheckInUuid,
    pub event_uuid: EventUuid,
    pub customer_uuid: CustomerUuid,
    pub customer_code: String,
    pub shop_name: String,
    pub checkin_date: Date,
    pub created_at: Timestamp,
}
