//! Check-in Data

use jiff::civil::Date;

use crate::domain::checkins::records::CheckInUuid;

/// New Check-in Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckIn {
    pub uuid: CheckInUuid,
    pub customer_code: String,
    pub date: Date,
}
