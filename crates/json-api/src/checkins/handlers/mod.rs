//! Check-in Handlers

pub(crate) mod create;
pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::checkins::records::CheckInRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckInResponse {
    pub uuid: Uuid,
    pub event_uuid: Uuid,
    pub customer_uuid: Uuid,
    pub customer_code: String,
    pub shop_name: String,
    /// Day of attendance in the event time zone (`YYYY-MM-DD`)
    pub checkin_date: String,
    pub created_at: String,
}

impl From<CheckInRecord> for CheckInResponse {
    fn from(checkin: CheckInRecord) -> Self {
        Self {
            uuid: checkin.uuid.into(),
            event_uuid: checkin.event_uuid.into(),
            customer_uuid: checkin.customer_uuid.into(),
            customer_code: checkin.customer_code,
            shop_name: checkin.shop_name,
            checkin_date: checkin.checkin_date.to_string(),
            created_at: checkin.created_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_checkin(
    event: showfloor_app::domain::events::records::EventUuid,
) -> CheckInRecord {
    use showfloor_app::domain::{checkins::records::CheckInUuid, customers::records::CustomerUuid};

    CheckInRecord {
        uuid: CheckInUuid::new(),
        event_uuid: event,
        customer_uuid: CustomerUuid::new(),
        customer_code: "SHOP-01".to_string(),
        shop_name: "Corner Shop".to_string(),
        checkin_date: jiff::civil::date(2026, 6, 2),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}
