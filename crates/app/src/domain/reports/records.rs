//! Report Records

use jiff::{Timestamp, civil::Date};

use crate::domain::{
    checkins::records::CheckInUuid, events::records::EventUuid, orders::records::OrderUuid,
};

/// Restricts a report to a subset of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub event: Option<EventUuid>,
}

/// One order line, flattened with its order, event and shop.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReportRow {
    pub order_uuid: OrderUuid,
    pub ordered_at: Timestamp,
    pub event_name: String,
    pub customer_code: String,
    pub shop_name: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckInReportRow {
    pub checkin_uuid: CheckInUuid,
    pub checked_in_at: Timestamp,
    pub checkin_date: Date,
    pub event_name: String,
    pub customer_code: String,
    pub shop_name: String,
}
