//! Report Handlers

pub(crate) mod checkin_export;
pub(crate) mod checkin_rows;
pub(crate) mod order_export;
pub(crate) mod order_rows;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::{
    domain::reports::records::{CheckInReportRow, OrderReportRow, ReportFilter},
    pagination::Page,
};

use crate::reports::export::CsvRow;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderReportRowResponse {
    pub order_uuid: Uuid,
    pub ordered_at: String,
    pub event_name: String,
    pub customer_code: String,
    pub shop_name: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

impl From<OrderReportRow> for OrderReportRowResponse {
    fn from(row: OrderReportRow) -> Self {
        Self {
            order_uuid: row.order_uuid.into(),
            ordered_at: row.ordered_at.to_string(),
            event_name: row.event_name,
            customer_code: row.customer_code,
            shop_name: row.shop_name,
            sku: row.sku,
            product_name: row.product_name,
            quantity: row.quantity,
            unit_price: row.unit_price,
            line_total: row.line_total,
        }
    }
}

impl CsvRow for OrderReportRowResponse {
    const HEADERS: &'static [&'static str] = &[
        "order_uuid",
        "ordered_at",
        "event_name",
        "customer_code",
        "shop_name",
        "sku",
        "product_name",
        "quantity",
        "unit_price",
        "line_total",
    ];
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckInReportRowResponse {
    pub checkin_uuid: Uuid,
    pub checked_in_at: String,
    pub checkin_date: String,
    pub event_name: String,
    pub customer_code: String,
    pub shop_name: String,
}

impl From<CheckInReportRow> for CheckInReportRowResponse {
    fn from(row: CheckInReportRow) -> Self {
        Self {
            checkin_uuid: row.checkin_uuid.into(),
            checked_in_at: row.checked_in_at.to_string(),
            checkin_date: row.checkin_date.to_string(),
            event_name: row.event_name,
            customer_code: row.customer_code,
            shop_name: row.shop_name,
        }
    }
}

impl CsvRow for CheckInReportRowResponse {
    const HEADERS: &'static [&'static str] = &[
        "checkin_uuid",
        "checked_in_at",
        "checkin_date",
        "event_name",
        "customer_code",
        "shop_name",
    ];
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderReportResponse {
    pub items: Vec<OrderReportRowResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<OrderReportRow>> for OrderReportResponse {
    fn from(page: Page<OrderReportRow>) -> Self {
        let page = page.map(Into::into);

        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckInReportResponse {
    pub items: Vec<CheckInReportRowResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<CheckInReportRow>> for CheckInReportResponse {
    fn from(page: Page<CheckInReportRow>) -> Self {
        let page = page.map(Into::into);

        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

fn filter(event: Option<Uuid>) -> ReportFilter {
    ReportFilter {
        event: event.map(Into::into),
    }
}

#[cfg(test)]
pub(crate) fn make_order_row(code: &str) -> OrderReportRow {
    OrderReportRow {
        order_uuid: showfloor_app::domain::orders::records::OrderUuid::new(),
        ordered_at: jiff::Timestamp::UNIX_EPOCH,
        event_name: "Summer Fair".to_string(),
        customer_code: code.to_string(),
        shop_name: "Corner Shop".to_string(),
        sku: "PACK3".to_string(),
        product_name: "Pack 3".to_string(),
        quantity: 2,
        unit_price: 300,
        line_total: 600,
    }
}

#[cfg(test)]
pub(crate) fn make_checkin_row(code: &str) -> CheckInReportRow {
    CheckInReportRow {
        checkin_uuid: showfloor_app::domain::checkins::records::CheckInUuid::new(),
        checked_in_at: jiff::Timestamp::UNIX_EPOCH,
        checkin_date: jiff::civil::date(2026, 6, 2),
        event_name: "Summer Fair".to_string(),
        customer_code: code.to_string(),
        shop_name: "Corner Shop".to_string(),
    }
}
