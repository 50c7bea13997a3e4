//! Reports Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{try_get_u32, try_get_u64},
    domain::{
        checkins::records::CheckInUuid,
        events::records::EventUuid,
        orders::records::OrderUuid,
        reports::records::{CheckInReportRow, OrderReportRow, ReportFilter},
    },
    pagination::PageRequest,
};

const ORDER_ROWS_SQL: &str = include_str!("sql/order_rows.sql");
const COUNT_ORDER_ROWS_SQL: &str = include_str!("sql/count_order_rows.sql");
const CHECKIN_ROWS_SQL: &str = include_str!("sql/checkin_rows.sql");
const COUNT_CHECKIN_ROWS_SQL: &str = include_str!("sql/count_checkin_rows.sql");

/// `LIMIT`/`OFFSET` pair; a `None` limit returns every remaining row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Window {
    limit: Option<i64>,
    offset: i64,
}

impl Window {
    pub(crate) const ALL: Self = Self {
        limit: None,
        offset: 0,
    };
}

impl From<PageRequest> for Window {
    fn from(page: PageRequest) -> Self {
        Self {
            limit: Some(page.limit()),
            offset: page.offset(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn order_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: ReportFilter,
        window: Window,
    ) -> Result<Vec<OrderReportRow>, sqlx::Error> {
        query_as::<Postgres, OrderReportRow>(ORDER_ROWS_SQL)
            .bind(filter.event.map(EventUuid::into_uuid))
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_order_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: ReportFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_ORDER_ROWS_SQL)
            .bind(filter.event.map(EventUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    pub(crate) async fn checkin_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: ReportFilter,
        window: Window,
    ) -> Result<Vec<CheckInReportRow>, sqlx::Error> {
        query_as::<Postgres, CheckInReportRow>(CHECKIN_ROWS_SQL)
            .bind(filter.event.map(EventUuid::into_uuid))
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_checkin_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: ReportFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_CHECKIN_ROWS_SQL)
            .bind(filter.event.map(EventUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderReportRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            ordered_at: row.try_get::<SqlxTimestamp, _>("ordered_at")?.to_jiff(),
            event_name: row.try_get("event_name")?,
            customer_code: row.try_get("customer_code")?,
            shop_name: row.try_get("shop_name")?,
            sku: row.try_get("sku")?,
            product_name: row.try_get("product_name")?,
            quantity: try_get_u32(row, "quantity")?,
            unit_price: try_get_u64(row, "unit_price")?,
            line_total: try_get_u64(row, "line_total")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CheckInReportRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            checkin_uuid: CheckInUuid::from_uuid(row.try_get("checkin_uuid")?),
            checked_in_at: row.try_get::<SqlxTimestamp, _>("checked_in_at")?.to_jiff(),
            checkin_date: row.try_get::<SqlxDate, _>("checkin_date")?.to_jiff(),
            event_name: row.try_get("event_name")?,
            customer_code: row.try_get("customer_code")?,
            shop_name: row.try_get("shop_name")?,
        })
    }
}
