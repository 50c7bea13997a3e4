//! Dashboard Repository

use sqlx::{FromRow, Postgres, Transaction, postgres::PgRow, query_as};

use crate::{
    database::try_get_u64,
    domain::{dashboard::records::EventTotals, events::records::EventUuid},
};

const EVENT_TOTALS_SQL: &str = include_str!("sql/event_totals.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDashboardRepository;

impl PgDashboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn event_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<EventTotals, sqlx::Error> {
        query_as::<Postgres, EventTotals>(EVENT_TOTALS_SQL)
            .bind(event.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for EventTotals {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            orders: try_get_u64(row, "orders")?,
            checkins: try_get_u64(row, "checkins")?,
            shops: try_get_u64(row, "shops")?,
            total_quantity: try_get_u64(row, "total_quantity")?,
            revenue: try_get_u64(row, "revenue")?,
        })
    }
}
