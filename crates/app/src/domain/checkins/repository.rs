//! Check-ins Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    checkins::records::{CheckInRecord, CheckInUuid},
    customers::records::CustomerUuid,
    events::records::EventUuid,
};

const CREATE_CHECKIN_SQL: &str = include_str!("sql/create_checkin.sql");
const LIST_CHECKINS_SQL: &str = include_str!("sql/list_checkins.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckInsRepository;

impl PgCheckInsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_checkin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CheckInUuid,
        event: EventUuid,
        customer: CustomerUuid,
        date: Date,
    ) -> Result<CheckInRecord, sqlx::Error> {
        query_as::<Postgres, CheckInRecord>(CREATE_CHECKIN_SQL)
            .bind(uuid.into_uuid())
            .bind(event.into_uuid())
            .bind(customer.into_uuid())
            .bind(SqlxDate::from(date))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_checkins(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<Vec<CheckInRecord>, sqlx::Error> {
        query_as::<Postgres, CheckInRecord>(LIST_CHECKINS_SQL)
            .bind(event.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CheckInRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CheckInUuid::from_uuid(row.try_get("uuid")?),
            event_uuid: EventUuid::from_uuid(row.try_get("event_uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            customer_code: row.try_get("customer_code")?,
            shop_name: row.try_get("shop_name")?,
            checkin_date: row.try_get::<SqlxDate, _>("checkin_date")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
