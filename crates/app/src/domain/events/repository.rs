//! Events Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::events::{
    data::{EventUpdate, NewEvent},
    records::{EventRecord, EventUuid},
};

const LIST_EVENTS_SQL: &str = include_str!("sql/list_events.sql");
const LIST_OPEN_EVENTS_SQL: &str = include_str!("sql/list_open_events.sql");
const GET_EVENT_SQL: &str = include_str!("sql/get_event.sql");
const CREATE_EVENT_SQL: &str = include_str!("sql/create_event.sql");
const UPDATE_EVENT_SQL: &str = include_str!("sql/update_event.sql");
const DELETE_EVENT_SQL: &str = include_str!("sql/delete_event.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEventsRepository;

impl PgEventsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        query_as::<Postgres, EventRecord>(LIST_EVENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_open_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        on: Date,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        query_as::<Postgres, EventRecord>(LIST_OPEN_EVENTS_SQL)
            .bind(SqlxDate::from(on))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<EventRecord, sqlx::Error> {
        query_as::<Postgres, EventRecord>(GET_EVENT_SQL)
            .bind(event.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<Option<EventRecord>, sqlx::Error> {
        query_as::<Postgres, EventRecord>(GET_EVENT_SQL)
            .bind(event.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: NewEvent,
    ) -> Result<EventRecord, sqlx::Error> {
        query_as::<Postgres, EventRecord>(CREATE_EVENT_SQL)
            .bind(event.uuid.into_uuid())
            .bind(event.name)
            .bind(event.description)
            .bind(SqlxDate::from(event.starts_on))
            .bind(SqlxDate::from(event.ends_on))
            .bind(event.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
        update: EventUpdate,
    ) -> Result<EventRecord, sqlx::Error> {
        query_as::<Postgres, EventRecord>(UPDATE_EVENT_SQL)
            .bind(event.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(SqlxDate::from(update.starts_on))
            .bind(SqlxDate::from(update.ends_on))
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_EVENT_SQL)
            .bind(event.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for EventRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: EventUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            starts_on: row.try_get::<SqlxDate, _>("starts_on")?.to_jiff(),
            ends_on: row.try_get::<SqlxDate, _>("ends_on")?.to_jiff(),
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
