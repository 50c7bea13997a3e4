//! Events service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::events::{
        data::{EventUpdate, NewEvent, validate_schedule},
        errors::EventsServiceError,
        records::{EventRecord, EventUuid},
        repository::PgEventsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgEventsService {
    db: Db,
    repository: PgEventsRepository,
}

impl PgEventsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgEventsRepository::new(),
        }
    }
}

#[async_trait]
impl EventsService for PgEventsService {
    async fn list_events(&self) -> Result<Vec<EventRecord>, EventsServiceError> {
        let mut tx = self.db.begin().await?;

        let events = self.repository.list_events(&mut tx).await?;

        tx.commit().await?;

        Ok(events)
    }

    async fn list_open_events(&self, on: Date) -> Result<Vec<EventRecord>, EventsServiceError> {
        let mut tx = self.db.begin().await?;

        let events = self.repository.list_open_events(&mut tx, on).await?;

        tx.commit().await?;

        Ok(events)
    }

    async fn get_event(&self, event: EventUuid) -> Result<EventRecord, EventsServiceError> {
        let mut tx = self.db.begin().await?;

        let event = self.repository.get_event(&mut tx, event).await?;

        tx.commit().await?;

        Ok(event)
    }

    async fn create_event(&self, event: NewEvent) -> Result<EventRecord, EventsServiceError> {
        validate_schedule(&event.name, event.starts_on, event.ends_on)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_event(&mut tx, event).await?;

        tx.commit().await?;

        info!(event_uuid = %created.uuid, name = %created.name, "created event");

        Ok(created)
    }

    async fn update_event(
        &self,
        event: EventUuid,
        update: EventUpdate,
    ) -> Result<EventRecord, EventsServiceError> {
        validate_schedule(&update.name, update.starts_on, update.ends_on)?;

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_event(&mut tx, event, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_event(&self, event: EventUuid) -> Result<(), EventsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_event(&mut tx, event).await?;

        if rows_affected == 0 {
            return Err(EventsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait EventsService: Send + Sync {
    /// Retrieves every event that has not been deleted.
    async fn list_events(&self) -> Result<Vec<EventRecord>, EventsServiceError>;

    /// Retrieves the events shops may attend on the given day.
    async fn list_open_events(&self, on: Date) -> Result<Vec<EventRecord>, EventsServiceError>;

    /// Retrieve a single event.
    async fn get_event(&self, event: EventUuid) -> Result<EventRecord, EventsServiceError>;

    /// Creates a new event.
    async fn create_event(&self, event: NewEvent) -> Result<EventRecord, EventsServiceError>;

    /// Replaces the details of an event.
    async fn update_event(
        &self,
        event: EventUuid,
        update: EventUpdate,
    ) -> Result<EventRecord, EventsServiceError>;

    /// Soft-deletes an event.
    async fn delete_event(&self, event: EventUuid) -> Result<(), EventsServiceError>;
}
