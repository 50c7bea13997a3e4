//! Check-ins service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        checkins::{
            data::NewCheckIn,
            errors::CheckInsServiceError,
            records::CheckInRecord,
            repository::PgCheckInsRepository,
        },
        customers::{data::normalize_code, repository::PgCustomersRepository},
        events::{records::EventUuid, repository::PgEventsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckInsService {
    db: Db,
    repository: PgCheckInsRepository,
    customers: PgCustomersRepository,
    events: PgEventsRepository,
}

impl PgCheckInsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCheckInsRepository::new(),
            customers: PgCustomersRepository::new(),
            events: PgEventsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckInsService for PgCheckInsService {
    async fn check_in(
        &self,
        event: EventUuid,
        checkin: NewCheckIn,
    ) -> Result<CheckInRecord, CheckInsServiceError> {
        let code = normalize_code(&checkin.customer_code);

        let mut tx = self.db.begin().await?;

        let customer = self
            .customers
            .find_customer_by_code(&mut tx, &code)
            .await?
            .ok_or(CheckInsServiceError::CustomerNotFound)?;

        let event = self
            .events
            .find_event(&mut tx, event)
            .await?
            .ok_or(CheckInsServiceError::EventNotFound)?;

        if !event.is_open_on(checkin.date) {
            debug!(event_uuid = %event.uuid, date = %checkin.date, "check-in refused, event closed");

            return Err(CheckInsServiceError::EventClosed);
        }

        let created = self
            .repository
            .create_checkin(&mut tx, checkin.uuid, event.uuid, customer.uuid, checkin.date)
            .await?;

        tx.commit().await?;

        info!(
            event_uuid = %created.event_uuid,
            customer_code = %created.customer_code,
            date = %created.checkin_date,
            "shop checked in"
        );

        Ok(created)
    }

    async fn list_checkins(
        &self,
        event: EventUuid,
    ) -> Result<Vec<CheckInRecord>, CheckInsServiceError> {
        let mut tx = self.db.begin().await?;

        self.events
            .find_event(&mut tx, event)
            .await?
            .ok_or(CheckInsServiceError::EventNotFound)?;

        let checkins = self.repository.list_checkins(&mut tx, event).await?;

        tx.commit().await?;

        Ok(checkins)
    }
}

#[automock]
#[async_trait]
pub trait CheckInsService: Send + Sync {
    /// Records a shop's attendance at an open event for the given day.
    async fn check_in(
        &self,
        event: EventUuid,
        checkin: NewCheckIn,
    ) -> Result<CheckInRecord, CheckInsServiceError>;

    /// Check-ins for an event, newest first.
    async fn list_checkins(
        &self,
        event: EventUuid,
    ) -> Result<Vec<CheckInRecord>, CheckInsServiceError>;
}
