//! Leaderboard service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        events::{records::EventUuid, repository::PgEventsRepository},
        leaderboard::{
            errors::LeaderboardServiceError, ranking::Leaderboard,
            repository::PgLeaderboardRepository,
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgLeaderboardService {
    db: Db,
    repository: PgLeaderboardRepository,
    events: PgEventsRepository,
    products: PgProductsRepository,
}

impl PgLeaderboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgLeaderboardRepository::new(),
            events: PgEventsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl LeaderboardService for PgLeaderboardService {
    async fn event_leaderboard(
        &self,
        event: EventUuid,
        limit: Option<u32>,
    ) -> Result<Leaderboard, LeaderboardServiceError> {
        let mut tx = self.db.begin().await?;

        self.events
            .find_event(&mut tx, event)
            .await?
            .ok_or(LeaderboardServiceError::EventNotFound)?;

        let rows = self.repository.leaderboard_rows(&mut tx, event, None).await?;

        tx.commit().await?;

        Ok(Leaderboard::rank(rows, limit))
    }

    async fn product_leaderboard(
        &self,
        event: EventUuid,
        product: ProductUuid,
        limit: Option<u32>,
    ) -> Result<Leaderboard, LeaderboardServiceError> {
        let mut tx = self.db.begin().await?;

        self.events
            .find_event(&mut tx, event)
            .await?
            .ok_or(LeaderboardServiceError::EventNotFound)?;

        self.products
            .get_products(&mut tx, &[product])
            .await?
            .first()
            .ok_or(LeaderboardServiceError::ProductNotFound)?;

        let rows = self
            .repository
            .leaderboard_rows(&mut tx, event, Some(product))
            .await?;

        tx.commit().await?;

        Ok(Leaderboard::rank_product(rows, product, limit))
    }
}

#[automock]
#[async_trait]
pub trait LeaderboardService: Send + Sync {
    /// Shops ranked by total quantity ordered at an event.
    async fn event_leaderboard(
        &self,
        event: EventUuid,
        limit: Option<u32>,
    ) -> Result<Leaderboard, LeaderboardServiceError>;

    /// Shops ranked by quantity of one product ordered at an event.
    async fn product_leaderboard(
        &self,
        event: EventUuid,
        product: ProductUuid,
        limit: Option<u32>,
    ) -> Result<Leaderboard, LeaderboardServiceError>;
}
