//! Dashboard service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        dashboard::{
            errors::DashboardServiceError, records::EventSummary,
            repository::PgDashboardRepository,
        },
        events::{records::EventUuid, repository::PgEventsRepository},
        leaderboard::{Leaderboard, repository::PgLeaderboardRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgDashboardService {
    db: Db,
    repository: PgDashboardRepository,
    events: PgEventsRepository,
    leaderboard: PgLeaderboardRepository,
}

impl PgDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDashboardRepository::new(),
            events: PgEventsRepository::new(),
            leaderboard: PgLeaderboardRepository::new(),
        }
    }
}

#[async_trait]
impl DashboardService for PgDashboardService {
    async fn event_summary(&self, event: EventUuid) -> Result<EventSummary, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let event = self
            .events
            .find_event(&mut tx, event)
            .await?
            .ok_or(DashboardServiceError::EventNotFound)?;

        let totals = self.repository.event_totals(&mut tx, event.uuid).await?;

        let rows = self
            .leaderboard
            .leaderboard_rows(&mut tx, event.uuid, None)
            .await?;

        tx.commit().await?;

        Ok(EventSummary {
            event,
            totals,
            leaderboard: Leaderboard::rank(rows, None),
        })
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Counters and the top of the leaderboard for one event.
    async fn event_summary(&self, event: EventUuid) -> Result<EventSummary, DashboardServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        domain::{
            checkins::{CheckInsService, data::NewCheckIn, records::CheckInUuid},
            customers::{CustomersService, records::CustomerUuid},
            events::EventsService,
            orders::{
                OrdersService,
                data::{NewOrder, NewOrderItem},
                records::OrderUuid,
            },
            products::{ProductsService, records::ProductUuid},
        },
        test::{
            TestContext,
            helpers::{new_customer, new_event, new_product},
        },
    };

    use super::*;

    #[tokio::test]
    async fn summary_counts_activity() -> TestResult {
        let ctx = TestContext::new().await;
        let event = EventUuid::new();
        let pack = ProductUuid::new();

        ctx.events
            .create_event(new_event(event, date(2026, 6, 1), date(2026, 6, 2)))
            .await?;

        ctx.products
            .create_product(new_product(pack, "PACK3", 3, 250))
            .await?;

        ctx.customers
            .create_customer(new_customer(CustomerUuid::new(), "A1", "Alpha"))
            .await?;

        ctx.customers
            .create_customer(new_customer(CustomerUuid::new(), "B1", "Bravo"))
            .await?;

        ctx.checkins
            .check_in(
                event,
                NewCheckIn {
                    uuid: CheckInUuid::new(),
                    customer_code: "B1".to_string(),
                    date: date(2026, 6, 1),
                },
            )
            .await?;

        ctx.orders
            .place_order(
                event,
                NewOrder {
                    uuid: OrderUuid::new(),
                    customer_code: "A1".to_string(),
                    date: date(2026, 6, 1),
                    items: vec![NewOrderItem {
                        product: pack,
                        quantity: 4,
                    }],
                },
            )
            .await?;

        let summary = ctx.dashboard.event_summary(event).await?;

        assert_eq!(summary.event.uuid, event);
        assert_eq!(summary.totals.orders, 1);
        assert_eq!(summary.totals.checkins, 1);
        assert_eq!(summary.totals.shops, 2);
        assert_eq!(summary.totals.total_quantity, 4);
        assert_eq!(summary.totals.revenue, 1000);
        assert_eq!(summary.leaderboard.entries.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn empty_event_has_zero_totals() -> TestResult {
        let ctx = TestContext::new().await;
        let event = EventUuid::new();

        ctx.events
            .create_event(new_event(event, date(2026, 6, 1), date(2026, 6, 2)))
            .await?;

        let summary = ctx.dashboard.event_summary(event).await?;

        assert_eq!(summary.totals, Default::default());
        assert!(summary.leaderboard.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_event_returns_event_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.dashboard.event_summary(EventUuid::new()).await;

        assert!(
            matches!(result, Err(DashboardServiceError::EventNotFound)),
            "expected EventNotFound, got {result:?}"
        );
    }
}
