//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::reports::{
        errors::ReportsServiceError,
        records::{CheckInReportRow, OrderReportRow, ReportFilter},
        repository::{PgReportsRepository, Window},
    },
    pagination::{Page, PageRequest},
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn order_rows(
        &self,
        filter: ReportFilter,
        page: PageRequest,
    ) -> Result<Page<OrderReportRow>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_order_rows(&mut tx, filter).await?;

        let rows = self
            .repository
            .order_rows(&mut tx, filter, Window::from(page))
            .await?;

        tx.commit().await?;

        Ok(Page::new(rows, page, total))
    }

    async fn checkin_rows(
        &self,
        filter: ReportFilter,
        page: PageRequest,
    ) -> Result<Page<CheckInReportRow>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_checkin_rows(&mut tx, filter).await?;

        let rows = self
            .repository
            .checkin_rows(&mut tx, filter, Window::from(page))
            .await?;

        tx.commit().await?;

        Ok(Page::new(rows, page, total))
    }

    async fn export_order_rows(
        &self,
        filter: ReportFilter,
    ) -> Result<Vec<OrderReportRow>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self
            .repository
            .order_rows(&mut tx, filter, Window::ALL)
            .await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn export_checkin_rows(
        &self,
        filter: ReportFilter,
    ) -> Result<Vec<CheckInReportRow>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self
            .repository
            .checkin_rows(&mut tx, filter, Window::ALL)
            .await?;

        tx.commit().await?;

        Ok(rows)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// One page of order lines, newest order first.
    async fn order_rows(
        &self,
        filter: ReportFilter,
        page: PageRequest,
    ) -> Result<Page<OrderReportRow>, ReportsServiceError>;

    /// One page of check-ins, newest first.
    async fn checkin_rows(
        &self,
        filter: ReportFilter,
        page: PageRequest,
    ) -> Result<Page<CheckInReportRow>, ReportsServiceError>;

    /// Every order line matching the filter.
    async fn export_order_rows(
        &self,
        filter: ReportFilter,
    ) -> Result<Vec<OrderReportRow>, ReportsServiceError>;

    /// Every check-in matching the filter.
    async fn export_checkin_rows(
        &self,
        filter: ReportFilter,
    ) -> Result<Vec<CheckInReportRow>, ReportsServiceError>;
}
