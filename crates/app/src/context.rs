//! App Context

use std::sync::Arc;

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    auth::{AuthService, AuthSettings, PgAuthService},
    database::{self, Db},
    domain::{
        checkins::{CheckInsService, PgCheckInsService},
        customers::{CustomersService, PgCustomersService},
        dashboard::{DashboardService, PgDashboardService},
        events::{EventsService, PgEventsService},
        leaderboard::{LeaderboardService, PgLeaderboardService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub events: Arc<dyn EventsService>,
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub checkins: Arc<dyn CheckInsService>,
    pub orders: Arc<dyn OrdersService>,
    pub leaderboard: Arc<dyn LeaderboardService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub reports: Arc<dyn ReportsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL, applying any pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        auth_settings: AuthSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_pool(pool, auth_settings))
    }

    /// Wire every Postgres-backed service against an already migrated pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, auth_settings: AuthSettings) -> Self {
        let db = Db::new(pool.clone());

        Self {
            events: Arc::new(PgEventsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            checkins: Arc::new(PgCheckInsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            leaderboard: Arc::new(PgLeaderboardService::new(db.clone())),
            dashboard: Arc::new(PgDashboardService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db)),
            auth: Arc::new(PgAuthService::new(pool, auth_settings)),
        }
    }
}
