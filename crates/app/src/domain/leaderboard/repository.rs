//! Leaderboard Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::try_get_u64,
    domain::{
        customers::records::CustomerUuid, events::records::EventUuid,
        leaderboard::ranking::LeaderboardRow, products::records::ProductUuid,
    },
};

const LEADERBOARD_ROWS_SQL: &str = include_str!("sql/leaderboard_rows.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLeaderboardRepository;

impl PgLeaderboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Per shop and product quantities for an event, optionally restricted to
    /// one product.
    pub(crate) async fn leaderboard_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
        product: Option<ProductUuid>,
    ) -> Result<Vec<LeaderboardRow>, sqlx::Error> {
        query_as::<Postgres, LeaderboardRow>(LEADERBOARD_ROWS_SQL)
            .bind(event.into_uuid())
            .bind(product.map(ProductUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for LeaderboardRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            customer_uuid: CustomerUuid::from_uuid(row.try_get::<Uuid, _>("customer_uuid")?),
            customer_code: row.try_get("customer_code")?,
            shop_name: row.try_get("shop_name")?,
            product_uuid: ProductUuid::from_uuid(row.try_get::<Uuid, _>("product_uuid")?),
            sku: row.try_get("sku")?,
            product_name: row.try_get("product_name")?,
            quantity: try_get_u64(row, "quantity")?,
        })
    }
}
