//! Leaderboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::leaderboard::{Leaderboard, LeaderboardEntry, ProductQuantity};

use crate::{extensions::*, leaderboard::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductQuantityResponse {
    pub product_uuid: Uuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: u64,
}

impl From<ProductQuantity> for ProductQuantityResponse {
    fn from(product: ProductQuantity) -> Self {
        Self {
            product_uuid: product.product_uuid.into(),
            sku: product.sku,
            product_name: product.product_name,
            quantity: product.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeaderboardEntryResponse {
    /// Competition rank: tied shops share a rank and the next rank is skipped
    pub rank: u32,
    pub customer_uuid: Uuid,
    pub customer_code: String,
    pub shop_name: String,
    pub total_quantity: u64,
    pub breakdown: Vec<ProductQuantityResponse>,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            customer_uuid: entry.customer_uuid.into(),
            customer_code: entry.customer_code,
            shop_name: entry.shop_name,
            total_quantity: entry.total_quantity,
            breakdown: entry.breakdown.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntryResponse>,
}

impl From<Leaderboard> for LeaderboardResponse {
    fn from(leaderboard: Leaderboard) -> Self {
        Self {
            entries: leaderboard.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Leaderboard Handler
///
/// Shops ranked by packages ordered at an event. With `product`, only that
/// product counts. `limit` defaults to 10 and is clamped to 1..=100, so
/// negative or huge values are accepted. Non-numeric limits are a 400.
#[endpoint(
    tags("leaderboard"),
    summary = "Event Leaderboard",
    responses(
        (status_code = StatusCode::OK, description = "Ranked shops"),
        (status_code = StatusCode::NOT_FOUND, description = "Event or product not found"),
    ),
)]
pub(crate) async fn handler(
    event: PathParam<Uuid>,
    limit: QueryParam<i64, false>,
    product: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<LeaderboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = event.into_inner().into();
    let limit = limit
        .into_inner()
        .map(|limit| u32::try_from(limit.max(0)).unwrap_or(u32::MAX));

    let leaderboard = match product.into_inner() {
        Some(product) => {
            state
                .app
                .leaderboard
                .product_leaderboard(event, product.into(), limit)
                .await
        }
        None => state.app.leaderboard.event_leaderboard(event, limit).await,
    }
    .map_err(into_status_error)?;

    Ok(Json(leaderboard.into()))
}
