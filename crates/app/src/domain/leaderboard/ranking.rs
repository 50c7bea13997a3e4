//! Leaderboard ranking.
//!
//! Input rows are already aggregated per shop and product by the database.
//! Ranking groups them per shop, orders shops by quantity and assigns
//! competition ranks: tied shops share a rank and the next rank skips ahead
//! (1, 2, 2, 4).

use std::{cmp::Ordering, collections::HashMap};

use smallvec::SmallVec;

use crate::domain::{customers::records::CustomerUuid, products::records::ProductUuid};

/// Number of shops shown when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Largest number of shops a leaderboard will return.
pub const MAX_LIMIT: usize = 100;

/// Quantity of one product ordered by one shop at one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub customer_uuid: CustomerUuid,
    pub customer_code: String,
    pub shop_name: String,
    pub product_uuid: ProductUuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuantity {
    pub product_uuid: ProductUuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub customer_uuid: CustomerUuid,
    pub customer_code: String,
    pub shop_name: String,
    pub total_quantity: u64,
    pub breakdown: SmallVec<[ProductQuantity; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

/// Resolve a requested limit: missing means [`DEFAULT_LIMIT`], anything else
/// is clamped to `1..=MAX_LIMIT`.
#[must_use]
pub fn clamp_limit(limit: Option<u32>) -> usize {
    limit.map_or(DEFAULT_LIMIT, |limit| {
        usize::try_from(limit).map_or(MAX_LIMIT, |limit| limit.clamp(1, MAX_LIMIT))
    })
}

impl Leaderboard {
    /// Rank every shop by its total quantity across all products.
    #[must_use]
    pub fn rank(rows: Vec<LeaderboardRow>, limit: Option<u32>) -> Self {
        let mut shops: HashMap<CustomerUuid, LeaderboardEntry> = HashMap::new();

        for row in rows {
            let entry = shops
                .entry(row.customer_uuid)
                .or_insert_with(|| LeaderboardEntry {
                    rank: 0,
                    customer_uuid: row.customer_uuid,
                    customer_code: row.customer_code.clone(),
                    shop_name: row.shop_name.clone(),
                    total_quantity: 0,
                    breakdown: SmallVec::new(),
                });

            entry.total_quantity = entry.total_quantity.saturating_add(row.quantity);

            match entry
                .breakdown
                .iter_mut()
                .find(|p| p.product_uuid == row.product_uuid)
            {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(row.quantity),
                None => entry.breakdown.push(ProductQuantity {
                    product_uuid: row.product_uuid,
                    sku: row.sku,
                    product_name: row.product_name,
                    quantity: row.quantity,
                }),
            }
        }

        let mut entries: Vec<LeaderboardEntry> = shops
            .into_values()
            .filter(|entry| entry.total_quantity > 0)
            .collect();

        for entry in &mut entries {
            entry
                .breakdown
                .sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
        }

        entries.sort_by(compare_entries);

        assign_ranks(&mut entries);

        entries.truncate(clamp_limit(limit));

        Self { entries }
    }

    /// Rank shops by the quantity of a single product.
    #[must_use]
    pub fn rank_product(
        rows: Vec<LeaderboardRow>,
        product: ProductUuid,
        limit: Option<u32>,
    ) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| row.product_uuid == product)
            .collect();

        Self::rank(rows, limit)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.total_quantity
        .cmp(&a.total_quantity)
        .then_with(|| a.shop_name.cmp(&b.shop_name))
        .then_with(|| a.customer_uuid.cmp(&b.customer_uuid))
}

fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    let mut previous: Option<(u64, u32)> = None;

    for (position, entry) in (1_u32..).zip(entries.iter_mut()) {
        let rank = match previous {
            Some((quantity, rank)) if quantity == entry.total_quantity => rank,
            _ => position,
        };

        entry.rank = rank;
        previous = Some((entry.total_quantity, rank));
    }
}
