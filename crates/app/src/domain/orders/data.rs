//! Order Data

use std::collections::{HashMap, HashSet};

use jiff::civil::Date;

use crate::domain::{
    orders::{
        errors::OrdersServiceError,
        records::{OrderItemUuid, OrderUuid},
    },
    products::records::{ProductRecord, ProductUuid},
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer_code: String,
    /// Civil date the order is placed on, in the event time zone.
    pub date: Date,
    pub items: Vec<NewOrderItem>,
}

/// New Order Item Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product: ProductUuid,
    pub quantity: u32,
}

/// A line with its price fixed from the product catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PricedLine {
    pub uuid: OrderItemUuid,
    pub product: ProductUuid,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

/// Lines plus totals, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PricedOrder {
    pub lines: Vec<PricedLine>,
    pub total_quantity: u64,
    pub total: u64,
}

/// Largest quantity an `INTEGER` column holds.
const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Largest amount a `BIGINT` column holds.
const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Reject empty orders, zero or oversized quantities and repeated products.
pub(crate) fn validate_items(items: &[NewOrderItem]) -> Result<(), OrdersServiceError> {
    if items.is_empty() {
        return Err(OrdersServiceError::InvalidData);
    }

    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.quantity == 0 || item.quantity > MAX_QUANTITY || !seen.insert(item.product) {
            return Err(OrdersServiceError::InvalidData);
        }
    }

    Ok(())
}

/// Price every line against `products`.
///
/// Products that are missing or not orderable are an invalid reference;
/// amounts that overflow or do not fit a `BIGINT` column are invalid data.
pub(crate) fn price_items(
    items: &[NewOrderItem],
    products: &[ProductRecord],
) -> Result<PricedOrder, OrdersServiceError> {
    let by_uuid: HashMap<ProductUuid, &ProductRecord> =
        products.iter().map(|p| (p.uuid, p)).collect();

    let mut lines = Vec::with_capacity(items.len());
    let mut total_quantity: u64 = 0;
    let mut total: u64 = 0;

    for item in items {
        let product = by_uuid
            .get(&item.product)
            .filter(|p| p.is_orderable())
            .ok_or(OrdersServiceError::InvalidReference)?;

        let line_total = product
            .price
            .checked_mul(u64::from(item.quantity))
            .filter(|amount| *amount <= MAX_AMOUNT)
            .ok_or(OrdersServiceError::InvalidData)?;

        total = total
            .checked_add(line_total)
            .filter(|amount| *amount <= MAX_AMOUNT)
            .ok_or(OrdersServiceError::InvalidData)?;

        total_quantity = total_quantity
            .checked_add(u64::from(item.quantity))
            .filter(|amount| *amount <= MAX_AMOUNT)
            .ok_or(OrdersServiceError::InvalidData)?;

        lines.push(PricedLine {
            uuid: OrderItemUuid::new(),
            product: item.product,
            quantity: item.quantity,
            unit_price: product.price,
            line_total,
        });
    }

    Ok(PricedOrder {
        lines,
        total_quantity,
        total,
    })
}
