//! Sample Data
//!
//! Idempotent demo data for a fresh install, and the matching wipe.

use jiff::{ToSpan, civil::Date};
use sqlx::{PgPool, query};
use thiserror::Error;

use crate::{
    context::AppContext,
    domain::{
        checkins::{
            CheckInsService, CheckInsServiceError, data::NewCheckIn, records::CheckInUuid,
        },
        customers::{
            CustomersService, CustomersServiceError, data::NewCustomer, records::CustomerUuid,
        },
        events::{EventsService, EventsServiceError, data::NewEvent, records::EventUuid},
        orders::{
            OrdersService, OrdersServiceError,
            data::{NewOrder, NewOrderItem},
            records::OrderUuid,
        },
        products::{
            ProductsService, ProductsServiceError, data::NewProduct, records::ProductUuid,
        },
    },
};

/// Name of the event created by [`seed`].
pub const SAMPLE_EVENT: &str = "Showfloor Sample Event";

/// (sku, name, pack size, price)
const SAMPLE_PRODUCTS: [(&str, &str, u32, u64); 3] = [
    ("PACK-3", "Pack 3", 3, 29_000),
    ("PACK-5", "Pack 5", 5, 46_000),
    ("PACK-7", "Pack 7", 7, 62_000),
];

/// (code, shop name, province)
const SAMPLE_SHOPS: [(&str, &str, &str); 4] = [
    ("SHOP-001", "Corner Mart", "Bangkok"),
    ("SHOP-002", "Riverside Grocery", "Chiang Mai"),
    ("SHOP-003", "Hilltop Store", "Khon Kaen"),
    ("SHOP-004", "Harbour Minimart", "Phuket"),
];

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("event end date is out of range")]
    EventDates(#[source] jiff::Error),

    #[error(transparent)]
    Events(#[from] EventsServiceError),

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Customers(#[from] CustomersServiceError),

    #[error(transparent)]
    CheckIns(#[from] CheckInsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error("failed to clear data")]
    Clear(#[source] sqlx::Error),
}

/// What a [`seed`] run left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub event: EventUuid,
    pub products_created: usize,
    pub shops_created: usize,
    pub orders_created: usize,
}

/// Insert the sample event, products and shops, skipping rows that already
/// exist. With `with_activity`, every shop checks in on `today` and orders
/// are placed while the event has none.
///
/// `today` is the civil date in the event time zone.
///
/// # Errors
///
/// Returns an error when any service call fails.
pub async fn seed(
    app: &AppContext,
    today: Date,
    with_activity: bool,
) -> Result<SeedSummary, SampleError> {
    let event = seed_event(app, today).await?;
    let (products, products_created) = seed_products(app).await?;
    let shops_created = seed_shops(app).await?;

    let orders_created = if with_activity {
        seed_activity(app, event, today, &products).await?
    } else {
        0
    };

    Ok(SeedSummary {
        event,
        products_created,
        shops_created,
        orders_created,
    })
}

/// Remove all catalogue and activity data. Admin users, roles and sessions
/// are kept.
///
/// # Errors
///
/// Returns an error when the truncate fails.
pub async fn clear(pool: &PgPool) -> Result<(), SampleError> {
    query("TRUNCATE order_items, orders, checkins, customers, products, events")
        .execute(pool)
        .await
        .map_err(SampleError::Clear)?;

    Ok(())
}

/// Reuse a sample event that is open today, otherwise start a new one.
async fn seed_event(app: &AppContext, today: Date) -> Result<EventUuid, SampleError> {
    let events = app.events.list_events().await?;

    if let Some(existing) = events
        .iter()
        .find(|event| event.name == SAMPLE_EVENT && event.is_open_on(today))
    {
        return Ok(existing.uuid);
    }

    let ends_on = today
        .checked_add(30.days())
        .map_err(SampleError::EventDates)?;

    let event = app
        .events
        .create_event(NewEvent {
            uuid: EventUuid::new(),
            name: SAMPLE_EVENT.to_string(),
            description: Some("Sample event created by the seed command".to_string()),
            starts_on: today,
            ends_on,
            is_active: true,
        })
        .await?;

    Ok(event.uuid)
}

async fn seed_products(app: &AppContext) -> Result<(Vec<ProductUuid>, usize), SampleError> {
    let existing = app.products.list_products().await?;

    let mut uuids = Vec::with_capacity(SAMPLE_PRODUCTS.len());
    let mut created = 0;

    for (sku, name, pack_size, price) in SAMPLE_PRODUCTS {
        if let Some(product) = existing.iter().find(|product| product.sku == sku) {
            uuids.push(product.uuid);
            continue;
        }

        let product = app
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                sku: sku.to_string(),
                name: name.to_string(),
                name_local: None,
                description: Some(format!("{pack_size} cartons per pack")),
                description_local: None,
                image_url: None,
                pack_size,
                price,
                is_active: true,
            })
            .await?;

        uuids.push(product.uuid);
        created += 1;
    }

    Ok((uuids, created))
}

async fn seed_shops(app: &AppContext) -> Result<usize, SampleError> {
    let mut created = 0;

    for (code, shop_name, province) in SAMPLE_SHOPS {
        match app.customers.find_customer_by_code(code).await {
            Ok(_) => continue,
            Err(CustomersServiceError::NotFound) => {}
            Err(error) => return Err(error.into()),
        }

        app.customers
            .create_customer(NewCustomer {
                uuid: CustomerUuid::new(),
                code: code.to_string(),
                shop_name: shop_name.to_string(),
                contact_name: None,
                phone: None,
                province: Some(province.to_string()),
            })
            .await?;

        created += 1;
    }

    Ok(created)
}

async fn seed_activity(
    app: &AppContext,
    event: EventUuid,
    today: Date,
    products: &[ProductUuid],
) -> Result<usize, SampleError> {
    for (code, ..) in SAMPLE_SHOPS {
        let checked_in = app
            .checkins
            .check_in(
                event,
                NewCheckIn {
                    uuid: CheckInUuid::new(),
                    customer_code: code.to_string(),
                    date: today,
                },
            )
            .await;

        match checked_in {
            Ok(_) | Err(CheckInsServiceError::AlreadyCheckedIn) => {}
            Err(error) => return Err(error.into()),
        }
    }

    if !app.orders.list_orders(event).await?.is_empty() {
        return Ok(0);
    }

    for (position, (code, ..)) in (1_u32..).zip(SAMPLE_SHOPS) {
        let items = products
            .iter()
            .zip(1_u32..)
            .map(|(product, offset)| NewOrderItem {
                product: *product,
                quantity: position * offset,
            })
            .collect();

        app.orders
            .place_order(
                event,
                NewOrder {
                    uuid: OrderUuid::new(),
                    customer_code: code.to_string(),
                    date: today,
                    items,
                },
            )
            .await?;
    }

    Ok(SAMPLE_SHOPS.len())
}
