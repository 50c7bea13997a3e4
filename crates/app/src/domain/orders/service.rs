//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        customers::{data::normalize_code, repository::PgCustomersRepository},
        events::{records::EventUuid, repository::PgEventsRepository},
        orders::{
            data::{NewOrder, price_items, validate_items},
            errors::OrdersServiceError,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    customers: PgCustomersRepository,
    events: PgEventsRepository,
    products: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            customers: PgCustomersRepository::new(),
            events: PgEventsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

/// Distribute items onto their orders, keeping the order list's ordering.
fn attach_items(orders: &mut [OrderRecord], items: Vec<OrderItemRecord>) {
    let mut by_order: HashMap<OrderUuid, Vec<OrderItemRecord>> = HashMap::new();

    for item in items {
        by_order.entry(item.order_uuid).or_default().push(item);
    }

    for order in orders {
        if let Some(items) = by_order.remove(&order.uuid) {
            order.items = items;
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(
        &self,
        event: EventUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        validate_items(&order.items)?;

        let code = normalize_code(&order.customer_code);

        let mut tx = self.db.begin().await?;

        let customer = self
            .customers
            .find_customer_by_code(&mut tx, &code)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound)?;

        let event = self
            .events
            .find_event(&mut tx, event)
            .await?
            .ok_or(OrdersServiceError::EventNotFound)?;

        if !event.is_open_on(order.date) {
            debug!(event_uuid = %event.uuid, date = %order.date, "order refused, event closed");

            return Err(OrdersServiceError::EventClosed);
        }

        let product_uuids: Vec<ProductUuid> = order.items.iter().map(|i| i.product).collect();

        let products = self.products.get_products(&mut tx, &product_uuids).await?;

        let priced = price_items(&order.items, &products)?;

        let mut created = self
            .orders_repository
            .create_order(
                &mut tx,
                order.uuid,
                event.uuid,
                customer.uuid,
                priced.total_quantity,
                priced.total,
            )
            .await?;

        self.items_repository
            .create_order_items(&mut tx, created.uuid, &priced.lines)
            .await?;

        created.items = self
            .items_repository
            .get_order_items(&mut tx, &[created.uuid])
            .await?;

        tx.commit().await?;

        info!(
            order_uuid = %created.uuid,
            event_uuid = %created.event_uuid,
            customer_code = %created.customer_code,
            total_quantity = created.total_quantity,
            total = created.total,
            "order placed"
        );

        Ok(created)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders_repository.get_order(&mut tx, order).await?;

        order.items = self
            .items_repository
            .get_order_items(&mut tx, &[order.uuid])
            .await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self, event: EventUuid) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        self.events
            .find_event(&mut tx, event)
            .await?
            .ok_or(OrdersServiceError::EventNotFound)?;

        let mut orders = self.orders_repository.list_orders(&mut tx, event).await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|o| o.uuid).collect();

        let items = self.items_repository.get_order_items(&mut tx, &uuids).await?;

        tx.commit().await?;

        attach_items(&mut orders, items);

        Ok(orders)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.orders_repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(order_uuid = %order, "order deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places an order for a shop at an open event. Prices are taken from the
    /// current catalogue and totals are computed here, never by the caller.
    async fn place_order(
        &self,
        event: EventUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Orders placed at an event, newest first, with their items.
    async fn list_orders(&self, event: EventUuid) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Soft-deletes an order. Deleted orders no longer count towards the leaderboard.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}
