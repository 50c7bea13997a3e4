//! Order Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::orders::records::{OrderItemRecord, OrderRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    /// Package price when the order was placed
    pub unit_price: u64,
    pub line_total: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            sku: item.sku,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub event_uuid: Uuid,
    pub customer_uuid: Uuid,
    pub customer_code: String,
    pub shop_name: String,
    pub total_quantity: u64,
    pub total: u64,
    pub items: Vec<OrderItemResponse>,
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            event_uuid: order.event_uuid.into(),
            customer_uuid: order.customer_uuid.into(),
            customer_code: order.customer_code,
            shop_name: order.shop_name,
            total_quantity: order.total_quantity,
            total: order.total,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_order(
    uuid: showfloor_app::domain::orders::records::OrderUuid,
    event: showfloor_app::domain::events::records::EventUuid,
) -> OrderRecord {
    use jiff::Timestamp;
    use showfloor_app::domain::{
        customers::records::CustomerUuid, orders::records::OrderItemUuid,
        products::records::ProductUuid,
    };

    OrderRecord {
        uuid,
        event_uuid: event,
        customer_uuid: CustomerUuid::new(),
        customer_code: "SHOP-01".to_string(),
        shop_name: "Corner Shop".to_string(),
        total_quantity: 6,
        total: 600,
        items: vec![OrderItemRecord {
            uuid: OrderItemUuid::new(),
            order_uuid: uuid,
            product_uuid: ProductUuid::new(),
            sku: "PACK3".to_string(),
            product_name: "Pack 3".to_string(),
            quantity: 2,
            unit_price: 300,
            line_total: 600,
            created_at: Timestamp::UNIX_EPOCH,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
