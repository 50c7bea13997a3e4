//! Order Records

use jiff::Timestamp;

use crate::{
    domain::{
        customers::records::CustomerUuid, events::records::EventUuid,
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub event_uuid: EventUuid,
    pub customer_uuid: CustomerUuid,
    pub customer_code: String,
    pub shop_name: String,
    pub total_quantity: u64,
    pub total: u64,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Item Record
///
/// `unit_price` is the product price at the moment the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
    pub created_at: Timestamp,
}
