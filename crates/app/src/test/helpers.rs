//! Test Helpers

use jiff::civil::Date;

use crate::domain::{
    customers::{data::NewCustomer, records::CustomerUuid},
    events::{data::NewEvent, records::EventUuid},
    products::{data::NewProduct, records::ProductUuid},
};

/// An active event running from `starts_on` to `ends_on` inclusive.
pub(crate) fn new_event(uuid: EventUuid, starts_on: Date, ends_on: Date) -> NewEvent {
    NewEvent {
        uuid,
        name: format!("Event {starts_on}"),
        description: None,
        starts_on,
        ends_on,
        is_active: true,
    }
}

pub(crate) fn new_product(uuid: ProductUuid, sku: &str, pack_size: u32, price: u64) -> NewProduct {
    NewProduct {
        uuid,
        sku: sku.to_string(),
        name: format!("Product {sku}"),
        name_local: None,
        description: None,
        description_local: None,
        image_url: None,
        pack_size,
        price,
        is_active: true,
    }
}

pub(crate) fn new_customer(uuid: CustomerUuid, code: &str, shop_name: &str) -> NewCustomer {
    NewCustomer {
        uuid,
        code: code.to_string(),
        shop_name: shop_name.to_string(),
        contact_name: None,
        phone: None,
        province: None,
    }
}
