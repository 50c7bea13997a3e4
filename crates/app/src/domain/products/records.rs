//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
///
/// A package sold at events. `price` is in minor currency units and covers the
/// whole pack of `pack_size` units.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub sku: String,
    pub name: String,
    pub name_local: Option<String>,
    pub description: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
    pub pack_size: u32,
    pub price: u64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// Whether the product can be added to a new order.
    #[must_use]
    pub fn is_orderable(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }
}
