//! Products Data

use crate::domain::products::{errors::ProductsServiceError, records::ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
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
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub sku: String,
    pub name: String,
    pub name_local: Option<String>,
    pub description: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
    pub pack_size: u32,
    pub price: u64,
    pub is_active: bool,
}

/// `pack_size` is stored as `INTEGER` and `price` as `BIGINT`.
pub(crate) fn validate_product(
    sku: &str,
    name: &str,
    pack_size: u32,
    price: u64,
) -> Result<(), ProductsServiceError> {
    if sku.trim().is_empty() || name.trim().is_empty() {
        return Err(ProductsServiceError::InvalidData);
    }

    if pack_size == 0 || i32::try_from(pack_size).is_err() || i64::try_from(price).is_err() {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}
