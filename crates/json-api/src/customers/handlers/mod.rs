//! Customer Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::domain::customers::records::CustomerRecord;

/// A registered shop.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    pub uuid: Uuid,
    /// Code the shop quotes at the counter, stored upper-case
    pub code: String,
    pub shop_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub province: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            uuid: customer.uuid.into(),
            code: customer.code,
            shop_name: customer.shop_name,
            contact_name: customer.contact_name,
            phone: customer.phone,
            province: customer.province,
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
            deleted_at: customer.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Shop details accepted on update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerDetails {
    pub code: String,
    pub shop_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
}
