//! Customer Data

use crate::domain::customers::{errors::CustomersServiceError, records::CustomerUuid};

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: CustomerUuid,
    pub code: String,
    pub shop_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub province: Option<String>,
}

/// Customer Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerUpdate {
    pub code: String,
    pub shop_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub province: Option<String>,
}

/// Canonical form of a shop code: surrounding whitespace removed, upper case.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub(crate) fn validate_customer(code: &str, shop_name: &str) -> Result<(), CustomersServiceError> {
    if code.is_empty() || shop_name.trim().is_empty() {
        return Err(CustomersServiceError::InvalidData);
    }

    Ok(())
}
