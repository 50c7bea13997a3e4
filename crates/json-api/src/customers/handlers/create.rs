//! Create Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::{
    auth::Permission,
    domain::customers::{data::NewCustomer, records::CustomerUuid},
};

use crate::{
    customers::{errors::into_status_error, handlers::CustomerResponse},
    extensions::*,
    state::State,
};

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub code: String,
    pub shop_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            uuid: request.uuid.map_or_else(CustomerUuid::new, Into::into),
            code: request.code,
            shop_name: request.shop_name,
            contact_name: request.contact_name,
            phone: request.phone,
            province: request.province,
        }
    }
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Register Shop",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Shop registered"),
        (status_code = StatusCode::CONFLICT, description = "Shop code already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, StatusError> {
    depot.require(Permission::CustomerCreate)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .create_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.created_at(format!("/admin/customers/{}", customer.uuid))?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::domain::customers::CustomersServiceError;

    use crate::test_helpers::{Mocks, admin_service, make_customer};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/customers").post(handler))
    }

    #[tokio::test]
    async fn test_create_customer_success() -> TestResult {
        let uuid = CustomerUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .customers
            .expect_create_customer()
            .once()
            .withf(move |new| {
                *new == NewCustomer {
                    uuid,
                    code: "shop-01".to_string(),
                    shop_name: "Corner Shop".to_string(),
                    contact_name: None,
                    phone: Some("0800".to_string()),
                    province: None,
                }
            })
            .return_once(move |_| Ok(make_customer(uuid)));

        let mut res = TestClient::post("http://example.com/admin/customers")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "code": "shop-01",
                "shop_name": "Corner Shop",
                "phone": "0800",
            }))
            .send(&make_service(mocks))
            .await;

        let body: CustomerResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.code, "SHOP-01");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_code_returns_409() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .customers
            .expect_create_customer()
            .once()
            .return_once(|_| Err(CustomersServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/customers")
            .json(&json!({ "code": "SHOP-01", "shop_name": "Corner Shop" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
