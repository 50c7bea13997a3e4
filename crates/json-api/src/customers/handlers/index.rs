//! Customer Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use showfloor_app::auth::Permission;

use crate::{
    customers::{errors::into_status_error, handlers::CustomerResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomersResponse {
    pub customers: Vec<CustomerResponse>,
}

/// Customer Index Handler
#[endpoint(tags("customers"), summary = "List Shops", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CustomersResponse>, StatusError> {
    depot.require(Permission::CustomerRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customers = state
        .app
        .customers
        .list_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CustomersResponse {
        customers: customers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showfloor_app::domain::customers::records::CustomerUuid;

    use crate::test_helpers::{Mocks, admin_service, make_customer, service_with_grants};

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/customers").get(handler)
    }

    #[tokio::test]
    async fn test_index_lists_customers() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![make_customer(CustomerUuid::new())]));

        let body: CustomersResponse = TestClient::get("http://example.com/admin/customers")
            .send(&admin_service(mocks, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.customers.len(), 1, "expected one shop");
        assert_eq!(body.customers.first().map(|c| c.code.as_str()), Some("SHOP-01"));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_wildcard_grant_allows_read() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![]));

        let res = TestClient::get("http://example.com/admin/customers")
            .send(&service_with_grants(mocks, &["customer:*"], route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
