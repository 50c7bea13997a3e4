//! Create Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use showfloor_app::{
    auth::Permission,
    domain::products::{data::NewProduct, records::ProductUuid},
};

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub name_local: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_local: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub pack_size: u32,
    pub price: u64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.uuid.map_or_else(ProductUuid::new, Into::into),
            sku: request.sku,
            name: request.name,
            name_local: request.name_local,
            description: request.description,
            description_local: request.description_local,
            image_url: request.image_url,
            pack_size: request.pack_size,
            price: request.price,
            is_active: request.is_active,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    depot.require(Permission::ProductCreate)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.created_at(format!("/admin/products/{}", product.uuid))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showfloor_app::domain::products::ProductsServiceError;

    use crate::test_helpers::{Mocks, admin_service, make_product, service_with_grants};

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/products").post(handler)
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.sku == "PACK3"
                    && new.pack_size == 3
                    && new.price == 300
                    && new.is_active
            })
            .return_once(move |_| Ok(make_product(uuid)));

        let mut res = TestClient::post("http://example.com/admin/products")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "sku": "PACK3",
                "name": "Pack 3",
                "pack_size": 3,
                "price": 300,
            }))
            .send(&admin_service(mocks, route()))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/admin/products/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_sku_returns_409() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/products")
            .json(&json!({ "sku": "PACK3", "name": "Pack 3", "pack_size": 3, "price": 300 }))
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_before_service() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.products.expect_create_product().never();

        let res = TestClient::post("http://example.com/admin/products")
            .json(&json!({ "sku": "PACK3", "name": "Pack 3", "pack_size": 3, "price": -1 }))
            .send(&admin_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_requires_product_create() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.products.expect_create_product().never();

        let res = TestClient::post("http://example.com/admin/products")
            .json(&json!({ "sku": "PACK3", "name": "Pack 3", "pack_size": 3, "price": 300 }))
            .send(&service_with_grants(mocks, &["product:read"], route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
