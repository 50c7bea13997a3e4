//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use showfloor_app::auth::Permission;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::ProductsResponse},
    state::State,
};

/// Product Index Handler
#[endpoint(tags("products"), summary = "List Products", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    depot.require(Permission::ProductRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
