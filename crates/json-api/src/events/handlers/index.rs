//! Event Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use showfloor_app::auth::Permission;

use crate::{
    events::{
        errors::into_status_error,
        handlers::{EventResponse, open::EventsResponse},
    },
    extensions::*,
    state::State,
};

/// Event Index Handler
///
/// Every event that has not been deleted, latest start first.
#[endpoint(tags("events"), summary = "List Events", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<EventsResponse>, StatusError> {
    depot.require(Permission::EventRead)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let today = state.today();

    let events = state
        .app
        .events
        .list_events()
        .await
        .map_err(into_status_error)?;

    Ok(Json(EventsResponse {
        events: events
            .into_iter()
            .map(|event| EventResponse::new(event, today))
            .collect(),
    }))
}
